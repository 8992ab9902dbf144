//! GitHub types.

mod common;
mod issues;
mod ping;
mod pulls;
mod workflows;

pub use common::{GhBranch, GhLabel, GhRepository, GhUser};
pub use issues::{
    GhIssue, GhIssueAction, GhIssueComment, GhIssueCommentAction, GhIssueCommentEvent,
    GhIssueEvent, GhIssuePullRequestLink, GhIssueState,
};
pub use ping::GhPingEvent;
pub use pulls::{GhPullRequest, GhPullRequestAction, GhPullRequestEvent, GhPullRequestState};
pub use workflows::{
    GhArtifact, GhWorkflow, GhWorkflowRun, GhWorkflowRunAction, GhWorkflowRunConclusion,
    GhWorkflowRunEvent,
};
