//! Logic module.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

mod context;
pub mod errors;
pub mod use_cases;

pub use context::CoreContext;
pub use errors::{DomainError, Result};
use shaku::module;
use use_cases::{
    comments::{
        handle_issue_comment_event::HandleIssueCommentEvent,
        post_welcome_comment::PostWelcomeComment,
    },
    dispatch::run_test_command::RunTestCommand,
    issues::process_issue_opened::ProcessIssueOpened,
    pulls::process_pull_request_opened::ProcessPullRequestOpened,
    runs::{
        fetch_run_artifact::FetchRunArtifact,
        find_associated_pull_request::FindAssociatedPullRequest,
        handle_workflow_run_event::HandleWorkflowRunEvent,
    },
};

module! {
    pub CoreModule {
        components = [
            HandleIssueCommentEvent, PostWelcomeComment, RunTestCommand,
            ProcessIssueOpened, ProcessPullRequestOpened,
            HandleWorkflowRunEvent, FindAssociatedPullRequest, FetchRunArtifact
        ],
        providers = []
    }
}
