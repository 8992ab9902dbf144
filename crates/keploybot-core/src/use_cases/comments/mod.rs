pub(crate) mod handle_issue_comment_event;
pub(crate) mod post_welcome_comment;

pub use handle_issue_comment_event::HandleIssueCommentEventInterface;
pub use post_welcome_comment::PostWelcomeCommentInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    handle_issue_comment_event::MockHandleIssueCommentEventInterface,
    post_welcome_comment::MockPostWelcomeCommentInterface,
};
