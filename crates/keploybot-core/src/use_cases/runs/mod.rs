pub(crate) mod fetch_run_artifact;
pub(crate) mod find_associated_pull_request;
pub(crate) mod handle_workflow_run_event;

pub use fetch_run_artifact::FetchRunArtifactInterface;
pub use find_associated_pull_request::FindAssociatedPullRequestInterface;
pub use handle_workflow_run_event::HandleWorkflowRunEventInterface;

#[cfg(any(test, feature = "testkit"))]
pub use fetch_run_artifact::MockFetchRunArtifactInterface;
#[cfg(any(test, feature = "testkit"))]
pub use find_associated_pull_request::MockFindAssociatedPullRequestInterface;
#[cfg(any(test, feature = "testkit"))]
pub use handle_workflow_run_event::MockHandleWorkflowRunEventInterface;
