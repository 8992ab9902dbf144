pub(crate) mod process_pull_request_opened;

pub use process_pull_request_opened::ProcessPullRequestOpenedInterface;

#[cfg(any(test, feature = "testkit"))]
pub use process_pull_request_opened::MockProcessPullRequestOpenedInterface;
