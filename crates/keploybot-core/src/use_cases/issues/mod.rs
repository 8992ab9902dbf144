pub(crate) mod process_issue_opened;

pub use process_issue_opened::ProcessIssueOpenedInterface;

#[cfg(any(test, feature = "testkit"))]
pub use process_issue_opened::MockProcessIssueOpenedInterface;
