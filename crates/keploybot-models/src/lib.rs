//! Domain models.

mod pull_request_handle;
mod repository_path;
mod test_set_outcome;
mod test_set_status;

pub use pull_request_handle::{PullRequestHandle, PullRequestHandleError};
pub use repository_path::{RepositoryPath, RepositoryPathError};
pub use test_set_outcome::TestSetOutcome;
pub use test_set_status::{TestSetStatus, TestSetStatusError};
