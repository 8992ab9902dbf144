use serde::{Deserialize, Serialize};

/// GitHub Issue action.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum GhIssueAction {
    /// Opened.
    #[default]
    Opened,
    /// Edited.
    Edited,
    /// Deleted.
    Deleted,
    /// Closed.
    Closed,
    /// Reopened.
    Reopened,
    /// Assigned.
    Assigned,
    /// Unassigned.
    Unassigned,
    /// Labeled.
    Labeled,
    /// Unlabeled.
    Unlabeled,
}
