use serde::{Deserialize, Serialize};

/// GitHub Pull request action.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum GhPullRequestAction {
    /// Opened.
    #[default]
    Opened,
    /// Edited.
    Edited,
    /// Closed.
    Closed,
    /// Reopened.
    Reopened,
    /// Synchronize.
    Synchronize,
    /// Ready for review.
    ReadyForReview,
    /// Converted to draft.
    ConvertedToDraft,
    /// Assigned.
    Assigned,
    /// Unassigned.
    Unassigned,
    /// Labeled.
    Labeled,
    /// Unlabeled.
    Unlabeled,
    /// Review requested.
    ReviewRequested,
    /// Review request removed.
    ReviewRequestRemoved,
    /// Locked.
    Locked,
    /// Unlocked.
    Unlocked,
}
