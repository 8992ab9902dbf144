use serde::{Deserialize, Serialize};

/// GitHub Workflow run action.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum GhWorkflowRunAction {
    /// Requested.
    #[default]
    Requested,
    /// In progress.
    InProgress,
    /// Completed.
    Completed,
}
