use serde::{Deserialize, Serialize};

/// GitHub Workflow run conclusion.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GhWorkflowRunConclusion {
    /// Success.
    Success,
    /// Failure.
    Failure,
    /// Neutral.
    Neutral,
    /// Cancelled.
    Cancelled,
    /// Timed out.
    TimedOut,
    /// Action required.
    ActionRequired,
    /// Stale.
    Stale,
    /// Skipped.
    Skipped,
    /// Startup failure.
    StartupFailure,
}
