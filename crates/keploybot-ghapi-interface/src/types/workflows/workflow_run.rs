use serde::{Deserialize, Serialize};

use super::GhWorkflowRunConclusion;

/// GitHub Workflow run.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhWorkflowRun {
    /// ID.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Head branch.
    pub head_branch: String,
    /// Head SHA.
    pub head_sha: String,
    /// Conclusion, absent until the run completes.
    pub conclusion: Option<GhWorkflowRunConclusion>,
}
