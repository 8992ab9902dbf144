use serde::{Deserialize, Serialize};

/// GitHub Workflow run artifact.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhArtifact {
    /// ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Expired.
    pub expired: bool,
}
