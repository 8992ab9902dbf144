use serde::{Deserialize, Serialize};

/// GitHub Workflow definition.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhWorkflow {
    /// ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Path.
    pub path: String,
    /// State.
    pub state: String,
}
