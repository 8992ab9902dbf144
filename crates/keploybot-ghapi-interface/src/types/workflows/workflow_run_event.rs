use serde::{Deserialize, Serialize};

use super::{GhWorkflowRun, GhWorkflowRunAction};
use crate::types::common::{GhRepository, GhUser};

/// GitHub Workflow run event.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Default)]
pub struct GhWorkflowRunEvent {
    /// Action.
    pub action: GhWorkflowRunAction,
    /// Workflow run.
    pub workflow_run: GhWorkflowRun,
    /// Repository.
    pub repository: GhRepository,
    /// Sender.
    pub sender: GhUser,
}
