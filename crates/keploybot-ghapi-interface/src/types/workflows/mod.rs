mod artifact;
mod workflow;
mod workflow_run;
mod workflow_run_action;
mod workflow_run_conclusion;
mod workflow_run_event;

pub use artifact::GhArtifact;
pub use workflow::GhWorkflow;
pub use workflow_run::GhWorkflowRun;
pub use workflow_run_action::GhWorkflowRunAction;
pub use workflow_run_conclusion::GhWorkflowRunConclusion;
pub use workflow_run_event::GhWorkflowRunEvent;
