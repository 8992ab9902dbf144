//! API errors.

use thiserror::Error;

/// API error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ApiError {
    /// Workflow dispatch error.
    #[error(
        "Could not dispatch workflow {} on repository {}",
        workflow_id,
        repository_path
    )]
    WorkflowDispatchError {
        workflow_id: String,
        repository_path: String,
    },

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

/// Result alias for `ApiError`.
pub type Result<T, E = ApiError> = core::result::Result<T, E>;
