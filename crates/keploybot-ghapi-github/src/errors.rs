use keploybot_ghapi_interface::ApiError;

#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum GitHubError {
    #[error(transparent)]
    HttpError { source: reqwest::Error },

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

impl From<reqwest::Error> for GitHubError {
    fn from(e: reqwest::Error) -> Self {
        GitHubError::HttpError { source: e }
    }
}

impl From<GitHubError> for ApiError {
    fn from(e: GitHubError) -> Self {
        match e {
            GitHubError::WorkflowDispatchError {
                workflow_id,
                repository_path,
            } => ApiError::WorkflowDispatchError {
                workflow_id,
                repository_path,
            },
            e => ApiError::ImplementationError { source: e.into() },
        }
    }
}
