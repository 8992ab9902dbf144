//! Logic errors.

use thiserror::Error;

/// Logic error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DomainError {
    /// Wraps [`keploybot_ghapi_interface::ApiError`].
    #[error("API error: {source}")]
    ApiError {
        source: keploybot_ghapi_interface::ApiError,
    },

    /// Wraps [`zip::result::ZipError`].
    #[error("Error while opening report archive: {source}")]
    ReportArchiveError { source: zip::result::ZipError },
}

impl From<keploybot_ghapi_interface::ApiError> for DomainError {
    fn from(e: keploybot_ghapi_interface::ApiError) -> Self {
        Self::ApiError { source: e }
    }
}

impl From<zip::result::ZipError> for DomainError {
    fn from(e: zip::result::ZipError) -> Self {
        Self::ReportArchiveError { source: e }
    }
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;
