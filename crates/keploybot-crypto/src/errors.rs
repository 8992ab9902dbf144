//! Crypto errors.

use thiserror::Error;

/// Crypto error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Invalid secret key")]
    InvalidSecretKey,
}

/// Result alias for `CryptoError`.
pub type Result<T> = core::result::Result<T, CryptoError>;
