//! Crypto module.

mod errors;
mod sig;

pub use self::{
    errors::{CryptoError, Result},
    sig::Signature,
};
