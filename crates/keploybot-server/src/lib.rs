//! Server module.

#![warn(clippy::all)]

pub mod constants;
pub mod errors;
mod event_type;
mod health;
pub mod middlewares;
pub mod server;
pub mod utils;
mod webhook;

pub use errors::{Result, ServerError};
