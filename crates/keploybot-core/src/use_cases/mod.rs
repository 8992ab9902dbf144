//! Use cases.

pub mod comments;
pub mod dispatch;
pub mod issues;
pub mod pulls;
pub mod reports;
pub mod runs;
