//! GitHub API adapter.

mod adapter;
mod auth;
mod errors;

pub use adapter::GithubApiService;
pub use errors::GitHubError;
