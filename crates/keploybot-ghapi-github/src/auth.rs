//! Auth.

use std::time::Duration;

use http::{header, HeaderMap};
use keploybot_config::Config;
use reqwest::ClientBuilder;

use crate::errors::GitHubError;

/// Get an authenticated GitHub client builder.
pub fn get_authenticated_client_builder(config: &Config) -> Result<ClientBuilder, GitHubError> {
    let builder = get_anonymous_client_builder(config)?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static("application/vnd.github+json"),
    );
    headers.insert(
        header::AUTHORIZATION,
        header::HeaderValue::from_str(&format!("Bearer {}", config.api.github.token)).map_err(
            |e| GitHubError::ImplementationError { source: e.into() },
        )?,
    );

    Ok(builder.default_headers(headers))
}

/// Get anonymous GitHub client builder.
pub fn get_anonymous_client_builder(config: &Config) -> Result<ClientBuilder, GitHubError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static("application/vnd.github+json"),
    );

    Ok(ClientBuilder::new()
        .connect_timeout(Duration::from_millis(config.api.github.connect_timeout))
        .timeout(Duration::from_millis(config.api.github.request_timeout))
        .user_agent(format!("keploybot/{}", config.version))
        .default_headers(headers))
}

/// Build a GitHub URL.
pub fn build_github_url<T: Into<String>>(config: &Config, path: T) -> String {
    format!("{}{}", config.api.github.root_url, path.into())
}
