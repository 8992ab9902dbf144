//! Validation utilities.

use std::fmt::Write;

use keploybot_config::Config;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables:\n{errors}")]
    EnvVarsError { errors: String },
}

fn validate_env_vars(config: &Config) -> Result<(), ValidationError> {
    #[inline]
    fn _missing(error: &mut String, name: &str) {
        error.push('\n');
        let _ = write!(error, "  - Missing env. var.: {}", name);
    }

    let mut error = String::new();

    // Check server configuration
    if config.server.bind_ip.is_empty() {
        _missing(&mut error, "BOT_SERVER_BIND_IP");
    }
    if config.server.bind_port == 0 {
        _missing(&mut error, "BOT_SERVER_BIND_PORT");
    }

    // Check API credentials
    if config.api.github.token.is_empty() {
        _missing(&mut error, "BOT_API_GITHUB_TOKEN");
    }

    // Check workflow configuration
    if config.workflow.file_id.is_empty() {
        _missing(&mut error, "BOT_WORKFLOW_FILE_ID");
    }
    if config.workflow.run_name.is_empty() {
        _missing(&mut error, "BOT_WORKFLOW_RUN_NAME");
    }
    if config.workflow.artifact_name.is_empty() {
        _missing(&mut error, "BOT_WORKFLOW_ARTIFACT_NAME");
    }
    if config.workflow.trigger_command.is_empty() {
        _missing(&mut error, "BOT_WORKFLOW_TRIGGER_COMMAND");
    }

    if error.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError { errors: error })
    }
}

/// Validate configuration.
pub fn validate_configuration(config: &Config) -> Result<(), ValidationError> {
    validate_env_vars(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> Config {
        let mut config = Config::from_env_no_version();
        config.api.github.token = "gh-token".into();
        config
    }

    #[test]
    fn validate_valid_configuration() {
        assert!(validate_configuration(&sample_config()).is_ok());
    }

    #[test]
    fn validate_missing_token() {
        let mut config = sample_config();
        config.api.github.token = String::new();

        let error = validate_configuration(&config).unwrap_err();
        assert!(error.to_string().contains("BOT_API_GITHUB_TOKEN"));
    }

    #[test]
    fn validate_missing_trigger_command() {
        let mut config = sample_config();
        config.workflow.trigger_command = String::new();

        let error = validate_configuration(&config).unwrap_err();
        assert!(error.to_string().contains("BOT_WORKFLOW_TRIGGER_COMMAND"));
    }
}
