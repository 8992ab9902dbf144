//! Config module.

use std::env;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// GitHub options.
    pub github: ApiGitHubConfig,
}

#[derive(Debug, Clone)]
pub struct ApiGitHubConfig {
    /// GitHub API connect timeout (in milliseconds).
    pub connect_timeout: u64,
    /// GitHub API per-request timeout (in milliseconds).
    pub request_timeout: u64,
    /// GitHub API root URL.
    pub root_url: String,
    /// GitHub API token.
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind IP.
    pub bind_ip: String,
    /// Server bind port.
    pub bind_port: u16,
    /// Server workers count.
    pub workers_count: Option<u16>,
    /// Server webhook secret.
    pub webhook_secret: String,
    /// Disable webhook signature verification.
    pub disable_webhook_signature: bool,
    /// Enable welcome comments.
    pub enable_welcome_comments: bool,
}

#[derive(Debug, Clone)]
pub struct WorkflowConfig {
    /// Workflow file identifier used for dispatch.
    pub file_id: String,
    /// Workflow run display name to react on.
    pub run_name: String,
    /// Result artifact name.
    pub artifact_name: String,
    /// Comment token triggering a test dispatch.
    pub trigger_command: String,
    /// Login of the platform automation actor, always ignored.
    pub automation_login: String,
}

/// Bot configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bot username.
    pub name: String,
    /// API options.
    pub api: ApiConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// Server options.
    pub server: ServerConfig,
    /// Workflow options.
    pub workflow: WorkflowConfig,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Config {
        Config {
            name: env_to_str("BOT_NAME", "keploybot"),
            api: ApiConfig {
                github: ApiGitHubConfig {
                    connect_timeout: env_to_u64("BOT_API_GITHUB_CONNECT_TIMEOUT", 5000),
                    request_timeout: env_to_u64("BOT_API_GITHUB_REQUEST_TIMEOUT", 30000),
                    root_url: env_to_str("BOT_API_GITHUB_ROOT_URL", "https://api.github.com"),
                    token: env_to_str("BOT_API_GITHUB_TOKEN", ""),
                },
            },
            logging: LoggingConfig {
                use_bunyan: env_to_bool("BOT_LOGGING_USE_BUNYAN", false),
            },
            server: ServerConfig {
                bind_ip: env_to_str("BOT_SERVER_BIND_IP", "127.0.0.1"),
                bind_port: env_to_u16("BOT_SERVER_BIND_PORT", 8008),
                workers_count: env_to_optional_u16("BOT_SERVER_WORKERS_COUNT", None),
                webhook_secret: env_to_str("BOT_SERVER_WEBHOOK_SECRET", ""),
                disable_webhook_signature: env_to_bool(
                    "BOT_SERVER_DISABLE_WEBHOOK_SIGNATURE",
                    false,
                ),
                enable_welcome_comments: env_to_bool("BOT_SERVER_ENABLE_WELCOME_COMMENTS", true),
            },
            workflow: WorkflowConfig {
                file_id: env_to_str("BOT_WORKFLOW_FILE_ID", "main.yml"),
                run_name: env_to_str("BOT_WORKFLOW_RUN_NAME", "Keploy Test Workflow"),
                artifact_name: env_to_str("BOT_WORKFLOW_ARTIFACT_NAME", "keploy-reports"),
                trigger_command: env_to_str("BOT_WORKFLOW_TRIGGER_COMMAND", "/keploy-test"),
                automation_login: env_to_str("BOT_WORKFLOW_AUTOMATION_LOGIN", "github-actions[bot]"),
            },
            version,
        }
    }

    pub fn from_env_no_version() -> Self {
        Self::from_env("0.0.0".into())
    }
}

fn env_to_u16(name: &str, default: u16) -> u16 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_optional_u16(name: &str, default: Option<u16>) -> Option<u16> {
    env::var(name)
        .map(|e| e.parse::<u16>().map(Some).unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name).map(|e| !e.is_empty()).unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name)
        .unwrap_or_else(|_e| default.to_string())
        .replace("\\n", "\n")
}
