//! CLI module.

use anyhow::Result;
use args::{Args, CommandExecutor};
use clap::Parser;
use keploybot_config::Config;
use keploybot_logging::configure_logging;
use tracing::info;

pub(crate) mod args;
mod commands;
mod config_validator;

/// Initialize command line.
pub fn initialize_command_line() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env(env!("CARGO_PKG_VERSION").to_string());
    configure_logging(&config)?;
    config_validator::validate_configuration(&config)?;

    info!("keploybot {}", config.version);

    let args = Args::parse();
    CommandExecutor::parse_args(config, args)
}
