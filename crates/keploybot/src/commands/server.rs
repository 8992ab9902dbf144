use async_trait::async_trait;
use clap::Parser;
use keploybot_server::server::{run_bot_server, AppContext};
use tracing::error;

use super::{Command, CommandContext};
use crate::Result;

/// Start server
#[derive(Parser)]
pub(crate) struct ServerCommand;

#[async_trait]
impl Command for ServerCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        tokio::task::spawn_local(async move {
            let context =
                AppContext::new_with_adapters(ctx.config, ctx.core_module, ctx.api_service);

            if let Err(e) = run_bot_server(context).await {
                error!(error = %e, message = "Bot server stopped on error");
            }
        })
        .await?;

        Ok(())
    }
}
