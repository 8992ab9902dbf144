//! Pull request webhook handlers.

use std::sync::Arc;

use actix_web::HttpResponse;
use keploybot_core::use_cases::pulls::ProcessPullRequestOpenedInterface;
use keploybot_ghapi_interface::types::GhPullRequestEvent;
use shaku::HasComponent;
use tracing::error;

use super::parse_event_type;
use crate::{event_type::EventType, server::AppContext, Result};

pub(crate) fn parse_pull_request_event(body: &str) -> Result<GhPullRequestEvent> {
    parse_event_type(EventType::PullRequest, body)
}

pub(crate) async fn pull_request_event(
    ctx: Arc<AppContext>,
    event: GhPullRequestEvent,
) -> Result<HttpResponse> {
    tokio::spawn(async move {
        let ctx = ctx.as_core_context();
        let process_pull_request_opened: &dyn ProcessPullRequestOpenedInterface =
            ctx.core_module.resolve_ref();
        if let Err(e) = process_pull_request_opened.run(&ctx, event).await {
            error!(error = %e, message = "Error while handling pull request event");
        }
    });

    Ok(HttpResponse::Accepted().body("Pull request."))
}
