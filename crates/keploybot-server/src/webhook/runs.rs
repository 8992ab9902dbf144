//! Workflow run webhook handlers.

use std::sync::Arc;

use actix_web::HttpResponse;
use keploybot_core::use_cases::runs::HandleWorkflowRunEventInterface;
use keploybot_ghapi_interface::types::GhWorkflowRunEvent;
use shaku::HasComponent;
use tracing::error;

use super::parse_event_type;
use crate::{event_type::EventType, server::AppContext, Result};

pub(crate) fn parse_workflow_run_event(body: &str) -> Result<GhWorkflowRunEvent> {
    parse_event_type(EventType::WorkflowRun, body)
}

pub(crate) async fn workflow_run_event(
    ctx: Arc<AppContext>,
    event: GhWorkflowRunEvent,
) -> Result<HttpResponse> {
    tokio::spawn(async move {
        let ctx = ctx.as_core_context();
        let handle_workflow_run_event: &dyn HandleWorkflowRunEventInterface =
            ctx.core_module.resolve_ref();
        if let Err(e) = handle_workflow_run_event.run(&ctx, event).await {
            error!(error = %e, message = "Error while handling workflow run event");
        }
    });

    Ok(HttpResponse::Accepted().body("Workflow run."))
}
