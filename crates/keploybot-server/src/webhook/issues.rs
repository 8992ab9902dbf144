//! Issue webhook handlers.

use std::sync::Arc;

use actix_web::HttpResponse;
use keploybot_core::use_cases::{
    comments::HandleIssueCommentEventInterface, issues::ProcessIssueOpenedInterface,
};
use keploybot_ghapi_interface::types::{GhIssueCommentEvent, GhIssueEvent};
use shaku::HasComponent;
use tracing::error;

use super::parse_event_type;
use crate::{event_type::EventType, server::AppContext, Result};

pub(crate) fn parse_issue_comment_event(body: &str) -> Result<GhIssueCommentEvent> {
    parse_event_type(EventType::IssueComment, body)
}

pub(crate) fn parse_issue_event(body: &str) -> Result<GhIssueEvent> {
    parse_event_type(EventType::Issues, body)
}

pub(crate) async fn issue_comment_event(
    ctx: Arc<AppContext>,
    event: GhIssueCommentEvent,
) -> Result<HttpResponse> {
    tokio::spawn(async move {
        let ctx = ctx.as_core_context();
        let handle_issue_comment_event: &dyn HandleIssueCommentEventInterface =
            ctx.core_module.resolve_ref();
        if let Err(e) = handle_issue_comment_event.run(&ctx, event).await {
            error!(error = %e, message = "Error while handling issue comment event");
        }
    });

    Ok(HttpResponse::Accepted().body("Issue comment."))
}

pub(crate) async fn issue_event(ctx: Arc<AppContext>, event: GhIssueEvent) -> Result<HttpResponse> {
    tokio::spawn(async move {
        let ctx = ctx.as_core_context();
        let process_issue_opened: &dyn ProcessIssueOpenedInterface = ctx.core_module.resolve_ref();
        if let Err(e) = process_issue_opened.run(&ctx, event).await {
            error!(error = %e, message = "Error while handling issue event");
        }
    });

    Ok(HttpResponse::Accepted().body("Issue."))
}
