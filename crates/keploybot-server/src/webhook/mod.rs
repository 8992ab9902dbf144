//! Webhook handlers.

mod issues;
mod ping;
mod pulls;
mod runs;

use std::sync::Arc;

use actix_web::{web, HttpRequest, HttpResponse, Result as ActixResult};
use serde::Deserialize;

use self::{
    issues::{parse_issue_comment_event, parse_issue_event},
    ping::parse_ping_event,
    pulls::parse_pull_request_event,
    runs::parse_workflow_run_event,
};
use crate::{
    constants::GITHUB_EVENT_HEADER, event_type::EventType, server::AppContext,
    utils::convert_payload_to_string, Result, ServerError,
};

#[tracing::instrument(skip_all, fields(event_type = %event_type))]
async fn parse_event(
    ctx: Arc<AppContext>,
    event_type: EventType,
    body: &str,
) -> Result<HttpResponse> {
    match event_type {
        EventType::IssueComment => {
            issues::issue_comment_event(ctx, parse_issue_comment_event(body)?).await
        }
        EventType::Issues => issues::issue_event(ctx, parse_issue_event(body)?).await,
        EventType::Ping => Ok(ping::ping_event(parse_ping_event(body)?)),
        EventType::PullRequest => {
            pulls::pull_request_event(ctx, parse_pull_request_event(body)?).await
        }
        EventType::WorkflowRun => {
            runs::workflow_run_event(ctx, parse_workflow_run_event(body)?).await
        }
    }
}

fn parse_event_type<'de, T>(event_type: EventType, body: &'de str) -> Result<T>
where
    T: Deserialize<'de>,
{
    serde_json::from_str(body).map_err(|e| ServerError::EventParseError {
        event_type,
        source: e,
    })
}

fn extract_event_from_request(req: &HttpRequest) -> Option<EventType> {
    req.headers()
        .get(GITHUB_EVENT_HEADER)
        .and_then(|x| x.to_str().ok())
        .and_then(|x| EventType::try_from(x).ok())
}

#[tracing::instrument(skip_all)]
pub(crate) async fn event_handler(
    req: HttpRequest,
    mut payload: web::Payload,
    ctx: web::Data<Arc<AppContext>>,
) -> ActixResult<HttpResponse> {
    // Route event depending on header
    if let Some(event_type) = extract_event_from_request(&req) {
        if let Ok(body) = convert_payload_to_string(&mut payload).await {
            parse_event(ctx.get_ref().clone(), event_type, &body)
                .await
                .map_err(Into::into)
        } else {
            let event_type: &str = event_type.into();
            Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "error": format!("Bad payload for event '{}'.", event_type)
            })))
        }
    } else {
        Ok(HttpResponse::BadRequest().json(serde_json::json!({"error": "Unhandled event."})))
    }
}

/// Configure webhook handlers.
pub fn configure_webhook_handlers(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(event_handler)));
}

#[cfg(test)]
mod tests {
    use keploybot_ghapi_interface::types::{
        GhIssueCommentEvent, GhPullRequestEvent, GhWorkflowRunAction, GhWorkflowRunEvent,
    };
    use pretty_assertions::assert_eq;

    use super::parse_event_type;
    use crate::event_type::EventType;

    #[test]
    fn parse_valid_issue_comment_event() {
        let event: GhIssueCommentEvent = parse_event_type(
            EventType::IssueComment,
            r#"{
                "action": "created",
                "issue": {
                    "number": 1,
                    "title": "Test",
                    "user": { "login": "me" },
                    "labels": [],
                    "state": "open",
                    "created_at": "2024-01-01T00:00:00Z",
                    "updated_at": "2024-01-01T00:00:00Z",
                    "body": null,
                    "pull_request": { "url": "https://api.github.com/repos/me/test/pulls/1" }
                },
                "comment": {
                    "id": 10,
                    "user": { "login": "me" },
                    "created_at": "2024-01-01T00:00:00Z",
                    "updated_at": "2024-01-01T00:00:00Z",
                    "body": "/keploy-test"
                },
                "repository": {
                    "name": "test",
                    "full_name": "me/test",
                    "owner": { "login": "me" }
                },
                "sender": { "login": "me" }
            }"#,
        )
        .unwrap();

        assert_eq!(event.comment.body, "/keploy-test");
        assert_eq!(event.issue.number, 1);
    }

    #[test]
    fn parse_invalid_pull_request_event() {
        assert!(
            parse_event_type::<GhPullRequestEvent>(EventType::PullRequest, r#"{"action": 42}"#)
                .is_err()
        );
    }

    #[test]
    fn parse_valid_workflow_run_event() {
        let event: GhWorkflowRunEvent = parse_event_type(
            EventType::WorkflowRun,
            r#"{
                "action": "completed",
                "workflow_run": {
                    "id": 42,
                    "name": "Keploy Test Workflow",
                    "head_branch": "feature-x",
                    "head_sha": "123456",
                    "conclusion": "success"
                },
                "repository": {
                    "name": "test",
                    "full_name": "me/test",
                    "owner": { "login": "me" }
                },
                "sender": { "login": "me" }
            }"#,
        )
        .unwrap();

        assert_eq!(event.action, GhWorkflowRunAction::Completed);
        assert_eq!(event.workflow_run.id, 42);
    }
}
