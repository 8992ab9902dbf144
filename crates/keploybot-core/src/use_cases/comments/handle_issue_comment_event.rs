use async_trait::async_trait;
use keploybot_ghapi_interface::types::{GhIssueCommentAction, GhIssueCommentEvent};
use shaku::{Component, HasComponent, Interface};
use tracing::debug;

use crate::{use_cases::dispatch::RunTestCommandInterface, CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait HandleIssueCommentEventInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, event: GhIssueCommentEvent) -> Result<()>;
}

#[derive(Component)]
#[shaku(interface = HandleIssueCommentEventInterface)]
pub(crate) struct HandleIssueCommentEvent;

#[async_trait]
impl HandleIssueCommentEventInterface for HandleIssueCommentEvent {
    #[tracing::instrument(skip(self, ctx), fields(
        action = ?event.action,
        repo_owner = event.repository.owner.login,
        repo_name = event.repository.name,
        number = event.issue.number
    ))]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, event: GhIssueCommentEvent) -> Result<()> {
        if event.action != GhIssueCommentAction::Created {
            return Ok(());
        }

        // Comments on plain issues are ignored, only pull requests carry test commands.
        if event.issue.pull_request.is_none() {
            debug!(
                number = event.issue.number,
                repository_path = %event.repository.full_name,
                message = "Comment on a plain issue, ignoring",
            );
            return Ok(());
        }

        let run_test_command: &dyn RunTestCommandInterface = ctx.core_module.resolve_ref();
        run_test_command.run(ctx, event).await
    }
}

#[cfg(test)]
mod tests {
    use keploybot_ghapi_interface::types::{GhIssue, GhIssuePullRequestLink, GhRepository, GhUser};

    use super::*;
    use crate::{
        context::tests::CoreContextTest, use_cases::dispatch::MockRunTestCommandInterface,
        CoreModule,
    };

    #[tokio::test]
    async fn run_edited_comment() {
        let ctx = CoreContextTest::new();

        HandleIssueCommentEvent
            .run(
                &ctx.as_context(),
                GhIssueCommentEvent {
                    action: GhIssueCommentAction::Edited,
                    issue: GhIssue {
                        number: 1,
                        pull_request: Some(GhIssuePullRequestLink::default()),
                        ..Default::default()
                    },
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn run_plain_issue_comment() {
        let ctx = CoreContextTest::new();

        HandleIssueCommentEvent
            .run(
                &ctx.as_context(),
                GhIssueCommentEvent {
                    action: GhIssueCommentAction::Created,
                    issue: GhIssue {
                        number: 1,
                        pull_request: None,
                        ..Default::default()
                    },
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn run_pull_request_comment() {
        let mut ctx = CoreContextTest::new();

        let run_test_command = {
            let mut mock = MockRunTestCommandInterface::new();

            mock.expect_run()
                .once()
                .withf(|_, event| event.issue.number == 1)
                .return_once(|_, _| Ok(()));

            mock
        };

        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn RunTestCommandInterface>(Box::new(run_test_command))
            .build();

        HandleIssueCommentEvent
            .run(
                &ctx.as_context(),
                GhIssueCommentEvent {
                    action: GhIssueCommentAction::Created,
                    issue: GhIssue {
                        number: 1,
                        pull_request: Some(GhIssuePullRequestLink::default()),
                        ..Default::default()
                    },
                    repository: GhRepository {
                        owner: GhUser { login: "me".into() },
                        name: "test".into(),
                        ..Default::default()
                    },
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }
}
