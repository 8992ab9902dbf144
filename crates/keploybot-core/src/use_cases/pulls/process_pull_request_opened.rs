use async_trait::async_trait;
use keploybot_ghapi_interface::types::{GhPullRequestAction, GhPullRequestEvent};
use shaku::{Component, HasComponent, Interface};

use crate::{use_cases::comments::PostWelcomeCommentInterface, CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ProcessPullRequestOpenedInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, event: GhPullRequestEvent) -> Result<()>;
}

#[derive(Component)]
#[shaku(interface = ProcessPullRequestOpenedInterface)]
pub(crate) struct ProcessPullRequestOpened;

#[async_trait]
impl ProcessPullRequestOpenedInterface for ProcessPullRequestOpened {
    #[tracing::instrument(skip(self, ctx), fields(
        action = ?event.action,
        repo_owner = event.repository.owner.login,
        repo_name = event.repository.name,
        pr_number = event.pull_request.number
    ))]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, event: GhPullRequestEvent) -> Result<()> {
        if event.action != GhPullRequestAction::Opened {
            return Ok(());
        }

        if !ctx.config.server.enable_welcome_comments {
            return Ok(());
        }

        let pr_handle = (
            event.repository.owner.login.as_str(),
            event.repository.name.as_str(),
            event.pull_request.number,
        )
            .into();

        let post_welcome_comment: &dyn PostWelcomeCommentInterface = ctx.core_module.resolve_ref();
        post_welcome_comment.run(ctx, &pr_handle).await
    }
}

#[cfg(test)]
mod tests {
    use keploybot_ghapi_interface::types::{GhPullRequest, GhRepository, GhUser};

    use super::*;
    use crate::{
        context::tests::CoreContextTest, use_cases::comments::MockPostWelcomeCommentInterface,
        CoreModule,
    };

    #[tokio::test]
    async fn run_pull_request_closed() {
        let ctx = CoreContextTest::new();

        ProcessPullRequestOpened
            .run(
                &ctx.as_context(),
                GhPullRequestEvent {
                    action: GhPullRequestAction::Closed,
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn run_pull_request_opened() {
        let mut ctx = CoreContextTest::new();

        let post_welcome_comment = {
            let mut mock = MockPostWelcomeCommentInterface::new();

            mock.expect_run()
                .once()
                .withf(|_, pr_handle| pr_handle == &("me", "test", 1).into())
                .return_once(|_, _| Ok(()));

            mock
        };

        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn PostWelcomeCommentInterface>(Box::new(
                post_welcome_comment,
            ))
            .build();

        ProcessPullRequestOpened
            .run(
                &ctx.as_context(),
                GhPullRequestEvent {
                    action: GhPullRequestAction::Opened,
                    pull_request: GhPullRequest {
                        number: 1,
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
