use async_trait::async_trait;
use keploybot_models::PullRequestHandle;
use shaku::{Component, Interface};

use crate::{CoreContext, Result};

const PR_WELCOME_COMMENT: &str = "Thanks for opening this pull request!";

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait PostWelcomeCommentInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, pr_handle: &PullRequestHandle) -> Result<()>;
}

#[derive(Component)]
#[shaku(interface = PostWelcomeCommentInterface)]
pub(crate) struct PostWelcomeComment;

#[async_trait]
impl PostWelcomeCommentInterface for PostWelcomeComment {
    #[tracing::instrument(skip(self, ctx), fields(pr_handle))]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, pr_handle: &PullRequestHandle) -> Result<()> {
        ctx.api_service
            .comments_post(
                pr_handle.owner(),
                pr_handle.name(),
                pr_handle.number(),
                PR_WELCOME_COMMENT,
            )
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use keploybot_ghapi_interface::MockApiService;

    use super::*;
    use crate::context::tests::CoreContextTest;

    #[tokio::test]
    async fn run() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service = {
            let mut svc = MockApiService::new();
            svc.expect_comments_post()
                .once()
                .withf(|owner, name, number, body| {
                    owner == "me"
                        && name == "test"
                        && number == &1
                        && body == PR_WELCOME_COMMENT
                })
                .return_once(|_, _, _, _| Ok(1));

            svc
        };

        PostWelcomeComment
            .run(&ctx.as_context(), &("me", "test", 1).into())
            .await
            .unwrap();
    }
}
