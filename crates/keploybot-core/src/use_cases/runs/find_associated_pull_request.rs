use async_trait::async_trait;
use keploybot_ghapi_interface::types::GhPullRequest;
use keploybot_models::RepositoryPath;
use shaku::{Component, Interface};

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait FindAssociatedPullRequestInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_path: &RepositoryPath,
        head_sha: &str,
    ) -> Result<Option<GhPullRequest>>;
}

#[derive(Component)]
#[shaku(interface = FindAssociatedPullRequestInterface)]
pub(crate) struct FindAssociatedPullRequest;

#[async_trait]
impl FindAssociatedPullRequestInterface for FindAssociatedPullRequest {
    #[tracing::instrument(skip(self, ctx), fields(repository_path = %repository_path, head_sha))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_path: &RepositoryPath,
        head_sha: &str,
    ) -> Result<Option<GhPullRequest>> {
        let pull_requests = ctx
            .api_service
            .pulls_list_open(repository_path.owner(), repository_path.name())
            .await?;

        Ok(pull_requests
            .into_iter()
            .find(|pr| pr.head.sha == head_sha))
    }
}

#[cfg(test)]
mod tests {
    use keploybot_ghapi_interface::{types::GhBranch, MockApiService};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::context::tests::CoreContextTest;

    fn pull_request(number: u64, sha: &str) -> GhPullRequest {
        GhPullRequest {
            number,
            head: GhBranch {
                sha: sha.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn run_matching_head_sha() {
        let mut ctx = CoreContextTest::new();

        ctx.api_service = {
            let mut svc = MockApiService::new();

            svc.expect_pulls_list_open()
                .once()
                .withf(|owner, name| owner == "me" && name == "test")
                .return_once(|_, _| {
                    Ok(vec![pull_request(1, "abcdef"), pull_request(2, "123456")])
                });

            svc
        };

        let result = FindAssociatedPullRequest
            .run(&ctx.as_context(), &("me", "test").into(), "123456")
            .await
            .unwrap();

        assert_eq!(result.map(|pr| pr.number), Some(2));
    }

    #[tokio::test]
    async fn run_no_matching_head_sha() {
        let mut ctx = CoreContextTest::new();

        ctx.api_service = {
            let mut svc = MockApiService::new();

            svc.expect_pulls_list_open()
                .once()
                .return_once(|_, _| Ok(vec![pull_request(1, "abcdef")]));

            svc
        };

        let result = FindAssociatedPullRequest
            .run(&ctx.as_context(), &("me", "test").into(), "123456")
            .await
            .unwrap();

        assert_eq!(result, None);
    }
}
