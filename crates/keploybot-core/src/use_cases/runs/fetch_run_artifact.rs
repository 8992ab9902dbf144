use async_trait::async_trait;
use keploybot_models::RepositoryPath;
use shaku::{Component, Interface};

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait FetchRunArtifactInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_path: &RepositoryPath,
        run_id: u64,
        artifact_name: &str,
    ) -> Result<Option<Vec<u8>>>;
}

#[derive(Component)]
#[shaku(interface = FetchRunArtifactInterface)]
pub(crate) struct FetchRunArtifact;

#[async_trait]
impl FetchRunArtifactInterface for FetchRunArtifact {
    #[tracing::instrument(skip(self, ctx), fields(
        repository_path = %repository_path,
        run_id,
        artifact_name
    ))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_path: &RepositoryPath,
        run_id: u64,
        artifact_name: &str,
    ) -> Result<Option<Vec<u8>>> {
        let artifacts = ctx
            .api_service
            .workflow_run_artifacts_list(repository_path.owner(), repository_path.name(), run_id)
            .await?;

        let artifact = artifacts
            .into_iter()
            .find(|artifact| artifact.name == artifact_name && !artifact.expired);

        match artifact {
            Some(artifact) => {
                let data = ctx
                    .api_service
                    .artifacts_download(repository_path.owner(), repository_path.name(), artifact.id)
                    .await?;

                Ok(Some(data))
            }
            None => {
                tracing::info!(
                    artifact_name,
                    run_id,
                    message = "No matching artifact found on workflow run"
                );

                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use keploybot_ghapi_interface::{types::GhArtifact, MockApiService};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::context::tests::CoreContextTest;

    #[tokio::test]
    async fn run_artifact_found() {
        let mut ctx = CoreContextTest::new();

        ctx.api_service = {
            let mut svc = MockApiService::new();

            svc.expect_workflow_run_artifacts_list()
                .once()
                .withf(|owner, name, run_id| owner == "me" && name == "test" && *run_id == 42)
                .return_once(|_, _, _| {
                    Ok(vec![
                        GhArtifact {
                            id: 1,
                            name: "logs".into(),
                            expired: false,
                        },
                        GhArtifact {
                            id: 2,
                            name: "keploy-reports".into(),
                            expired: false,
                        },
                    ])
                });

            svc.expect_artifacts_download()
                .once()
                .withf(|owner, name, artifact_id| {
                    owner == "me" && name == "test" && *artifact_id == 2
                })
                .return_once(|_, _, _| Ok(vec![1, 2, 3]));

            svc
        };

        let result = FetchRunArtifact
            .run(&ctx.as_context(), &("me", "test").into(), 42, "keploy-reports")
            .await
            .unwrap();

        assert_eq!(result, Some(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn run_artifact_expired() {
        let mut ctx = CoreContextTest::new();

        ctx.api_service = {
            let mut svc = MockApiService::new();

            svc.expect_workflow_run_artifacts_list()
                .once()
                .return_once(|_, _, _| {
                    Ok(vec![GhArtifact {
                        id: 1,
                        name: "keploy-reports".into(),
                        expired: true,
                    }])
                });

            svc
        };

        let result = FetchRunArtifact
            .run(&ctx.as_context(), &("me", "test").into(), 42, "keploy-reports")
            .await
            .unwrap();

        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn run_artifact_missing() {
        let mut ctx = CoreContextTest::new();

        ctx.api_service = {
            let mut svc = MockApiService::new();

            svc.expect_workflow_run_artifacts_list()
                .once()
                .return_once(|_, _, _| Ok(vec![]));

            svc
        };

        let result = FetchRunArtifact
            .run(&ctx.as_context(), &("me", "test").into(), 42, "keploy-reports")
            .await
            .unwrap();

        assert_eq!(result, None);
    }
}
