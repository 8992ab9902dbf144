use async_trait::async_trait;
use keploybot_ghapi_interface::types::{
    GhWorkflowRunAction, GhWorkflowRunConclusion, GhWorkflowRunEvent,
};
use keploybot_models::RepositoryPath;
use shaku::{Component, HasComponent, Interface};

use crate::{
    use_cases::reports::{ReportArchiveDecoder, ReportSummaryTextGenerator},
    CoreContext, Result,
};

use super::{FetchRunArtifactInterface, FindAssociatedPullRequestInterface};

const NO_PULL_REQUEST_COMMENT: &str = "The Keploy test workflow completed successfully, but no associated open pull request was found for this commit.";

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait HandleWorkflowRunEventInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, event: GhWorkflowRunEvent) -> Result<()>;
}

#[derive(Component)]
#[shaku(interface = HandleWorkflowRunEventInterface)]
pub(crate) struct HandleWorkflowRunEvent;

#[async_trait]
impl HandleWorkflowRunEventInterface for HandleWorkflowRunEvent {
    #[tracing::instrument(skip(self, ctx), fields(
        action = ?event.action,
        repo_owner = event.repository.owner.login,
        repo_name = event.repository.name,
        run_id = event.workflow_run.id,
        run_name = event.workflow_run.name,
        head_sha = event.workflow_run.head_sha
    ))]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, event: GhWorkflowRunEvent) -> Result<()> {
        if event.action != GhWorkflowRunAction::Completed {
            return Ok(());
        }

        if event.workflow_run.name != ctx.config.workflow.run_name {
            tracing::debug!(
                run_name = event.workflow_run.name,
                message = "Ignoring unrelated workflow run"
            );
            return Ok(());
        }

        if event.workflow_run.conclusion != Some(GhWorkflowRunConclusion::Success) {
            tracing::info!(
                conclusion = ?event.workflow_run.conclusion,
                message = "Workflow run did not succeed, skipping report"
            );
            return Ok(());
        }

        let repository_path = RepositoryPath::from((
            event.repository.owner.login.as_str(),
            event.repository.name.as_str(),
        ));
        let head_sha = &event.workflow_run.head_sha;

        let find_pull_request: &dyn FindAssociatedPullRequestInterface =
            ctx.core_module.resolve_ref();
        let pull_request = find_pull_request.run(ctx, &repository_path, head_sha).await?;

        let pull_request = match pull_request {
            Some(pr) => pr,
            None => {
                tracing::info!(
                    head_sha,
                    message = "No associated pull request found for workflow run"
                );

                ctx.api_service
                    .commit_comments_post(
                        repository_path.owner(),
                        repository_path.name(),
                        head_sha,
                        NO_PULL_REQUEST_COMMENT,
                    )
                    .await?;

                return Ok(());
            }
        };

        let fetch_artifact: &dyn FetchRunArtifactInterface = ctx.core_module.resolve_ref();
        let archive = fetch_artifact
            .run(
                ctx,
                &repository_path,
                event.workflow_run.id,
                &ctx.config.workflow.artifact_name,
            )
            .await?;

        let archive = match archive {
            Some(archive) => archive,
            None => return Ok(()),
        };

        let decoded = ReportArchiveDecoder::decode(&archive)?;
        if decoded.outcomes.is_empty() {
            if decoded.malformed_entries > 0 {
                tracing::warn!(
                    malformed_entries = decoded.malformed_entries,
                    message = "Report archive only contained unreadable entries"
                );
            }
            return Ok(());
        }

        let summary =
            ReportSummaryTextGenerator::generate(&decoded.outcomes, decoded.malformed_entries);

        ctx.api_service
            .comments_post(
                repository_path.owner(),
                repository_path.name(),
                pull_request.number,
                &summary,
            )
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use keploybot_ghapi_interface::{
        types::{GhBranch, GhPullRequest, GhRepository, GhUser, GhWorkflowRun},
        MockApiService,
    };
    use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

    use super::*;
    use crate::{
        context::tests::CoreContextTest,
        use_cases::runs::{
            MockFetchRunArtifactInterface, MockFindAssociatedPullRequestInterface,
        },
        CoreModule,
    };

    fn completed_event() -> GhWorkflowRunEvent {
        GhWorkflowRunEvent {
            action: GhWorkflowRunAction::Completed,
            workflow_run: GhWorkflowRun {
                id: 42,
                name: "Keploy Test Workflow".into(),
                head_sha: "123456".into(),
                conclusion: Some(GhWorkflowRunConclusion::Success),
                ..Default::default()
            },
            repository: GhRepository {
                owner: GhUser { login: "me".into() },
                name: "test".into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn report_archive() -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

        writer
            .start_file("test-set-1-report.yaml", options)
            .unwrap();
        writer
            .write_all(b"name: test-set-1\nstatus: PASSED\nsuccess: 4\nfailure: 0\ntotal: 4\n")
            .unwrap();

        writer
            .start_file("test-set-2-report.yaml", options)
            .unwrap();
        writer
            .write_all(b"name: test-set-2\nstatus: FAILED\nsuccess: 2\nfailure: 1\ntotal: 3\n")
            .unwrap();

        writer.finish().unwrap().into_inner()
    }

    #[tokio::test]
    async fn run_unrelated_workflow_name() {
        let ctx = CoreContextTest::new();

        let mut event = completed_event();
        event.workflow_run.name = "Lint".into();

        HandleWorkflowRunEvent
            .run(&ctx.as_context(), event)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn run_failed_conclusion() {
        let ctx = CoreContextTest::new();

        let mut event = completed_event();
        event.workflow_run.conclusion = Some(GhWorkflowRunConclusion::Failure);

        HandleWorkflowRunEvent
            .run(&ctx.as_context(), event)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn run_posts_summary_on_pull_request() {
        let mut ctx = CoreContextTest::new();

        let find_pull_request = {
            let mut mock = MockFindAssociatedPullRequestInterface::new();

            mock.expect_run()
                .once()
                .withf(|_, repository_path, head_sha| {
                    repository_path == &("me", "test").into() && head_sha == "123456"
                })
                .return_once(|_, _, _| {
                    Ok(Some(GhPullRequest {
                        number: 7,
                        head: GhBranch {
                            sha: "123456".into(),
                            ..Default::default()
                        },
                        ..Default::default()
                    }))
                });

            mock
        };

        let fetch_artifact = {
            let mut mock = MockFetchRunArtifactInterface::new();

            mock.expect_run()
                .once()
                .withf(|_, repository_path, run_id, artifact_name| {
                    repository_path == &("me", "test").into()
                        && *run_id == 42
                        && artifact_name == "keploy-reports"
                })
                .return_once(|_, _, _, _| Ok(Some(report_archive())));

            mock
        };

        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn FindAssociatedPullRequestInterface>(Box::new(
                find_pull_request,
            ))
            .with_component_override::<dyn FetchRunArtifactInterface>(Box::new(fetch_artifact))
            .build();

        ctx.api_service = {
            let mut svc = MockApiService::new();

            svc.expect_comments_post()
                .once()
                .withf(|owner, name, number, body| {
                    owner == "me"
                        && name == "test"
                        && *number == 7
                        && body.contains("| `test-set-1` | ✅ PASSED | **4** | 0 | 4 |")
                        && body.contains("| `test-set-2` | ❌ FAILED | **2** | **1** | 3 |")
                })
                .return_once(|_, _, _, _| Ok(1));

            svc
        };

        HandleWorkflowRunEvent
            .run(&ctx.as_context(), completed_event())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn run_posts_commit_comment_without_pull_request() {
        let mut ctx = CoreContextTest::new();

        let find_pull_request = {
            let mut mock = MockFindAssociatedPullRequestInterface::new();

            mock.expect_run().once().return_once(|_, _, _| Ok(None));

            mock
        };

        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn FindAssociatedPullRequestInterface>(Box::new(
                find_pull_request,
            ))
            .build();

        ctx.api_service = {
            let mut svc = MockApiService::new();

            svc.expect_commit_comments_post()
                .once()
                .withf(|owner, name, sha, body| {
                    owner == "me"
                        && name == "test"
                        && sha == "123456"
                        && body == NO_PULL_REQUEST_COMMENT
                })
                .return_once(|_, _, _, _| Ok(1));

            svc
        };

        HandleWorkflowRunEvent
            .run(&ctx.as_context(), completed_event())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn run_empty_archive_posts_nothing() {
        let mut ctx = CoreContextTest::new();

        let find_pull_request = {
            let mut mock = MockFindAssociatedPullRequestInterface::new();

            mock.expect_run().once().return_once(|_, _, _| {
                Ok(Some(GhPullRequest {
                    number: 7,
                    ..Default::default()
                }))
            });

            mock
        };

        let fetch_artifact = {
            let mut mock = MockFetchRunArtifactInterface::new();

            mock.expect_run().once().return_once(|_, _, _, _| {
                let writer = ZipWriter::new(Cursor::new(Vec::new()));
                Ok(Some(writer.finish().unwrap().into_inner()))
            });

            mock
        };

        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn FindAssociatedPullRequestInterface>(Box::new(
                find_pull_request,
            ))
            .with_component_override::<dyn FetchRunArtifactInterface>(Box::new(fetch_artifact))
            .build();

        HandleWorkflowRunEvent
            .run(&ctx.as_context(), completed_event())
            .await
            .unwrap();
    }
}
