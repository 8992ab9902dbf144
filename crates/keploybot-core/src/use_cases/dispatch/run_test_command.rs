use async_trait::async_trait;
use keploybot_ghapi_interface::types::GhIssueCommentEvent;
use shaku::{Component, Interface};
use tracing::{error, info};

use crate::{CoreContext, Result};

const PREPARING_COMMENT: &str = "🚀 Welcome to Keploy!\n\n\
    Preparing to generate test cases... This may take a while.";
const RUNNING_COMMENT: &str = "🐇 Running Keploy Test Workflow... 🐰 \
    The workflow will add a comment with test results.";
const DISPATCH_FAILED_COMMENT: &str = "🚀 Welcome to Keploy!\n\n\
    ❌ Failed to dispatch the test workflow. Check the application logs for details.";

fn workflow_not_found_comment(workflow_id: &str) -> String {
    format!(
        "🚀 Welcome to Keploy!\n\n\
        ❌ The workflow file '{workflow_id}' does not exist in the repository. \
        Please ensure the workflow file exists before running the tests."
    )
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait RunTestCommandInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, event: GhIssueCommentEvent) -> Result<()>;
}

#[derive(Component)]
#[shaku(interface = RunTestCommandInterface)]
pub(crate) struct RunTestCommand;

#[async_trait]
impl RunTestCommandInterface for RunTestCommand {
    #[tracing::instrument(skip(self, ctx), fields(
        repo_owner = event.repository.owner.login,
        repo_name = event.repository.name,
        pr_number = event.issue.number,
        sender = event.sender.login
    ))]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, event: GhIssueCommentEvent) -> Result<()> {
        // Anti-loop: never react to the automation actor's own comments.
        if event.sender.login == ctx.config.workflow.automation_login {
            return Ok(());
        }

        if !event
            .comment
            .body
            .contains(&ctx.config.workflow.trigger_command)
        {
            return Ok(());
        }

        let repo_owner = &event.repository.owner.login;
        let repo_name = &event.repository.name;
        let pr_number = event.issue.number;

        // One status comment per accepted command, updated at most once.
        let status_comment_id = ctx
            .api_service
            .comments_post(repo_owner, repo_name, pr_number, PREPARING_COMMENT)
            .await?;

        let terminal_body = match self
            .try_dispatch(ctx, repo_owner, repo_name, pr_number)
            .await
        {
            Ok(body) => body,
            Err(e) => {
                error!(
                    error = %e,
                    repository_path = %event.repository.full_name,
                    pr_number = pr_number,
                    message = "Failed to dispatch test workflow",
                );
                DISPATCH_FAILED_COMMENT.into()
            }
        };

        ctx.api_service
            .comments_update(repo_owner, repo_name, status_comment_id, &terminal_body)
            .await?;

        Ok(())
    }
}

impl RunTestCommand {
    async fn try_dispatch(
        &self,
        ctx: &CoreContext<'_>,
        repo_owner: &str,
        repo_name: &str,
        pr_number: u64,
    ) -> Result<String> {
        let workflow_id = &ctx.config.workflow.file_id;

        if ctx
            .api_service
            .workflows_get(repo_owner, repo_name, workflow_id)
            .await?
            .is_none()
        {
            info!(
                workflow_id = %workflow_id,
                message = "Workflow file does not exist",
            );
            return Ok(workflow_not_found_comment(workflow_id));
        }

        let upstream_pr = ctx
            .api_service
            .pulls_get(repo_owner, repo_name, pr_number)
            .await?;

        ctx.api_service
            .workflow_dispatches_create(
                repo_owner,
                repo_name,
                workflow_id,
                &upstream_pr.head.reference,
            )
            .await?;

        info!(
            workflow_id = %workflow_id,
            git_ref = %upstream_pr.head.reference,
            message = "Test workflow dispatched",
        );

        Ok(RUNNING_COMMENT.into())
    }
}
