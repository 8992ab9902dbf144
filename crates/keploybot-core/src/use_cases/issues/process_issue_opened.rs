use async_trait::async_trait;
use keploybot_ghapi_interface::types::{GhIssueAction, GhIssueEvent};
use shaku::{Component, Interface};

use crate::{CoreContext, Result};

const ISSUE_WELCOME_COMMENT: &str = "Thanks for opening this issue!";
const ISSUE_LABEL: &str = "keploy-bot";

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ProcessIssueOpenedInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, event: GhIssueEvent) -> Result<()>;
}

#[derive(Component)]
#[shaku(interface = ProcessIssueOpenedInterface)]
pub(crate) struct ProcessIssueOpened;

#[async_trait]
impl ProcessIssueOpenedInterface for ProcessIssueOpened {
    #[tracing::instrument(skip(self, ctx), fields(
        action = ?event.action,
        repo_owner = event.repository.owner.login,
        repo_name = event.repository.name,
        number = event.issue.number
    ))]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, event: GhIssueEvent) -> Result<()> {
        if event.action != GhIssueAction::Opened {
            return Ok(());
        }

        if !ctx.config.server.enable_welcome_comments {
            return Ok(());
        }

        let repo_owner = &event.repository.owner.login;
        let repo_name = &event.repository.name;
        let issue_number = event.issue.number;

        ctx.api_service
            .issue_labels_add(
                repo_owner,
                repo_name,
                issue_number,
                &[ISSUE_LABEL.to_string()],
            )
            .await?;

        ctx.api_service
            .comments_post(repo_owner, repo_name, issue_number, ISSUE_WELCOME_COMMENT)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use keploybot_ghapi_interface::{
        types::{GhIssue, GhRepository, GhUser},
        MockApiService,
    };

    use super::*;
    use crate::context::tests::CoreContextTest;

    #[tokio::test]
    async fn run_issue_closed() {
        let ctx = CoreContextTest::new();

        ProcessIssueOpened
            .run(
                &ctx.as_context(),
                GhIssueEvent {
                    action: GhIssueAction::Closed,
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn run_issue_opened() {
        let mut ctx = CoreContextTest::new();

        ctx.api_service = {
            let mut svc = MockApiService::new();

            svc.expect_issue_labels_add()
                .once()
                .withf(|owner, name, number, labels| {
                    owner == "me" && name == "test" && number == &1 && labels == ["keploy-bot"]
                })
                .return_once(|_, _, _, _| Ok(()));

            svc.expect_comments_post()
                .once()
                .withf(|owner, name, number, body| {
                    owner == "me" && name == "test" && number == &1 && body == ISSUE_WELCOME_COMMENT
                })
                .return_once(|_, _, _, _| Ok(1));

            svc
        };

        ProcessIssueOpened
            .run(
                &ctx.as_context(),
                GhIssueEvent {
                    action: GhIssueAction::Opened,
                    issue: GhIssue {
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
