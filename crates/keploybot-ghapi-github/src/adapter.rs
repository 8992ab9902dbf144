//! GitHub adapter.

use async_trait::async_trait;
use keploybot_config::Config;
use keploybot_ghapi_interface::{
    types::{GhArtifact, GhPullRequest, GhWorkflow},
    ApiError, ApiService, Result,
};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::{
    auth::{build_github_url, get_authenticated_client_builder},
    GitHubError,
};

fn http_err(e: reqwest::Error) -> ApiError {
    GitHubError::from(e).into()
}

/// GitHub API adapter implementation.
#[derive(Clone)]
pub struct GithubApiService {
    config: Config,
}

impl GithubApiService {
    /// Creates new GitHub API adapter.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn get_client(&self) -> Result<Client> {
        get_authenticated_client_builder(&self.config)
            .map_err(ApiError::from)?
            .build()
            .map_err(http_err)
    }

    fn build_url(&self, path: String) -> String {
        build_github_url(&self.config, path)
    }
}

#[async_trait]
impl ApiService for GithubApiService {
    #[tracing::instrument(skip(self), ret)]
    async fn workflows_get(
        &self,
        owner: &str,
        name: &str,
        workflow_id: &str,
    ) -> Result<Option<GhWorkflow>> {
        let response = self
            .get_client()?
            .get(self.build_url(format!(
                "/repos/{owner}/{name}/actions/workflows/{workflow_id}"
            )))
            .send()
            .await
            .map_err(http_err)?;

        // A missing workflow definition is an expected condition, not an API failure.
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        Ok(Some(
            response
                .error_for_status()
                .map_err(http_err)?
                .json::<GhWorkflow>()
                .await
                .map_err(http_err)?,
        ))
    }

    #[tracing::instrument(skip(self))]
    async fn workflow_dispatches_create(
        &self,
        owner: &str,
        name: &str,
        workflow_id: &str,
        git_ref: &str,
    ) -> Result<()> {
        #[derive(Serialize)]
        struct Request<'a> {
            #[serde(rename = "ref")]
            git_ref: &'a str,
        }

        self.get_client()?
            .post(self.build_url(format!(
                "/repos/{owner}/{name}/actions/workflows/{workflow_id}/dispatches"
            )))
            .json(&Request { git_ref })
            .send()
            .await
            .map_err(http_err)?
            .error_for_status()
            .map_err(|_| {
                ApiError::from(GitHubError::WorkflowDispatchError {
                    workflow_id: workflow_id.into(),
                    repository_path: format!("{owner}/{name}"),
                })
            })?;

        Ok(())
    }

    #[tracing::instrument(skip(self), ret)]
    async fn workflow_run_artifacts_list(
        &self,
        owner: &str,
        name: &str,
        run_id: u64,
    ) -> Result<Vec<GhArtifact>> {
        #[derive(Deserialize)]
        struct Response {
            artifacts: Vec<GhArtifact>,
        }

        let response = self
            .get_client()?
            .get(self.build_url(format!(
                "/repos/{owner}/{name}/actions/runs/{run_id}/artifacts"
            )))
            .send()
            .await
            .map_err(http_err)?
            .error_for_status()
            .map_err(http_err)?
            .json::<Response>()
            .await
            .map_err(http_err)?;

        Ok(response.artifacts)
    }

    #[tracing::instrument(skip(self))]
    async fn artifacts_download(
        &self,
        owner: &str,
        name: &str,
        artifact_id: u64,
    ) -> Result<Vec<u8>> {
        Ok(self
            .get_client()?
            .get(self.build_url(format!(
                "/repos/{owner}/{name}/actions/artifacts/{artifact_id}/zip"
            )))
            .send()
            .await
            .map_err(http_err)?
            .error_for_status()
            .map_err(http_err)?
            .bytes()
            .await
            .map_err(http_err)?
            .to_vec())
    }

    #[tracing::instrument(skip(self), ret)]
    async fn pulls_get(&self, owner: &str, name: &str, issue_number: u64) -> Result<GhPullRequest> {
        self.get_client()?
            .get(self.build_url(format!("/repos/{owner}/{name}/pulls/{issue_number}")))
            .send()
            .await
            .map_err(http_err)?
            .error_for_status()
            .map_err(http_err)?
            .json()
            .await
            .map_err(http_err)
    }

    #[tracing::instrument(skip(self), ret)]
    async fn pulls_list_open(&self, owner: &str, name: &str) -> Result<Vec<GhPullRequest>> {
        self.get_client()?
            .get(self.build_url(format!("/repos/{owner}/{name}/pulls")))
            .query(&[("state", "open")])
            .send()
            .await
            .map_err(http_err)?
            .error_for_status()
            .map_err(http_err)?
            .json()
            .await
            .map_err(http_err)
    }

    #[tracing::instrument(skip(self), ret)]
    async fn comments_post(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        body: &str,
    ) -> Result<u64> {
        #[derive(Serialize)]
        struct Request<'a> {
            body: &'a str,
        }

        #[derive(Deserialize)]
        struct Response {
            id: u64,
        }

        Ok(self
            .get_client()?
            .post(self.build_url(format!(
                "/repos/{owner}/{name}/issues/{issue_number}/comments"
            )))
            .json(&Request { body })
            .send()
            .await
            .map_err(http_err)?
            .error_for_status()
            .map_err(http_err)?
            .json::<Response>()
            .await
            .map_err(http_err)?
            .id)
    }

    #[tracing::instrument(skip(self), ret)]
    async fn comments_update(
        &self,
        owner: &str,
        name: &str,
        comment_id: u64,
        body: &str,
    ) -> Result<u64> {
        #[derive(Serialize)]
        struct Request<'a> {
            body: &'a str,
        }

        #[derive(Deserialize)]
        struct Response {
            id: u64,
        }

        Ok(self
            .get_client()?
            .patch(self.build_url(format!(
                "/repos/{owner}/{name}/issues/comments/{comment_id}"
            )))
            .json(&Request { body })
            .send()
            .await
            .map_err(http_err)?
            .error_for_status()
            .map_err(http_err)?
            .json::<Response>()
            .await
            .map_err(http_err)?
            .id)
    }

    #[tracing::instrument(skip(self), ret)]
    async fn commit_comments_post(
        &self,
        owner: &str,
        name: &str,
        commit_sha: &str,
        body: &str,
    ) -> Result<u64> {
        #[derive(Serialize)]
        struct Request<'a> {
            body: &'a str,
        }

        #[derive(Deserialize)]
        struct Response {
            id: u64,
        }

        Ok(self
            .get_client()?
            .post(self.build_url(format!(
                "/repos/{owner}/{name}/commits/{commit_sha}/comments"
            )))
            .json(&Request { body })
            .send()
            .await
            .map_err(http_err)?
            .error_for_status()
            .map_err(http_err)?
            .json::<Response>()
            .await
            .map_err(http_err)?
            .id)
    }

    #[tracing::instrument(skip(self))]
    async fn issue_labels_add(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        labels: &[String],
    ) -> Result<()> {
        #[derive(Serialize)]
        struct Request<'a> {
            labels: &'a [String],
        }

        self.get_client()?
            .post(self.build_url(format!(
                "/repos/{owner}/{name}/issues/{issue_number}/labels"
            )))
            .json(&Request { labels })
            .send()
            .await
            .map_err(http_err)?
            .error_for_status()
            .map_err(http_err)?;

        Ok(())
    }
}
