use async_trait::async_trait;

use crate::{
    types::{GhArtifact, GhPullRequest, GhWorkflow},
    Result,
};

/// GitHub API adapter interface.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Get a workflow definition from its file identifier, `None` when absent.
    async fn workflows_get(
        &self,
        owner: &str,
        name: &str,
        workflow_id: &str,
    ) -> Result<Option<GhWorkflow>>;
    /// Trigger a workflow dispatch on a Git reference.
    async fn workflow_dispatches_create(
        &self,
        owner: &str,
        name: &str,
        workflow_id: &str,
        git_ref: &str,
    ) -> Result<()>;
    /// List artifacts produced by a workflow run.
    async fn workflow_run_artifacts_list(
        &self,
        owner: &str,
        name: &str,
        run_id: u64,
    ) -> Result<Vec<GhArtifact>>;
    /// Download an artifact as a zip archive.
    async fn artifacts_download(
        &self,
        owner: &str,
        name: &str,
        artifact_id: u64,
    ) -> Result<Vec<u8>>;
    /// Get a pull request from its number.
    async fn pulls_get(&self, owner: &str, name: &str, issue_number: u64) -> Result<GhPullRequest>;
    /// List open pull requests.
    async fn pulls_list_open(&self, owner: &str, name: &str) -> Result<Vec<GhPullRequest>>;
    /// Post a comment on a pull request or issue.
    async fn comments_post(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        body: &str,
    ) -> Result<u64>;
    /// Update a comment on a pull request or issue.
    async fn comments_update(
        &self,
        owner: &str,
        name: &str,
        comment_id: u64,
        body: &str,
    ) -> Result<u64>;
    /// Post a comment on a commit.
    async fn commit_comments_post(
        &self,
        owner: &str,
        name: &str,
        commit_sha: &str,
        body: &str,
    ) -> Result<u64>;
    /// Add labels to a target issue.
    async fn issue_labels_add(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        labels: &[String],
    ) -> Result<()>;
}
