use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use time::OffsetDateTime;

use super::GhIssueState;
use crate::types::common::{GhLabel, GhUser};

/// GitHub Issue.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, SmartDefault)]
pub struct GhIssue {
    /// Number.
    pub number: u64,
    /// Title.
    pub title: String,
    /// User.
    pub user: GhUser,
    /// Labels.
    pub labels: Vec<GhLabel>,
    /// State.
    pub state: GhIssueState,
    /// Created at.
    #[default(OffsetDateTime::now_utc())]
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Updated at.
    #[default(OffsetDateTime::now_utc())]
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    /// Body.
    pub body: Option<String>,
    /// Pull request link, present when the issue is a pull request.
    pub pull_request: Option<GhIssuePullRequestLink>,
}

/// Link between an issue and its pull request.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhIssuePullRequestLink {
    /// Pull request API URL.
    pub url: Option<String>,
}
