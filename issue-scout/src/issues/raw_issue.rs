//! Open issue as fetched from a repository.

use crate::github::{IssueRecord, LabelRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An open issue (never a pull request) with normalized labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawIssue {
    /// Platform-wide issue id.
    pub id: u64,

    pub title: String,

    /// GitHub URL of the issue.
    pub url: String,

    /// Issue number within its repository.
    pub number: u64,

    pub state: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    /// Label names.
    pub labels: Vec<String>,

    pub repo_owner: String,

    pub repo_name: String,

    /// Owning repository in "owner/name" format.
    pub repo_full_name: String,

    /// Body text, empty when the issue has none.
    pub body: String,

    pub comments_count: u64,
}

impl RawIssue {
    /// Converts an API record into an issue owned by `owner/repo`.
    #[must_use]
    pub fn from_record(record: IssueRecord, owner: &str, repo: &str) -> Self {
        Self {
            id: record.id,
            title: record.title,
            url: record.html_url,
            number: record.number,
            state: record.state,
            created_at: record.created_at,
            updated_at: record.updated_at,
            labels: record
                .labels
                .into_iter()
                .map(LabelRecord::into_name)
                .collect(),
            repo_owner: owner.to_string(),
            repo_name: repo.to_string(),
            repo_full_name: format!("{owner}/{repo}"),
            body: record.body.unwrap_or_default(),
            comments_count: record.comments,
        }
    }
}
