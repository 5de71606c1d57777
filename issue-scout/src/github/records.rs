//! Wire records returned by the GitHub REST API.
//!
//! Only the fields the pipeline reads are declared; everything else in the
//! payload is ignored by serde.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Repository owner as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct OwnerRecord {
    /// Login of the user or organization.
    pub login: String,
}

/// A repository entry from search results or `GET /repos/{owner}/{repo}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryRecord {
    pub name: String,
    pub full_name: String,
    /// Missing for some deleted or ghost accounts.
    #[serde(default)]
    pub owner: Option<OwnerRecord>,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `GET /search/repositories`.
#[derive(Debug, Clone, Deserialize)]
pub struct RepositorySearchPage {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub items: Vec<RepositoryRecord>,
}

/// A label attached to an issue.
///
/// The API documents labels as either a bare name or an object carrying an
/// optional name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LabelRecord {
    /// Bare label name.
    Name(String),
    /// Structured label.
    Object {
        #[serde(default)]
        name: Option<String>,
    },
}

impl LabelRecord {
    /// Normalizes the label to its display name. Nameless labels become `""`.
    #[must_use]
    pub fn into_name(self) -> String {
        match self {
            Self::Name(name) => name,
            Self::Object { name } => name.unwrap_or_default(),
        }
    }
}

/// An entry from `GET /repos/{owner}/{repo}/issues`.
///
/// The endpoint also returns pull requests; those carry a `pull_request` key.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueRecord {
    pub id: u64,
    pub number: u64,
    pub title: String,
    pub html_url: String,
    pub state: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub labels: Vec<LabelRecord>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub pull_request: Option<serde_json::Value>,
}

impl IssueRecord {
    /// Returns true if this entry is a pull request rather than an issue.
    #[must_use]
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}
