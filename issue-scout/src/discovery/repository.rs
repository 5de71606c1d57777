//! Discovered repository information.

use crate::github::RepositoryRecord;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A repository belonging to the tracked ecosystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub name: String,

    /// Full repository name in "owner/name" format.
    pub full_name: String,

    /// Description, empty when the repository has none.
    pub description: String,

    /// GitHub URL of the repository.
    pub url: String,

    /// Stargazer count.
    pub stars: u64,

    /// Primary language as reported by GitHub.
    pub language: Option<String>,

    /// Repository topics.
    pub topics: Vec<String>,

    /// Last time the repository was updated.
    pub last_updated: Option<DateTime<Utc>>,
}

impl Repository {
    /// Converts a search record, returning `None` when it has no owner.
    #[must_use]
    pub fn from_record(record: RepositoryRecord) -> Option<Self> {
        let owner = record.owner?.login;
        Some(Self {
            owner,
            name: record.name,
            full_name: record.full_name,
            description: record.description.unwrap_or_default(),
            url: record.html_url,
            stars: record.stargazers_count,
            language: record.language,
            topics: record.topics,
            last_updated: record.updated_at,
        })
    }
}
