//! Outbound GitHub API surface.
//!
//! [`GitHubApi`] lists the four calls the pipeline makes against the hosting
//! platform. [`GitHubClient`] implements them over `octocrab`; tests
//! substitute an in-memory implementation.

mod client;
mod error;
mod records;

pub use client::GitHubClient;
pub use error::ApiError;
pub use records::{IssueRecord, LabelRecord, OwnerRecord, RepositoryRecord, RepositorySearchPage};

use async_trait::async_trait;

/// Calls made by discovery, stack detection and issue fetching.
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// Searches repositories, most recently updated first, returning a single
    /// page of at most `per_page` results.
    async fn search_repositories(
        &self,
        query: &str,
        per_page: u8,
    ) -> Result<Vec<RepositoryRecord>, ApiError>;

    /// Fetches repository metadata.
    async fn get_repository(&self, owner: &str, repo: &str) -> Result<RepositoryRecord, ApiError>;

    /// Resolves if `path` exists on the default branch.
    ///
    /// # Errors
    ///
    /// Returns an error for which [`ApiError::is_not_found`] holds when the
    /// path does not exist.
    async fn check_content(&self, owner: &str, repo: &str, path: &str) -> Result<(), ApiError>;

    /// Lists open issues (and pull requests) sorted by last update, newest
    /// first, returning a single page of at most `per_page` entries.
    async fn list_open_issues(
        &self,
        owner: &str,
        repo: &str,
        per_page: u8,
    ) -> Result<Vec<IssueRecord>, ApiError>;
}
