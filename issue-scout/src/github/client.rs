//! `octocrab`-backed implementation of [`GitHubApi`].

use super::{ApiError, GitHubApi, IssueRecord, RepositoryRecord, RepositorySearchPage};
use crate::rate_limit::{ensure_core_rate_limit, ensure_search_rate_limit};
use async_trait::async_trait;
use octocrab::Octocrab;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::debug;
use url::Url;

/// Authenticated GitHub REST client.
///
/// The token is attached to every request. An invalid token is not detected
/// up front; it surfaces as an error on the first call.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    octocrab: Octocrab,
}

#[derive(Serialize)]
struct SearchParams<'a> {
    q: &'a str,
    sort: &'static str,
    order: &'static str,
    per_page: u8,
}

#[derive(Serialize)]
struct IssueListParams {
    state: &'static str,
    sort: &'static str,
    direction: &'static str,
    per_page: u8,
}

impl GitHubClient {
    /// Builds a client using `token`, optionally against a GitHub Enterprise
    /// API root.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is rejected or the HTTP client
    /// cannot be initialized.
    pub fn new(token: &SecretString, api_base_url: Option<&Url>) -> Result<Self, ApiError> {
        let mut builder = Octocrab::builder().personal_token(token.expose_secret());
        if let Some(base) = api_base_url {
            debug!(base_url = %base, "Using custom GitHub API base URL");
            builder = builder.base_uri(base.as_str())?;
        }

        Ok(Self {
            octocrab: builder.build()?,
        })
    }
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn search_repositories(
        &self,
        query: &str,
        per_page: u8,
    ) -> Result<Vec<RepositoryRecord>, ApiError> {
        ensure_search_rate_limit(&self.octocrab).await?;

        let params = SearchParams {
            q: query,
            sort: "updated",
            order: "desc",
            per_page,
        };
        let page: RepositorySearchPage = self
            .octocrab
            .get("/search/repositories", Some(&params))
            .await?;

        debug!(
            query,
            total_count = page.total_count,
            returned = page.items.len(),
            "Repository search page received"
        );
        Ok(page.items)
    }

    async fn get_repository(&self, owner: &str, repo: &str) -> Result<RepositoryRecord, ApiError> {
        let route = format!("/repos/{owner}/{repo}");
        Ok(self.octocrab.get(route, None::<&()>).await?)
    }

    async fn check_content(&self, owner: &str, repo: &str, path: &str) -> Result<(), ApiError> {
        let route = format!("/repos/{owner}/{repo}/contents/{path}");
        match self
            .octocrab
            .get::<serde_json::Value, _, ()>(&route, None::<&()>)
            .await
        {
            Ok(_) => Ok(()),
            Err(octocrab::Error::GitHub { source, .. }) if source.status_code.as_u16() == 404 => {
                Err(ApiError::NotFound { path: route })
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn list_open_issues(
        &self,
        owner: &str,
        repo: &str,
        per_page: u8,
    ) -> Result<Vec<IssueRecord>, ApiError> {
        ensure_core_rate_limit(&self.octocrab).await?;

        let route = format!("/repos/{owner}/{repo}/issues");
        let params = IssueListParams {
            state: "open",
            sort: "updated",
            direction: "desc",
            per_page,
        };
        Ok(self.octocrab.get(route, Some(&params)).await?)
    }
}
