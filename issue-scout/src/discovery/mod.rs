//! Repository discovery using the GitHub repository search API.
//!
//! A fixed set of queries (two topics and an organization) is run in order.
//! Results are merged, deduplicated by full name and ranked by stars.

mod error;
mod repository;

pub use error::DiscoveryError;
pub use repository::Repository;

use crate::github::{GitHubApi, RepositoryRecord};
use std::collections::HashSet;
use tracing::{debug, info, info_span, warn, Instrument};

/// Results requested per search query. Only the first page is read.
pub const RESULTS_PER_QUERY: u8 = 100;

/// Builds the three ecosystem queries: two topics, then the organization.
#[must_use]
pub fn build_queries(primary_topic: &str, secondary_topic: &str, organization: &str) -> Vec<String> {
    vec![
        format!("topic:{primary_topic}"),
        format!("topic:{secondary_topic}"),
        format!("org:{organization}"),
    ]
}

/// Discovers ecosystem repositories.
///
/// Each query contributes at most [`RESULTS_PER_QUERY`] repositories. A
/// query that fails is logged and contributes nothing.
///
/// # Returns
///
/// Repositories deduplicated by full name, sorted by stars descending with
/// ties kept in merge order.
///
/// # Errors
///
/// Returns [`DiscoveryError::AllQueriesFailed`] if every query failed.
pub async fn search_repos<C: GitHubApi + ?Sized>(
    client: &C,
    queries: &[String],
) -> Result<Vec<Repository>, DiscoveryError> {
    let span = info_span!("discover", queries = queries.len());

    async {
        info!("Starting repository discovery");

        let mut batches = Vec::with_capacity(queries.len());
        let mut failed = 0;
        let mut last_error = None;

        for query in queries {
            match client.search_repositories(query, RESULTS_PER_QUERY).await {
                Ok(records) => {
                    debug!(query = %query, count = records.len(), "Search query complete");
                    batches.push(records);
                }
                Err(e) => {
                    warn!(query = %query, error = %e, "Repository search failed, skipping query");
                    failed += 1;
                    last_error = Some(e);
                }
            }
        }

        if batches.is_empty() {
            if let Some(source) = last_error {
                return Err(DiscoveryError::AllQueriesFailed {
                    count: failed,
                    source,
                });
            }
        }

        let mut repositories = merge_results(batches);
        sort_by_stars(&mut repositories);

        info!(count = repositories.len(), failed_queries = failed, "Discovery complete");
        Ok(repositories)
    }
    .instrument(span)
    .await
}

/// Merges query results in order, keeping the first occurrence of each full
/// name and dropping records without an owner.
fn merge_results(batches: Vec<Vec<RepositoryRecord>>) -> Vec<Repository> {
    let mut seen = HashSet::new();
    let mut repositories = Vec::new();

    for record in batches.into_iter().flatten() {
        let Some(repository) = Repository::from_record(record) else {
            debug!("Skipping repository without owner");
            continue;
        };

        if seen.insert(repository.full_name.clone()) {
            repositories.push(repository);
        }
    }

    repositories
}

/// Stable sort, most stars first.
fn sort_by_stars(repositories: &mut [Repository]) {
    repositories.sort_by(|a, b| b.stars.cmp(&a.stars));
}
