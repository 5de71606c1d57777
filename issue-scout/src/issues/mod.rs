//! Open issue fetching and enrichment.

mod processed;
mod raw_issue;

pub use processed::{process_issues, ProcessedIssue};
pub use raw_issue::RawIssue;

use crate::github::GitHubApi;
use crate::outcome::Outcome;
use tracing::{debug, warn};

/// Issues requested per repository. Only the first page is read.
pub const ISSUES_PER_REPOSITORY: u8 = 100;

/// Fetches up to [`ISSUES_PER_REPOSITORY`] open issues of `owner/repo`,
/// most recently updated first, with pull requests removed.
///
/// # Returns
///
/// [`Outcome::Failure`] with an empty list if the listing fails.
pub async fn fetch_repo_issues<C: GitHubApi + ?Sized>(
    client: &C,
    owner: &str,
    repo: &str,
) -> Outcome<Vec<RawIssue>> {
    match client
        .list_open_issues(owner, repo, ISSUES_PER_REPOSITORY)
        .await
    {
        Ok(records) => {
            let listed = records.len();
            let issues: Vec<RawIssue> = records
                .into_iter()
                .filter(|record| !record.is_pull_request())
                .map(|record| RawIssue::from_record(record, owner, repo))
                .collect();

            debug!(
                repo = %format!("{owner}/{repo}"),
                listed,
                issues = issues.len(),
                "Fetched issues"
            );
            Outcome::Success(issues)
        }
        Err(e) => {
            warn!(
                repo = %format!("{owner}/{repo}"),
                error = %e,
                "Failed to fetch issues"
            );
            Outcome::Failure {
                partial: Vec::new(),
                reason: e.to_string(),
            }
        }
    }
}
