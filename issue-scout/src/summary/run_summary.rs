//! Run summary types.

use super::result::{FailureStage, RepositoryFailure};
use crate::outcome::Outcome;

/// Summary of a complete pipeline run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of repositories returned by discovery.
    pub repositories_discovered: usize,

    /// Number of repositories whose stack and issues were fetched.
    pub repositories_scanned: usize,

    /// Number of issues collected across all scanned repositories.
    pub issues_collected: usize,

    /// Number of collected issues labeled as good first issues.
    pub good_first_issues: usize,

    /// Failures absorbed along the way.
    pub failures: Vec<RepositoryFailure>,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome of one per-repository operation.
    pub fn record<T>(&mut self, repository: &str, stage: FailureStage, outcome: &Outcome<T>) {
        if let Some(reason) = outcome.failure_reason() {
            self.failures.push(RepositoryFailure {
                repository: repository.to_string(),
                stage,
                error: reason.to_string(),
            });
        }
    }

    /// Number of failures in the given stage.
    #[must_use]
    pub fn failures_in(&self, stage: FailureStage) -> usize {
        self.failures.iter().filter(|f| f.stage == stage).count()
    }

    /// Returns true if any failures occurred.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Returns true if every repository was processed without error.
    #[must_use]
    pub fn all_success(&self) -> bool {
        self.failures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_record_outcomes() {
        let mut summary = RunSummary::new();

        summary.record(
            "stellar/go",
            FailureStage::StackDetection,
            &Outcome::Success(vec!["Go".to_string()]),
        );
        assert!(summary.all_success());

        summary.record(
            "stellar/js-stellar-sdk",
            FailureStage::IssueFetch,
            &Outcome::Failure {
                partial: Vec::<u64>::new(),
                reason: "GitHub API error: boom".to_string(),
            },
        );

        assert!(summary.has_failures());
        assert_eq!(summary.failures_in(FailureStage::IssueFetch), 1);
        assert_eq!(summary.failures_in(FailureStage::StackDetection), 0);
        assert_eq!(summary.failures[0].repository, "stellar/js-stellar-sdk");
    }
}
