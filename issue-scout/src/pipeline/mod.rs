//! Aggregation pipeline.
//!
//! One run: discover repositories, keep the top `repository_limit`, detect
//! each one's stack, list each one's open issues with a flat pause in
//! between, then classify every issue. All repository work is sequential;
//! only one request is in flight at a time.

mod config;
mod error;

pub use config::{PipelineConfig, DEFAULT_REPOSITORY_LIMIT, DEFAULT_REQUEST_DELAY};
pub use error::PipelineError;

use crate::config::ScoutConfig;
use crate::discovery::{search_repos, Repository};
use crate::github::{GitHubApi, GitHubClient};
use crate::issues::{fetch_repo_issues, process_issues, ProcessedIssue, RawIssue};
use crate::stack::detect_stack;
use crate::summary::{FailureStage, RunSummary};
use futures::stream::{self, StreamExt};
use secrecy::SecretString;
use std::collections::HashMap;
use tracing::{info, info_span, Instrument};

/// Issues and bookkeeping produced by one run.
#[derive(Debug, Clone)]
pub struct PipelineRun {
    /// Enriched issues, in repository rank order then listing order.
    pub issues: Vec<ProcessedIssue>,

    /// Counts and absorbed failures.
    pub summary: RunSummary,
}

/// Fetches and enriches an ecosystem's open issues.
pub struct Pipeline<C> {
    client: C,
    config: PipelineConfig,
}

impl Pipeline<GitHubClient> {
    /// Builds a pipeline talking to GitHub with `token`.
    ///
    /// # Errors
    ///
    /// Returns an error if the GitHub client cannot be initialized.
    pub fn from_config(config: &ScoutConfig, token: &SecretString) -> Result<Self, PipelineError> {
        let client = GitHubClient::new(token, config.api_base_url().as_ref())?;
        Ok(Self::new(client, PipelineConfig::from(config)))
    }
}

impl<C: GitHubApi> Pipeline<C> {
    /// Creates a pipeline over any [`GitHubApi`] implementation.
    pub fn new(client: C, config: PipelineConfig) -> Self {
        Self { client, config }
    }

    /// Returns the API client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Runs the pipeline and returns only the enriched issues.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError`] if discovery fails outright. Failures of
    /// individual repositories are absorbed.
    pub async fn fetch_all_issues(&self) -> Result<Vec<ProcessedIssue>, PipelineError> {
        Ok(self.run().await?.issues)
    }

    /// Runs the pipeline, returning issues and a summary of the run.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError`] if discovery fails outright.
    pub async fn run(&self) -> Result<PipelineRun, PipelineError> {
        let span = info_span!(
            "pipeline",
            repository_limit = self.config.repository_limit()
        );

        async {
            let mut summary = RunSummary::new();

            info!("Searching for ecosystem repositories");
            let repositories = search_repos(&self.client, self.config.queries()).await?;
            summary.repositories_discovered = repositories.len();

            let limit = self.config.repository_limit().min(repositories.len());
            let selected = &repositories[..limit];
            summary.repositories_scanned = selected.len();
            info!(
                discovered = repositories.len(),
                scanning = selected.len(),
                "Found repositories"
            );

            let stacks = self.detect_stacks(selected, &mut summary).await;

            info!("Fetching issues");
            let raw_issues = self.fetch_issues(selected, &mut summary).await;
            summary.issues_collected = raw_issues.len();
            info!(count = raw_issues.len(), "Found total issues");

            let issues = process_issues(raw_issues, &stacks);
            summary.good_first_issues = issues.iter().filter(|i| i.is_good_first_issue).count();

            Ok(PipelineRun { issues, summary })
        }
        .instrument(span)
        .await
    }

    /// Detects stacks one repository at a time, keyed by full name.
    async fn detect_stacks(
        &self,
        repositories: &[Repository],
        summary: &mut RunSummary,
    ) -> HashMap<String, Vec<String>> {
        let outcomes: Vec<_> = stream::iter(repositories)
            .then(|repo| async move {
                let outcome = detect_stack(&self.client, &repo.owner, &repo.name).await;
                (repo.full_name.clone(), outcome)
            })
            .collect()
            .await;

        let mut stacks = HashMap::with_capacity(outcomes.len());
        for (full_name, outcome) in outcomes {
            summary.record(&full_name, FailureStage::StackDetection, &outcome);
            stacks.insert(full_name, outcome.into_value());
        }
        stacks
    }

    /// Lists issues one repository at a time, pausing after each.
    async fn fetch_issues(
        &self,
        repositories: &[Repository],
        summary: &mut RunSummary,
    ) -> Vec<RawIssue> {
        let mut issues = Vec::new();

        for repo in repositories {
            let outcome = fetch_repo_issues(&self.client, &repo.owner, &repo.name)
                .instrument(info_span!("repository", repo = %repo.full_name))
                .await;
            summary.record(&repo.full_name, FailureStage::IssueFetch, &outcome);
            issues.extend(outcome.into_value());

            tokio::time::sleep(self.config.request_delay()).await;
        }

        issues
    }
}
