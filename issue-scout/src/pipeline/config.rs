//! Pipeline configuration.

use crate::config::ScoutConfig;
use std::time::Duration;

/// Default number of top-ranked repositories scanned per run.
pub const DEFAULT_REPOSITORY_LIMIT: usize = 50;

/// Default pause after each repository's issue listing.
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_millis(100);

/// Configuration for a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Repository search queries, run in order.
    queries: Vec<String>,
    /// Maximum repositories scanned for stacks and issues.
    repository_limit: usize,
    /// Flat delay after each issue listing.
    request_delay: Duration,
}

impl PipelineConfig {
    /// Creates a configuration with the default limit and delay.
    pub fn new(queries: Vec<String>) -> Self {
        Self {
            queries,
            repository_limit: DEFAULT_REPOSITORY_LIMIT,
            request_delay: DEFAULT_REQUEST_DELAY,
        }
    }

    /// Sets the number of repositories scanned.
    pub fn with_repository_limit(mut self, repository_limit: usize) -> Self {
        self.repository_limit = repository_limit;
        self
    }

    /// Sets the delay between repositories.
    pub fn with_request_delay(mut self, request_delay: Duration) -> Self {
        self.request_delay = request_delay;
        self
    }

    /// Returns the search queries.
    pub fn queries(&self) -> &[String] {
        &self.queries
    }

    /// Returns the repository limit.
    pub fn repository_limit(&self) -> usize {
        self.repository_limit
    }

    /// Returns the delay between repositories.
    pub fn request_delay(&self) -> Duration {
        self.request_delay
    }
}

impl From<&ScoutConfig> for PipelineConfig {
    fn from(config: &ScoutConfig) -> Self {
        Self::new(config.queries())
            .with_repository_limit(config.pipeline.repository_limit)
            .with_request_delay(Duration::from_millis(config.pipeline.request_delay_ms))
    }
}
