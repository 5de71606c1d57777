//! Repository discovery error types.

use crate::github::ApiError;
use thiserror::Error;

/// Errors that can occur during repository discovery.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Every search query failed, typically a bad credential or an outage.
    #[error("All {count} repository searches failed, last error: {source}")]
    AllQueriesFailed {
        count: usize,
        #[source]
        source: ApiError,
    },
}
