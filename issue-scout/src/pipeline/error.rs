//! Pipeline error types.

use crate::discovery::DiscoveryError;
use crate::github::ApiError;

/// Errors that abort a pipeline run.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Repository discovery failed outright.
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Client(#[from] ApiError),
}
