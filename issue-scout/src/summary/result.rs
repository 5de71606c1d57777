//! Per-repository failure records.

use serde::Serialize;
use std::fmt;

/// Pipeline stage a repository failed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureStage {
    /// Stack detection stopped early; partial tags were kept.
    StackDetection,

    /// Issue listing failed; the repository contributed no issues.
    IssueFetch,
}

impl fmt::Display for FailureStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StackDetection => f.write_str("stack detection"),
            Self::IssueFetch => f.write_str("issue fetch"),
        }
    }
}

/// A failure absorbed during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryFailure {
    /// Repository full name.
    pub repository: String,

    /// Where it failed.
    pub stage: FailureStage,

    /// Error message.
    pub error: String,
}
