//! GitHub API error types.

use thiserror::Error;

/// Errors returned by [`GitHubApi`](super::GitHubApi) calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// The requested resource does not exist.
    #[error("Not found: {path}")]
    NotFound { path: String },

    /// Rate limit exhausted and the reset is too far away to wait for.
    #[error("Rate limit exceeded, reset at {reset_at}")]
    RateLimitExceeded { reset_at: u64 },
}

impl ApiError {
    /// Returns true if the error means the resource is absent.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::GitHubError(octocrab::Error::GitHub { source, .. }) => {
                source.status_code.as_u16() == 404
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_detected() {
        let error = ApiError::NotFound {
            path: "stellar/go/contents/Gemfile".to_string(),
        };
        assert!(error.is_not_found());
        assert_eq!(error.to_string(), "Not found: stellar/go/contents/Gemfile");
    }

    #[test]
    fn rate_limit_is_not_not_found() {
        let error = ApiError::RateLimitExceeded { reset_at: 1700000000 };
        assert!(!error.is_not_found());
    }
}
