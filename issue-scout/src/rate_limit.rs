//! Rate limiting utilities for the GitHub API.
//!
//! Before a search query or issue listing, the client reads the rate-limit
//! endpoint (which does not count against the quota) and waits for the
//! window to reset when the budget is nearly spent. A reset further away
//! than [`MAX_WAIT_SECS`] fails the call instead of stalling the run.

mod info;

pub use info::RateLimitInfo;

use crate::github::ApiError;
use octocrab::Octocrab;
use std::time::Duration;
use tracing::{info, warn};

/// Longest we are willing to sleep for a rate-limit reset (1 hour).
pub const MAX_WAIT_SECS: u64 = 3600;

/// Minimum remaining requests before proactively waiting.
const MIN_REMAINING_THRESHOLD: u32 = 5;

/// What to do given the current rate-limit state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitAction {
    /// Enough budget left.
    Proceed,
    /// Sleep for the given duration, then proceed.
    Wait(Duration),
    /// The reset is too far away.
    GiveUp { reset_at: u64 },
}

/// Decides whether to proceed, wait or give up, given the current time as a
/// Unix timestamp.
#[must_use]
pub fn plan(info: &RateLimitInfo, now: u64) -> RateLimitAction {
    if info.remaining >= MIN_REMAINING_THRESHOLD || info.reset <= now {
        return RateLimitAction::Proceed;
    }

    let wait_secs = info.reset - now;
    if wait_secs > MAX_WAIT_SECS {
        return RateLimitAction::GiveUp {
            reset_at: info.reset,
        };
    }

    RateLimitAction::Wait(Duration::from_secs(wait_secs))
}

/// Checks the current rate limit status for the search API.
///
/// # Errors
///
/// Returns an error if the rate limit API call fails.
pub async fn check_search_rate_limit(
    octocrab: &Octocrab,
) -> Result<RateLimitInfo, octocrab::Error> {
    let rate_limit = octocrab.ratelimit().get().await?;
    let search = &rate_limit.resources.search;

    Ok(RateLimitInfo {
        remaining: search.remaining as u32,
        reset: search.reset,
        limit: search.limit as u32,
    })
}

/// Checks the current rate limit status for the core API (repos, issues, contents).
///
/// # Errors
///
/// Returns an error if the rate limit API call fails.
pub async fn check_core_rate_limit(octocrab: &Octocrab) -> Result<RateLimitInfo, octocrab::Error> {
    let rate_limit = octocrab.ratelimit().get().await?;
    let core = &rate_limit.resources.core;

    Ok(RateLimitInfo {
        remaining: core.remaining as u32,
        reset: core.reset,
        limit: core.limit as u32,
    })
}

/// Waits if the rate limit is low.
///
/// Returns `Ok(true)` if we waited, `Ok(false)` if no wait was needed.
///
/// # Errors
///
/// Returns [`ApiError::RateLimitExceeded`] when the reset lies more than
/// [`MAX_WAIT_SECS`] in the future.
pub async fn wait_if_needed(info: &RateLimitInfo) -> Result<bool, ApiError> {
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    match plan(info, now) {
        RateLimitAction::Proceed => Ok(false),
        RateLimitAction::Wait(duration) => {
            info!(
                remaining = info.remaining,
                used = info.used(),
                wait_secs = duration.as_secs(),
                "Rate limit low, waiting for reset"
            );
            tokio::time::sleep(duration).await;
            Ok(true)
        }
        RateLimitAction::GiveUp { reset_at } => {
            warn!(
                remaining = info.remaining,
                reset_at,
                max_wait = MAX_WAIT_SECS,
                "Rate limit reset too far in future, giving up"
            );
            Err(ApiError::RateLimitExceeded { reset_at })
        }
    }
}

/// Waits on the budget reported by a rate-limit check.
///
/// A failed check is logged and the call proceeds: servers with rate
/// limiting disabled answer the rate-limit endpoint with 404.
///
/// # Errors
///
/// Returns [`ApiError::RateLimitExceeded`] when the reset lies more than
/// [`MAX_WAIT_SECS`] in the future.
pub async fn wait_for_budget<E: std::fmt::Display>(
    resource: &str,
    check: Result<RateLimitInfo, E>,
) -> Result<(), ApiError> {
    match check {
        Ok(info) => {
            wait_if_needed(&info).await?;
        }
        Err(e) => warn!(
            resource,
            error = %e,
            "Rate limit check failed, proceeding without it"
        ),
    }
    Ok(())
}

/// Ensures sufficient rate limit before making search API calls.
///
/// # Errors
///
/// Returns an error if the budget cannot be replenished in time.
pub async fn ensure_search_rate_limit(octocrab: &Octocrab) -> Result<(), ApiError> {
    wait_for_budget("search", check_search_rate_limit(octocrab).await).await
}

/// Ensures sufficient rate limit before making core API calls.
///
/// # Errors
///
/// Returns an error if the budget cannot be replenished in time.
pub async fn ensure_core_rate_limit(octocrab: &Octocrab) -> Result<(), ApiError> {
    wait_for_budget("core", check_core_rate_limit(octocrab).await).await
}
