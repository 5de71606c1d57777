#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod cache;
pub mod classify;
pub mod config;
pub mod discovery;
pub mod filter;
pub mod github;
pub mod issues;
pub mod outcome;
pub mod pipeline;
pub mod rate_limit;
pub mod stack;
pub mod summary;

pub use cache::{CacheError, IssueCache, IssueSnapshot};
pub use classify::{categorize_issue, determine_skill_level, is_good_first_issue, Category, SkillLevel};
pub use config::{ConfigError, ScoutConfig};
pub use discovery::{build_queries, search_repos, DiscoveryError, Repository};
pub use filter::{available_categories, available_stacks, IssueFilter};
pub use github::{ApiError, GitHubApi, GitHubClient};
pub use issues::{fetch_repo_issues, process_issues, ProcessedIssue, RawIssue};
pub use outcome::Outcome;
pub use pipeline::{Pipeline, PipelineConfig, PipelineError, PipelineRun};
pub use rate_limit::{
    check_core_rate_limit, check_search_rate_limit, ensure_core_rate_limit,
    ensure_search_rate_limit, wait_for_budget, wait_if_needed, RateLimitInfo,
};
pub use stack::{detect_stack, MANIFEST_STACKS};
pub use summary::{FailureStage, RepositoryFailure, RunSummary};
