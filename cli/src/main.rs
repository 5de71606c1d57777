//! CLI for issue-scout.
//!
//! `sync` runs the aggregation pipeline and stores the result as a JSON
//! snapshot; `list` reads the snapshot back and filters it.

use clap::{Args, Parser, Subcommand};
use issue_scout::{
    available_categories, available_stacks, CacheError, Category, ConfigError, FailureStage,
    IssueCache, IssueFilter, IssueSnapshot, Pipeline, PipelineError, RunSummary, ScoutConfig,
    SkillLevel,
};
use secrecy::SecretString;
use serde_json::json;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Issue Scout - Aggregate an open-source ecosystem's open issues.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(long, global = true, env = "ISSUE_SCOUT_CONFIG")]
    config: Option<PathBuf>,

    /// Path to the issues cache file (overrides the config file).
    #[arg(long, global = true)]
    cache: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch issues from GitHub and refresh the cache.
    Sync(SyncArgs),

    /// Print cached issues, optionally filtered.
    List(ListArgs),
}

#[derive(Args, Debug)]
struct SyncArgs {
    /// GitHub Personal Access Token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: String,

    /// Number of top-ranked repositories to scan.
    #[arg(long)]
    repository_limit: Option<usize>,

    /// Pause between repositories, in milliseconds.
    #[arg(long)]
    request_delay_ms: Option<u64>,
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Only issues whose repository uses this stack (repeatable).
    #[arg(long = "stack")]
    stacks: Vec<String>,

    /// Only issues of this skill level.
    #[arg(long, value_parser = parse_skill_level)]
    skill_level: Option<SkillLevel>,

    /// Only issues in this category (repeatable).
    #[arg(long = "category", value_parser = parse_category)]
    categories: Vec<Category>,

    /// Only good first issues.
    #[arg(long)]
    good_first_issue: bool,

    /// Text to search in titles, bodies and repository names.
    #[arg(long)]
    search: Option<String>,

    /// Print the filtered snapshot as JSON.
    #[arg(long)]
    json: bool,
}

fn parse_skill_level(value: &str) -> Result<SkillLevel, String> {
    value.parse()
}

fn parse_category(value: &str) -> Result<Category, String> {
    value.parse()
}

/// Errors that fail a sync.
#[derive(Debug, thiserror::Error)]
enum SyncError {
    /// Command-line overrides produced an invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Pipeline setup or discovery failure.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    /// Snapshot could not be written.
    #[error(transparent)]
    Cache(#[from] CacheError),
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return ExitCode::from(2);
        }
    };
    let cache = IssueCache::new(cli.cache.unwrap_or_else(|| config.cache.path.clone()));

    match cli.command {
        Command::Sync(args) => match sync(&config, &cache, args).await {
            Ok(summary) => {
                print_summary(&summary);

                if summary.all_success() {
                    ExitCode::from(0)
                } else {
                    ExitCode::from(1)
                }
            }
            Err(e) => {
                error!(error = %e, "Critical failure");
                println!("{}", json!({ "success": false, "error": e.to_string() }));
                ExitCode::from(2)
            }
        },
        Command::List(args) => {
            list(&cache, &args);
            ExitCode::from(0)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Logs go to stderr so that stdout only carries command output.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        // Falls back to "info" level if RUST_LOG is not set or invalid
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

fn load_config(path: Option<&Path>) -> Result<ScoutConfig, ConfigError> {
    match path {
        Some(path) => ScoutConfig::load(path),
        None => Ok(ScoutConfig::default()),
    }
}

/// Runs the pipeline and stores the snapshot.
async fn sync(
    config: &ScoutConfig,
    cache: &IssueCache,
    args: SyncArgs,
) -> Result<RunSummary, SyncError> {
    let config = apply_overrides(config, &args)?;
    let token = SecretString::from(args.token);

    let pipeline = Pipeline::from_config(&config, &token)?;

    info!("Starting issue fetch");
    let run = pipeline.run().await?;

    let snapshot = IssueSnapshot::new(run.issues);
    cache.store(&snapshot)?;

    println!(
        "{}",
        json!({
            "success": true,
            "count": snapshot.issues.len(),
            "lastUpdated": snapshot.last_updated,
        })
    );
    Ok(run.summary)
}

/// Applies `sync` flags on top of the loaded configuration and validates
/// the result.
fn apply_overrides(config: &ScoutConfig, args: &SyncArgs) -> Result<ScoutConfig, ConfigError> {
    let mut config = config.clone();
    if let Some(limit) = args.repository_limit {
        config.pipeline.repository_limit = limit;
    }
    if let Some(delay) = args.request_delay_ms {
        config.pipeline.request_delay_ms = delay;
    }

    config.validate(Path::new("command line"))?;
    Ok(config)
}

/// Prints cached issues matching the filter flags.
fn list(cache: &IssueCache, args: &ListArgs) {
    let snapshot = cache.load();
    let filter = IssueFilter {
        stacks: args.stacks.clone(),
        skill_level: args.skill_level,
        categories: args.categories.clone(),
        good_first_issue_only: args.good_first_issue,
        query: args.search.clone(),
    };
    let matched = filter.apply(&snapshot.issues);

    if args.json {
        let filtered = json!({
            "issues": matched,
            "lastUpdated": snapshot.last_updated,
        });
        println!("{filtered:#}");
        return;
    }

    match snapshot.last_updated {
        Some(at) => println!("Last updated: {}", at.to_rfc3339()),
        None => println!("Last updated: never (run `sync` first)"),
    }
    println!(
        "Showing {} of {} issues\n",
        matched.len(),
        snapshot.issues.len()
    );

    for issue in &matched {
        let raw = &issue.issue;
        let categories: Vec<&str> = issue.category.iter().map(|c| c.as_str()).collect();
        println!(
            "{}#{}  {}{}",
            raw.repo_full_name,
            raw.number,
            raw.title,
            if issue.is_good_first_issue {
                "  [good first issue]"
            } else {
                ""
            }
        );
        println!(
            "    {} | {} | stack: {} | {} comments",
            issue.skill_level,
            categories.join(", "),
            if issue.stack.is_empty() {
                "-".to_string()
            } else {
                issue.stack.join(", ")
            },
            raw.comments_count
        );
        println!("    {}", raw.url);
    }

    if !snapshot.issues.is_empty() {
        let categories: Vec<&str> = available_categories(&snapshot.issues)
            .iter()
            .map(|c| c.as_str())
            .collect();
        println!("\nStacks: {}", available_stacks(&snapshot.issues).join(", "));
        println!("Categories: {}", categories.join(", "));
    }
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!(
        "  Repositories discovered: {}",
        summary.repositories_discovered
    );
    println!("  Repositories scanned: {}", summary.repositories_scanned);
    println!("  Issues collected: {}", summary.issues_collected);
    println!("  Good first issues: {}", summary.good_first_issues);
    println!(
        "  Stack detection failures: {}",
        summary.failures_in(FailureStage::StackDetection)
    );
    println!(
        "  Issue fetch failures: {}",
        summary.failures_in(FailureStage::IssueFetch)
    );

    for failure in &summary.failures {
        println!(
            "    {} ({}): {}",
            failure.repository, failure.stage, failure.error
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sync_args(repository_limit: Option<usize>, request_delay_ms: Option<u64>) -> SyncArgs {
        SyncArgs {
            token: "test-token".to_string(),
            repository_limit,
            request_delay_ms,
        }
    }

    #[test]
    fn overrides_replace_config_values() {
        let config = apply_overrides(&ScoutConfig::default(), &sync_args(Some(10), Some(0)))
            .expect("valid overrides");

        assert_eq!(config.pipeline.repository_limit, 10);
        assert_eq!(config.pipeline.request_delay_ms, 0);
    }

    #[test]
    fn zero_repository_limit_override_is_rejected() {
        let result = apply_overrides(&ScoutConfig::default(), &sync_args(Some(0), None));

        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn cli_parses_sync_overrides() {
        let cli = Cli::try_parse_from([
            "issue-scout",
            "sync",
            "--token",
            "t",
            "--repository-limit",
            "0",
        ])
        .expect("parses");

        let Command::Sync(args) = cli.command else {
            panic!("expected sync");
        };
        assert!(apply_overrides(&ScoutConfig::default(), &args).is_err());
    }
}
