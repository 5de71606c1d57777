//! Configuration loading.
//!
//! Settings come from an optional TOML file; every key has a default, so an
//! empty file (or no file) yields the stock Stellar ecosystem setup.
//!
//! ```toml
//! [ecosystem]
//! primary-topic = "stellar"
//! secondary-topic = "soroban"
//! organization = "stellar"
//!
//! [pipeline]
//! repository-limit = 50
//! request-delay-ms = 100
//!
//! [github]
//! api-base-url = "https://github.example.com/api/v3"
//!
//! [cache]
//! path = "public/issues-cache.json"
//! ```

mod error;
mod sections;

pub use error::ConfigError;
pub use sections::{CacheSection, EcosystemSection, GitHubSection, PipelineSection};

use crate::discovery::build_queries;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};
use url::Url;

/// Complete issue-scout configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ScoutConfig {
    pub ecosystem: EcosystemSection,
    pub pipeline: PipelineSection,
    pub github: GitHubSection,
    pub cache: CacheSection,
}

impl ScoutConfig {
    /// Loads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is missing, unreadable, not valid
    /// TOML, or fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        info!(path = %path.display(), "Loading configuration");

        if !path.exists() {
            return Err(ConfigError::MissingConfig {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::parse(&content, path)
    }

    /// Parses and validates TOML content. `path` is only used in errors.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the content is not valid TOML or fails
    /// validation.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::InvalidToml {
            path: path.display().to_string(),
            source: e,
        })?;

        config.validate(path)?;
        debug!(config = ?config, "Configuration loaded");
        Ok(config)
    }

    /// Validates field values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first problem.
    pub fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let fail = |message: &str| ConfigError::Invalid {
            path: path.display().to_string(),
            message: message.to_string(),
        };

        let ecosystem = &self.ecosystem;
        if ecosystem.primary_topic.trim().is_empty() {
            return Err(fail("ecosystem.primary-topic cannot be empty"));
        }
        if ecosystem.secondary_topic.trim().is_empty() {
            return Err(fail("ecosystem.secondary-topic cannot be empty"));
        }
        if ecosystem.organization.trim().is_empty() {
            return Err(fail("ecosystem.organization cannot be empty"));
        }

        if self.pipeline.repository_limit == 0 {
            return Err(fail("pipeline.repository-limit must be at least 1"));
        }

        if let Some(base) = &self.github.api_base_url {
            Url::parse(base).map_err(|e| ConfigError::Invalid {
                path: path.display().to_string(),
                message: format!("github.api-base-url is not a valid URL: {e}"),
            })?;
        }

        Ok(())
    }

    /// Search queries for repository discovery.
    #[must_use]
    pub fn queries(&self) -> Vec<String> {
        build_queries(
            &self.ecosystem.primary_topic,
            &self.ecosystem.secondary_topic,
            &self.ecosystem.organization,
        )
    }

    /// Parsed GitHub API base URL, if configured.
    ///
    /// Validation has already checked the value, so this only returns `None`
    /// when no base URL is set.
    #[must_use]
    pub fn api_base_url(&self) -> Option<Url> {
        self.github
            .api_base_url
            .as_deref()
            .and_then(|base| Url::parse(base).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn parse(content: &str) -> Result<ScoutConfig, ConfigError> {
        ScoutConfig::parse(content, &PathBuf::from("scout.toml"))
    }

    #[test]
    fn empty_file_uses_defaults() {
        let config = parse("").unwrap();

        assert_eq!(config, ScoutConfig::default());
        assert_eq!(config.pipeline.repository_limit, 50);
        assert_eq!(config.pipeline.request_delay_ms, 100);
        assert_eq!(
            config.queries(),
            vec!["topic:stellar", "topic:soroban", "org:stellar"]
        );
        assert!(config.api_base_url().is_none());
    }

    #[test]
    fn can_override_sections() {
        let config = parse(
            r#"
[ecosystem]
primary-topic = "cosmos"
secondary-topic = "cosmwasm"
organization = "cosmos"

[pipeline]
repository-limit = 10
request-delay-ms = 250

[github]
api-base-url = "https://github.example.com/api/v3"
"#,
        )
        .unwrap();

        assert_eq!(
            config.queries(),
            vec!["topic:cosmos", "topic:cosmwasm", "org:cosmos"]
        );
        assert_eq!(config.pipeline.repository_limit, 10);
        assert_eq!(config.pipeline.request_delay_ms, 250);
        assert_eq!(
            config.api_base_url().unwrap().as_str(),
            "https://github.example.com/api/v3"
        );
        assert_eq!(config.cache, CacheSection::default());
    }

    #[test]
    fn rejects_zero_repository_limit() {
        let result = parse("[pipeline]\nrepository-limit = 0\n");
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn rejects_empty_topic() {
        let result = parse("[ecosystem]\nprimary-topic = \"  \"\n");
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn rejects_invalid_base_url() {
        let result = parse("[github]\napi-base-url = \"not a url\"\n");
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn rejects_malformed_toml() {
        let result = parse("[pipeline\n");
        assert!(matches!(result, Err(ConfigError::InvalidToml { .. })));
    }

    #[test]
    fn load_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("scout.toml");
        fs::write(&path, "[cache]\npath = \"out/issues.json\"\n").unwrap();

        let config = ScoutConfig::load(&path).unwrap();
        assert_eq!(config.cache.path, PathBuf::from("out/issues.json"));
    }

    #[test]
    fn load_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = ScoutConfig::load(&temp.path().join("nope.toml"));
        assert!(matches!(result, Err(ConfigError::MissingConfig { .. })));
    }
}
