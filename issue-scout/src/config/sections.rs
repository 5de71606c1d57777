//! Configuration file sections.

use serde::Deserialize;
use std::path::PathBuf;

/// Which repositories make up the ecosystem.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct EcosystemSection {
    /// Main topic tag (e.g. "stellar").
    pub primary_topic: String,

    /// Related topic tag (e.g. "soroban").
    pub secondary_topic: String,

    /// GitHub organization login.
    pub organization: String,
}

impl Default for EcosystemSection {
    fn default() -> Self {
        Self {
            primary_topic: "stellar".to_string(),
            secondary_topic: "soroban".to_string(),
            organization: "stellar".to_string(),
        }
    }
}

/// Work caps for a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PipelineSection {
    /// How many of the top-ranked repositories are scanned.
    pub repository_limit: usize,

    /// Pause after each repository's issue listing, in milliseconds.
    pub request_delay_ms: u64,
}

impl Default for PipelineSection {
    fn default() -> Self {
        Self {
            repository_limit: 50,
            request_delay_ms: 100,
        }
    }
}

/// GitHub connection settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct GitHubSection {
    /// API root for GitHub Enterprise; github.com when unset.
    pub api_base_url: Option<String>,
}

/// Cache artifact location.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct CacheSection {
    pub path: PathBuf,
}

impl Default for CacheSection {
    fn default() -> Self {
        Self {
            path: PathBuf::from("public/issues-cache.json"),
        }
    }
}
