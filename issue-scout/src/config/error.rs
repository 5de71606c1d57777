//! Configuration error types.

use thiserror::Error;

/// Errors raised while loading a scout configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file was given but does not exist.
    #[error("Config file not found: {path}")]
    MissingConfig { path: String },

    /// The config file exists but could not be read.
    #[error("Cannot read config '{path}': {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The config is not valid TOML or a value has the wrong type.
    #[error("Invalid TOML in config '{path}': {source}")]
    InvalidToml {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// A setting has an unusable value.
    #[error("Invalid setting in '{path}': {message}")]
    Invalid { path: String, message: String },
}
