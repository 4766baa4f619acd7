//! Core error types for motivation-core.
//!
//! Session handlers never fail. Errors only arise at the edges: reading a
//! config file from disk, or reading a recorded event stream.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for motivation-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Event replay errors
    #[error("Replay error: {0}")]
    Replay(#[from] ReplayError),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// The configuration file exists but is not valid TOML
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

/// Errors reading a recorded event stream.
#[derive(Error, Debug)]
pub enum ReplayError {
    /// The event file could not be opened
    #[error("Failed to open {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line could not be decoded as a host event
    #[error("line {line}: {source}")]
    InvalidEvent {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// The underlying reader failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
