//! Search path error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while discovering module directories.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The discovery root does not exist.
    #[error("Directory {0} does not exist")]
    RootNotFound(PathBuf),

    /// The discovery root exists but is not a directory.
    #[error("{0} exists but is not a directory")]
    NotADirectory(PathBuf),

    /// A directory below the root could not be listed.
    #[error("Failed to read directory {path}: {reason}")]
    ReadDir { path: PathBuf, reason: String },
}

/// Errors that can occur while reading search path configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The environment variable is set but its value is not valid UTF-8.
    #[error("{var} is not valid UTF-8")]
    NotUnicode { var: &'static str },
}
