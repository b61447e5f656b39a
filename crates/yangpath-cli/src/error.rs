//! CLI-specific error types and exit code mapping.

use thiserror::Error;
use yangpath_core::{ConfigError, DiscoveryError};

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// One or more references did not resolve.
    #[error("{failed} of {total} module reference(s) could not be resolved")]
    Unresolved { failed: usize, total: usize },

    /// Discovery root missing or unreadable.
    #[error("Discovery failed: {0}")]
    Discovery(String),

    /// IO error while writing output.
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to an exit code (see sysexits.h).
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Unresolved { .. } | Self::Discovery(_) => 66, // EX_NOINPUT
            Self::Io(_) => 74,                                 // EX_IOERR
            Self::Config(_) => 78,                             // EX_CONFIG
        }
    }
}

impl From<DiscoveryError> for CliError {
    fn from(err: DiscoveryError) -> Self {
        Self::Discovery(err.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Io(err.to_string())
    }
}
