//! Search path configuration.
//!
//! Resolves the initial search path from explicit values (e.g. a CLI flag)
//! and the `YANGPATH` environment variable.

use std::env::{self, VarError};

use super::SearchPathStore;
use super::error::ConfigError;

/// Environment variable holding a `:`-separated search path.
pub const SEARCH_PATH_ENV: &str = "YANGPATH";

/// Where the highest-priority search path entries came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPathSource {
    /// The caller passed explicit specifications (CLI flag, API call).
    Explicit,
    /// The path came from `YANGPATH`.
    EnvVar,
    /// Nothing was configured; only the working directory is searched.
    Default,
}

/// Configured search path specifications, not yet registered.
///
/// Registration order:
/// 1. Explicit specifications, in the order given
/// 2. `YANGPATH`
///
/// Deduplication keeps a directory at its first position, so an explicit
/// entry always outranks the same directory named in the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPathConfig {
    explicit: Vec<String>,
    env: Option<String>,
}

impl SearchPathConfig {
    /// Build a config from explicit specifications and an environment value.
    ///
    /// A missing or blank environment value is treated as unset. Explicit
    /// specifications are kept verbatim, even when empty.
    pub fn new(explicit: Vec<String>, env_value: Option<String>) -> Self {
        Self {
            explicit,
            env: env_value.filter(|value| !value.trim().is_empty()),
        }
    }

    /// Build a config from explicit specifications and the `YANGPATH`
    /// variable of the current process.
    ///
    /// Fails with [`ConfigError::NotUnicode`] when `YANGPATH` is set to a
    /// value that is not valid UTF-8.
    pub fn from_env(explicit: Vec<String>) -> Result<Self, ConfigError> {
        Self::from_var(explicit, env::var(SEARCH_PATH_ENV))
    }

    fn from_var(
        explicit: Vec<String>,
        value: Result<String, VarError>,
    ) -> Result<Self, ConfigError> {
        match value {
            Ok(value) => Ok(Self::new(explicit, Some(value))),
            Err(VarError::NotPresent) => Ok(Self::new(explicit, None)),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode {
                var: SEARCH_PATH_ENV,
            }),
        }
    }

    /// Register every configured specification into `store`.
    pub fn register_into<S: SearchPathStore + ?Sized>(&self, store: &mut S) {
        for spec in self.specs() {
            tracing::debug!(spec, "registering search path");
            store.register(spec);
        }
    }

    /// Configured specifications in registration order.
    pub fn specs(&self) -> impl Iterator<Item = &str> {
        self.explicit
            .iter()
            .map(String::as_str)
            .chain(self.env.as_deref())
    }

    /// How the search path was configured.
    pub fn source(&self) -> SearchPathSource {
        if !self.explicit.is_empty() {
            SearchPathSource::Explicit
        } else if self.env.is_some() {
            SearchPathSource::EnvVar
        } else {
            SearchPathSource::Default
        }
    }
}
