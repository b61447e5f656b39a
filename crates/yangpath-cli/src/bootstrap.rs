//! CLI bootstrap - the composition root.
//!
//! Builds the search path from flags and the environment, and the resolver
//! that reads from the real file system. Handlers receive the composed
//! [`CliContext`] and never read configuration themselves.

use yangpath_core::{ModuleResolver, SearchPathConfig, SearchPathRegistry, SearchPathSource};

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Search path configuration (explicit `--path` values, then `YANGPATH`).
    pub search_path: SearchPathConfig,
}

impl CliConfig {
    /// Combine `--path` values with the `YANGPATH` environment variable.
    pub fn from_env(paths: Vec<String>) -> Result<Self, CliError> {
        Ok(Self {
            search_path: SearchPathConfig::from_env(paths)?,
        })
    }

    /// Build a config from explicit values, without reading the environment.
    pub fn new(paths: Vec<String>, env_value: Option<String>) -> Self {
        Self {
            search_path: SearchPathConfig::new(paths, env_value),
        }
    }
}

/// Fully composed context for CLI commands.
#[derive(Debug)]
pub struct CliContext {
    /// Resolver reading from the file system.
    pub resolver: ModuleResolver,
    /// Search path shared by every reference resolved in this invocation.
    pub search_path: SearchPathRegistry,
    /// How the search path was configured.
    pub source: SearchPathSource,
}

/// Wire the resolver and search path together.
pub fn bootstrap(config: &CliConfig) -> CliContext {
    bootstrap_with(config, ModuleResolver::default())
}

/// Wire a context around a caller-provided resolver.
pub fn bootstrap_with(config: &CliConfig, resolver: ModuleResolver) -> CliContext {
    let mut search_path = SearchPathRegistry::new();
    config.search_path.register_into(&mut search_path);
    tracing::debug!(
        search_path = %search_path.to_spec(),
        source = ?config.search_path.source(),
        "search path configured"
    );

    CliContext {
        resolver,
        search_path,
        source: config.search_path.source(),
    }
}
