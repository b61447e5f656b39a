//! Search path management.
//!
//! The search path is the ordered, deduplicated list of directories consulted
//! when a bare module reference is not found in the working directory.
//!
//! # Design
//!
//! - The registry is an explicit value owned by the caller, never a global
//! - [`SearchPathRegistry`] is the single-threaded reference implementation
//! - [`SharedSearchPath`] wraps it for embedders that resolve from several threads
//! - Both implement [`SearchPathStore`], which is all the resolver needs

mod config;
mod discovery;
mod error;
mod registry;
mod shared;

pub use config::{SEARCH_PATH_ENV, SearchPathConfig, SearchPathSource};
pub use discovery::discover_module_dirs;
pub use error::{ConfigError, DiscoveryError};
pub use registry::{SEARCH_PATH_SEPARATOR, SearchPathRegistry};
pub use shared::SharedSearchPath;

/// Storage the resolver reads directories from and registers hits into.
pub trait SearchPathStore {
    /// Snapshot of the registered directories in search order.
    fn directories(&self) -> Vec<String>;

    /// Register every `:`-separated directory in `spec` not already present.
    fn register(&mut self, spec: &str);
}
