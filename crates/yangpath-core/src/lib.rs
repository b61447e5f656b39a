//! Module reference resolution for YANG toolchains.
//!
//! A schema document names the modules it imports by bare name (`ietf-inet-types`),
//! by file name (`ietf-inet-types.yang`) or by path (`models/ietf-inet-types.yang`).
//! This crate turns such a reference into the file that defines it:
//!
//! - [`search_path`] holds the ordered, deduplicated list of directories to search
//! - [`resolver`] implements extension inference and the search procedure
//! - [`ports`] defines the file-reading capability the resolver depends on
//! - [`adapters`] provides the standard file-system reader (and an in-memory one for tests)
//!
//! # Example
//!
//! ```no_run
//! use yangpath_core::{ModuleResolver, SearchPathRegistry};
//!
//! let mut search_path = SearchPathRegistry::new();
//! search_path.register("models/ietf:models/openconfig");
//!
//! let resolver = ModuleResolver::default();
//! let module = resolver.resolve(&mut search_path, "ietf-interfaces")?;
//! println!("{} ({} bytes)", module.name, module.content.len());
//! # Ok::<(), yangpath_core::ResolveError>(())
//! ```
#![deny(unused_crate_dependencies)]

pub mod adapters;
pub mod ports;
pub mod resolver;
pub mod search_path;

// Re-export commonly used types for convenience
pub use adapters::StdFileReader;
#[cfg(any(test, feature = "test-utils"))]
pub use adapters::InMemoryFileReader;
pub use ports::{FileReadError, FileReaderPort};
pub use resolver::{
    MODULE_EXTENSION, ModuleResolver, ReadOutcome, ResolutionAttempt, ResolveError,
    ResolvedModule, complete_reference, has_separator,
};
pub use search_path::{
    ConfigError, DiscoveryError, SEARCH_PATH_ENV, SEARCH_PATH_SEPARATOR, SearchPathConfig,
    SearchPathRegistry, SearchPathSource, SearchPathStore, SharedSearchPath, discover_module_dirs,
};
