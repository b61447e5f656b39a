//! Ordered, deduplicated directory registry.

use std::collections::HashSet;

use super::SearchPathStore;

/// Separator between directories in a search path specification.
pub const SEARCH_PATH_SEPARATOR: char = ':';

/// The list of directories to look for module files in.
///
/// Registration order is search priority. A directory is recorded the first
/// time it is seen and never moves or disappears afterwards.
///
/// Splitting is literal: an empty specification, or one with a leading,
/// trailing or doubled separator, registers the empty string as a directory.
/// Joining the empty directory with a reference yields the reference itself,
/// so such an entry searches the working directory again.
#[derive(Debug, Clone, Default)]
pub struct SearchPathRegistry {
    paths: Vec<String>,
    seen: HashSet<String>,
}

impl SearchPathRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry from a single specification.
    pub fn from_spec(spec: &str) -> Self {
        let mut registry = Self::new();
        registry.register(spec);
        registry
    }

    /// Add the directories in `spec` (separated by `:`), skipping any
    /// already registered.
    pub fn register(&mut self, spec: &str) {
        for dir in spec.split(SEARCH_PATH_SEPARATOR) {
            if self.seen.insert(dir.to_string()) {
                self.paths.push(dir.to_string());
            }
        }
    }

    /// Registered directories in search order.
    pub fn directories(&self) -> &[String] {
        &self.paths
    }

    /// Whether `dir` is registered.
    pub fn contains(&self, dir: &str) -> bool {
        self.seen.contains(dir)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Render the registry back into a specification string.
    pub fn to_spec(&self) -> String {
        self.paths.join(&SEARCH_PATH_SEPARATOR.to_string())
    }
}

impl SearchPathStore for SearchPathRegistry {
    fn directories(&self) -> Vec<String> {
        self.paths.clone()
    }

    fn register(&mut self, spec: &str) {
        Self::register(self, spec);
    }
}
