//! Thread-safe search path handle.

use std::sync::{Arc, PoisonError, RwLock};

use super::{SearchPathRegistry, SearchPathStore};

/// A cloneable handle to one registry shared between threads.
///
/// Each registration happens under a single write lock, so concurrent
/// registrations never record a directory twice. No ordering is promised
/// between registrations racing on different threads.
#[derive(Debug, Clone, Default)]
pub struct SharedSearchPath {
    inner: Arc<RwLock<SearchPathRegistry>>,
}

impl SharedSearchPath {
    /// Create an empty shared search path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the directories in `spec`, skipping known ones.
    pub fn register(&self, spec: &str) {
        // A registration never leaves the registry half-updated, so a
        // poisoned lock still guards consistent data.
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .register(spec);
    }

    /// Snapshot of the registered directories in search order.
    pub fn directories(&self) -> Vec<String> {
        self.read().directories().to_vec()
    }

    pub fn contains(&self, dir: &str) -> bool {
        self.read().contains(dir)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, SearchPathRegistry> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<SearchPathRegistry> for SharedSearchPath {
    fn from(registry: SearchPathRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }
}

impl SearchPathStore for SharedSearchPath {
    fn directories(&self) -> Vec<String> {
        Self::directories(self)
    }

    fn register(&mut self, spec: &str) {
        Self::register(self, spec);
    }
}
