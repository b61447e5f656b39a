//! In-memory file reader for tests.
//!
//! Paths are matched as exact strings, so `a/foo.yang` and `./a/foo.yang`
//! are different files here even though a real file system would agree
//! they are the same.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Mutex;

use crate::ports::{FileReadError, FileReaderPort};

/// A fixed set of files held in memory.
///
/// Every read is recorded so tests can assert on the candidates the
/// resolver tried, in order.
#[derive(Debug, Default)]
pub struct InMemoryFileReader {
    files: HashMap<String, Vec<u8>>,
    denied: HashSet<String>,
    reads: Mutex<Vec<String>>,
}

impl InMemoryFileReader {
    /// Create an empty file set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a readable file.
    #[must_use]
    pub fn with_file(mut self, path: &str, contents: impl Into<Vec<u8>>) -> Self {
        self.files.insert(path.to_string(), contents.into());
        self
    }

    /// Add a file that exists but cannot be read.
    #[must_use]
    pub fn with_denied(mut self, path: &str) -> Self {
        self.denied.insert(path.to_string());
        self
    }

    /// Paths passed to `read_file` so far, oldest first.
    pub fn reads(&self) -> Vec<String> {
        self.reads
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

impl FileReaderPort for InMemoryFileReader {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>, FileReadError> {
        let key = path.to_string_lossy().into_owned();
        self.reads
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(key.clone());

        if self.denied.contains(&key) {
            return Err(FileReadError::PermissionDenied { path: key });
        }
        self.files
            .get(&key)
            .cloned()
            .ok_or(FileReadError::NotFound { path: key })
    }
}
