//! File reader backed by `std::fs`.

use std::fs;
use std::path::Path;

use crate::ports::{FileReadError, FileReaderPort};

/// Reads module files from the real file system.
///
/// Relative paths are interpreted against the process working directory,
/// exactly as `std::fs::read` does.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileReader;

impl FileReaderPort for StdFileReader {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>, FileReadError> {
        fs::read(path).map_err(|e| FileReadError::from_io(path, &e))
    }
}
