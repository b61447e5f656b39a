//! File reader port.
//!
//! This port abstracts "read the file at this path" from the resolver.
//! Implementations live in [`crate::adapters`].
//!
//! # Design Notes
//!
//! - Reads are whole-file, byte-for-byte; no decoding happens here
//! - Failures are classified so callers can tell a missing file from an
//!   unreadable one, even though resolution reports both as "no such file"

use std::io;
use std::path::Path;

use thiserror::Error;

/// Errors that can occur while reading a candidate file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileReadError {
    /// Nothing exists at the path.
    #[error("{path}: not found")]
    NotFound { path: String },

    /// The file exists but the process may not read it.
    #[error("{path}: permission denied")]
    PermissionDenied { path: String },

    /// Any other I/O failure (the path is a directory, a device error, ...).
    #[error("{path}: {reason}")]
    Io { path: String, reason: String },
}

impl FileReadError {
    /// Classify an `io::Error` raised while reading `path`.
    pub fn from_io(path: &Path, err: &io::Error) -> Self {
        let path = path.display().to_string();
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io {
                path,
                reason: err.to_string(),
            },
        }
    }

    /// The path the failed read was attempted on.
    pub fn path(&self) -> &str {
        match self {
            Self::NotFound { path } | Self::PermissionDenied { path } | Self::Io { path, .. } => {
                path
            }
        }
    }
}

/// Port for reading module files.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use yangpath_core::{FileReaderPort, StdFileReader};
///
/// fn load(reader: &dyn FileReaderPort) -> bool {
///     reader.read_file(Path::new("does-not-exist.yang")).is_ok()
/// }
///
/// assert!(!load(&StdFileReader));
/// ```
#[cfg_attr(test, mockall::automock)]
pub trait FileReaderPort: Send + Sync {
    /// Read the whole file at `path`.
    fn read_file(&self, path: &Path) -> Result<Vec<u8>, FileReadError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_io_classifies_kinds() {
        let path = Path::new("models/foo.yang");

        let missing = io::Error::new(io::ErrorKind::NotFound, "gone");
        assert_eq!(
            FileReadError::from_io(path, &missing),
            FileReadError::NotFound {
                path: "models/foo.yang".to_string()
            }
        );

        let denied = io::Error::new(io::ErrorKind::PermissionDenied, "nope");
        assert!(matches!(
            FileReadError::from_io(path, &denied),
            FileReadError::PermissionDenied { .. }
        ));

        let other = io::Error::other("disk on fire");
        let err = FileReadError::from_io(path, &other);
        assert_eq!(err.path(), "models/foo.yang");
        assert_eq!(err.to_string(), "models/foo.yang: disk on fire");
    }

    #[test]
    fn test_mock_reader_returns_configured_bytes() {
        let mut reader = MockFileReaderPort::new();
        reader
            .expect_read_file()
            .withf(|p| p.to_str() == Some("a.yang"))
            .times(1)
            .returning(|_| Ok(b"module a;".to_vec()));

        let port: &dyn FileReaderPort = &reader;
        assert_eq!(port.read_file(Path::new("a.yang")).unwrap(), b"module a;");
    }
}
