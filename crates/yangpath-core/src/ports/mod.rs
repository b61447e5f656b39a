//! Port definitions (trait abstractions) for external systems.
//!
//! The resolver never touches the file system directly. It asks a
//! [`FileReaderPort`] for bytes, so adapters decide where those bytes come from.

pub mod file_reader;

pub use file_reader::{FileReadError, FileReaderPort};

#[cfg(test)]
pub use file_reader::MockFileReaderPort;
