//! Concrete implementations of [`crate::ports::FileReaderPort`].

mod std_fs;

#[cfg(any(test, feature = "test-utils"))]
mod memory;

pub use std_fs::StdFileReader;

#[cfg(any(test, feature = "test-utils"))]
pub use memory::InMemoryFileReader;
