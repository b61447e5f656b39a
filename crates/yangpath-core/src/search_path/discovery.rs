//! Module directory discovery.
//!
//! Walks a directory tree and reports every directory that holds at least
//! one module file, so a whole tree can be registered in one call.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::DiscoveryError;
use crate::resolver::MODULE_EXTENSION;

/// Return every directory under `root` (including `root`) containing a
/// `.yang` file.
///
/// Directories are visited depth-first, children sorted by name, so the
/// result is stable across runs. Symbolic links to directories are not
/// followed; a symbolic link to a regular `.yang` file counts as a module.
/// Directories whose path is not valid UTF-8 cannot be registered and are
/// skipped with a warning.
pub fn discover_module_dirs(root: &Path) -> Result<Vec<String>, DiscoveryError> {
    if !root.exists() {
        return Err(DiscoveryError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(DiscoveryError::NotADirectory(root.to_path_buf()));
    }

    let mut found = Vec::new();
    walk(root, &mut found)?;
    tracing::debug!(root = %root.display(), count = found.len(), "discovered module directories");
    Ok(found)
}

fn walk(dir: &Path, found: &mut Vec<String>) -> Result<(), DiscoveryError> {
    let read_err = |e: std::io::Error| DiscoveryError::ReadDir {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    };

    let mut entries: Vec<(PathBuf, fs::FileType)> = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let file_type = entry.file_type().map_err(read_err)?;
        entries.push((entry.path(), file_type));
    }
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    let has_module = entries.iter().any(|(path, file_type)| {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(MODULE_EXTENSION))
            && is_regular_file(path, file_type)
    });
    if has_module {
        match dir.to_str() {
            Some(dir) => found.push(dir.to_string()),
            None => tracing::warn!(
                dir = %dir.display(),
                "skipping module directory with a non UTF-8 path"
            ),
        }
    }

    for (path, file_type) in &entries {
        if file_type.is_dir() {
            walk(path, found)?;
        }
    }
    Ok(())
}

fn is_regular_file(path: &Path, file_type: &fs::FileType) -> bool {
    if file_type.is_symlink() {
        fs::metadata(path).is_ok_and(|meta| meta.is_file())
    } else {
        file_type.is_file()
    }
}
