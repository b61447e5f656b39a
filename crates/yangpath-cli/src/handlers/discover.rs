//! Discover command handler.

use std::io::Write;
use std::path::Path;

use yangpath_core::{SEARCH_PATH_SEPARATOR, discover_module_dirs};

use crate::error::CliError;

/// Execute the discover command.
///
/// Prints every directory under `root` holding a module file, either one per
/// line or joined into a single search path specification.
pub fn execute<W: Write>(root: &Path, join: bool, out: &mut W) -> Result<(), CliError> {
    let dirs = discover_module_dirs(root)?;

    if join {
        writeln!(out, "{}", dirs.join(&SEARCH_PATH_SEPARATOR.to_string()))?;
    } else {
        for dir in &dirs {
            writeln!(out, "{dir}")?;
        }
    }
    Ok(())
}
