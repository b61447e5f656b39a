//! Paths command handler.
//!
//! Displays the effective search path for diagnostics.

use std::io::Write;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the paths command.
///
/// Prints one directory per line in search order. An empty directory entry
/// prints as `""` so it stays visible. With `verbose`, a leading comment line
/// names the configuration source.
pub fn execute<W: Write>(ctx: &CliContext, verbose: bool, out: &mut W) -> Result<(), CliError> {
    if verbose {
        writeln!(out, "# source = {:?}", ctx.source)?;
    }
    for dir in ctx.search_path.directories() {
        if dir.is_empty() {
            writeln!(out, "\"\"")?;
        } else {
            writeln!(out, "{dir}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::{CliConfig, bootstrap};

    #[test]
    fn test_prints_directories_in_order() {
        let ctx = bootstrap(&CliConfig::new(
            vec!["b:a".to_string()],
            Some("a:c".to_string()),
        ));
        let mut out: Vec<u8> = Vec::new();

        execute(&ctx, true, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "# source = Explicit\nb\na\nc\n"
        );
    }

    #[test]
    fn test_empty_entry_is_visible() {
        let ctx = bootstrap(&CliConfig::new(vec![":x".to_string()], None));
        let mut out: Vec<u8> = Vec::new();

        execute(&ctx, false, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\"\"\nx\n");
    }
}
