//! Resolve command handler.
//!
//! References are resolved in the order given against the same search path,
//! so an explicit path early on makes its siblings resolvable by bare name
//! later in the list.

use std::io::Write;

use serde::Serialize;
use yangpath_core::{ResolutionAttempt, ResolveError, ResolvedModule};

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Output mode for resolved references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// One resolved name per line.
    #[default]
    Names,
    /// Raw file contents, concatenated.
    Contents,
    /// JSON array of per-reference reports.
    Json,
}

impl OutputMode {
    pub const fn from_flags(cat: bool, json: bool) -> Self {
        if json {
            Self::Json
        } else if cat {
            Self::Contents
        } else {
            Self::Names
        }
    }
}

/// One entry of the `--json` report.
#[derive(Debug, Serialize)]
struct ResolveReport<'a> {
    reference: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    resolved: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attempts: Vec<ResolutionAttempt>,
}

impl<'a> ResolveReport<'a> {
    fn new(reference: &'a str, result: &Result<ResolvedModule, ResolveError>) -> Self {
        match result {
            Ok(module) => Self {
                reference,
                resolved: Some(module.name.clone()),
                error: None,
                attempts: Vec::new(),
            },
            Err(err) => Self {
                reference,
                resolved: None,
                error: Some(err.to_string()),
                attempts: err.attempts().to_vec(),
            },
        }
    }
}

/// Execute the resolve command.
///
/// Every reference is attempted even after a failure; the command fails with
/// [`CliError::Unresolved`] if any of them did not resolve.
pub fn execute<W: Write>(
    ctx: &mut CliContext,
    references: &[String],
    mode: OutputMode,
    out: &mut W,
) -> Result<(), CliError> {
    let mut failed = 0;
    let mut reports = Vec::new();

    for reference in references {
        let result = ctx.resolver.resolve(&mut ctx.search_path, reference);

        match (&result, mode) {
            (_, OutputMode::Json) => reports.push(ResolveReport::new(reference, &result)),
            (Ok(module), OutputMode::Names) => writeln!(out, "{}", module.name)?,
            (Ok(module), OutputMode::Contents) => out.write_all(&module.content)?,
            (Err(err), _) => eprintln!("{}", err.report()),
        }
        if result.is_err() {
            failed += 1;
        }
    }

    if mode == OutputMode::Json {
        serde_json::to_writer_pretty(&mut *out, &reports)?;
        writeln!(out)?;
    }

    if failed > 0 {
        return Err(CliError::Unresolved {
            failed,
            total: references.len(),
        });
    }
    Ok(())
}
