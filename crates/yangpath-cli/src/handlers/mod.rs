//! Command handlers.
//!
//! Handlers follow one pattern:
//! - Signature: `pub fn execute(ctx, args, out) -> Result<(), CliError>`
//! - Results go to `out`; diagnostics go to stderr
//! - No configuration is read here; the context is already composed

pub mod discover;
pub mod paths;
pub mod resolve;
