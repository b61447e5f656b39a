//! Main CLI parser and top-level argument handling.

use clap::{ArgAction, Args, Parser};

use crate::commands::Commands;

/// Resolve YANG module references the way a schema compiler would.
#[derive(Parser)]
#[command(name = "yangpath")]
#[command(about = "Resolve YANG module references against a search path")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub search: PathArgs,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// `--path` values, accepted both before and after the subcommand.
///
/// Each command level owns its own copy of the flag; [`Cli::search_paths`]
/// concatenates them in command-line order.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct PathArgs {
    /// Directories to search, separated by ':' (repeatable; searched before $YANGPATH)
    #[arg(short = 'p', long = "path", value_name = "DIR[:DIR...]", action = ArgAction::Append)]
    pub paths: Vec<String>,
}

impl Cli {
    /// Every `--path` value: those given before the subcommand, then those
    /// given after it.
    pub fn search_paths(&self) -> Vec<String> {
        let mut paths = self.search.paths.clone();
        if let Some(command) = &self.command {
            paths.extend(command.search().paths.iter().cloned());
        }
        paths
    }
}
