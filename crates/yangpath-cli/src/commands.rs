//! Main commands enum.

use std::path::PathBuf;

use clap::Subcommand;

use crate::parser::PathArgs;

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve module references to files, in order, sharing one search path
    Resolve {
        /// Module names or paths (e.g. "ietf-interfaces", "models/acme.yang")
        #[arg(required = true)]
        references: Vec<String>,
        /// Print file contents instead of resolved names
        #[arg(long)]
        cat: bool,
        /// Print a JSON report with every attempted candidate
        #[arg(long, conflicts_with = "cat")]
        json: bool,
        #[command(flatten)]
        search: PathArgs,
    },

    /// Show the effective search path, one directory per line
    Paths {
        #[command(flatten)]
        search: PathArgs,
    },

    /// List directories under ROOT that contain .yang files
    Discover {
        /// Directory tree to scan
        root: PathBuf,
        /// Print a single ':'-joined line suitable for YANGPATH
        #[arg(long)]
        join: bool,
        #[command(flatten)]
        search: PathArgs,
    },
}

impl Commands {
    /// `--path` values given after this subcommand.
    pub const fn search(&self) -> &PathArgs {
        match self {
            Self::Resolve { search, .. } | Self::Paths { search } | Self::Discover { search, .. } => {
                search
            }
        }
    }
}
