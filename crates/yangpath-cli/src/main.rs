//! CLI entry point - the composition root.

use std::io::Write;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use yangpath_cli::handlers::resolve::OutputMode;
use yangpath_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))
}

fn run(cli: Cli) -> Result<(), CliError> {
    let paths = cli.search_paths();
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = CliConfig::from_env(paths)?;
    let mut ctx = bootstrap(&config);
    let mut stdout = std::io::stdout().lock();

    let result = match command {
        Commands::Resolve {
            references,
            cat,
            json,
            ..
        } => handlers::resolve::execute(
            &mut ctx,
            &references,
            OutputMode::from_flags(cat, json),
            &mut stdout,
        ),
        Commands::Paths { .. } => handlers::paths::execute(&ctx, cli.verbose, &mut stdout),
        Commands::Discover { root, join, .. } => handlers::discover::execute(&root, join, &mut stdout),
    };
    stdout.flush()?;
    result
}

fn main() -> anyhow::Result<()> {
    // Load environment variables (YANGPATH may live in .env)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(err.exit_code());
    }
    Ok(())
}
