//! bujo - bullet journal migrations for plain-text notes

pub mod cli;
pub mod domain;
pub mod infra;
pub mod migrate;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_completions, handle_migrate, handle_open},
};
use migrate::MigrationKind;

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load()?;
    let notes_dir = config.notes_dir(cli.dir.as_ref());

    match &cli.command {
        Command::Daily(args) => handle_migrate(MigrationKind::Daily, args, &notes_dir, &config),
        Command::Monthly(args) => {
            handle_migrate(MigrationKind::Monthly, args, &notes_dir, &config)
        }
        Command::Open(args) => handle_open(args),
        Command::Completions(args) => handle_completions(args),
    }
}

/// Installs a stderr log subscriber. `RUST_LOG` overrides the `-v` count.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Fails only if a global subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
