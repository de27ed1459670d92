//! CLI command definitions and handlers

pub mod config;
pub mod date;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// bujo - bullet journal migrations for plain-text notes
#[derive(Parser, Debug)]
#[command(name = "bujo", version, about, long_about = None)]
pub struct Cli {
    /// Notes root directory (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Carry this month's open tasks into today's daily note
    #[command(alias = "m")]
    Daily(MigrateArgs),

    /// Roll last month's open tasks into this month's task list
    #[command(alias = "M")]
    Monthly(MigrateArgs),

    /// Show the open tasks in note files without changing them
    Open(OpenArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `daily` and `monthly` commands
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Run as if today were this date (YYYY-MM-DD, "yesterday", or relative like "3d")
    #[arg(long)]
    pub date: Option<String>,

    /// Print the new note file without writing anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `open` command
#[derive(Parser, Debug)]
pub struct OpenArgs {
    /// Note files to read
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
