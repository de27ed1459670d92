//! Daily and monthly migration command handlers.

use anyhow::{Context, Result, anyhow};
use chrono::{Local, NaiveDate};
use std::path::Path;

use crate::cli::MigrateArgs;
use crate::cli::config::Config;
use crate::cli::date::parse_run_date;
use crate::cli::output::{Output, OutputFormat};
use crate::migrate::{MigrationKind, MigrationOptions, MigrationReport, Migrator};

/// Builds migration options from CLI arguments and config (pure, no I/O).
pub fn migration_options(
    args: &MigrateArgs,
    config: &Config,
    today: NaiveDate,
) -> Result<MigrationOptions> {
    let date = match &args.date {
        Some(s) => parse_run_date(s, today).map_err(|e| anyhow!(e))?,
        None => today,
    };

    Ok(MigrationOptions::new(date)
        .tasks_file(config.tasks_file())
        .ignore(config.ignore.clone())
        .dry_run(args.dry_run))
}

pub fn handle_migrate(
    kind: MigrationKind,
    args: &MigrateArgs,
    notes_dir: &Path,
    config: &Config,
) -> Result<()> {
    let options = migration_options(args, config, Local::now().date_naive())?;

    let report = Migrator::new(notes_dir)
        .run(kind, &options)
        .with_context(|| format!("failed to run {} migration", kind))?;

    print_report(&report, args.format)
}

fn print_report(report: &MigrationReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            if report.dry_run {
                print!("{}", report.contents);
                eprintln!(
                    "Dry run: would carry {} open tasks into {}",
                    report.carried,
                    report.target.display()
                );
                return Ok(());
            }

            println!(
                "Carried {} open tasks into {}",
                report.carried,
                report.target.display()
            );
            for path in &report.rewritten {
                println!("  migrated: {}", path.display());
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Output::new(report))?);
        }
    }

    Ok(())
}
