//! Command handlers for the CLI.

mod completions;
mod migrate;
mod open;

pub use completions::handle_completions;
pub use migrate::{handle_migrate, migration_options};
pub use open::{handle_open, open_tasks};
