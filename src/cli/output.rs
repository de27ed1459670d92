//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;
use std::path::PathBuf;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// The open tasks of one note file.
#[derive(Debug, Serialize)]
pub struct OpenListing {
    pub path: PathBuf,
    pub open: usize,
    pub contents: String,
}
