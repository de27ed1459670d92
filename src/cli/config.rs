//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

use crate::infra::DEFAULT_TASKS_FILE;

/// Notes root used when neither `--dir` nor the config file names one.
pub const DEFAULT_NOTES_DIR: &str = "./notes";

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Default notes root directory
    pub dir: Option<PathBuf>,

    /// Name of each month's running task list
    pub tasks_file: Option<String>,

    /// Extra note file names that migrations never read or rewrite
    #[serde(default)]
    pub ignore: Vec<String>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/bujo/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("bujo")
            .join("config.toml")
    }

    /// Resolve the notes root, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--dir` argument
    /// 2. Config file `dir` setting
    /// 3. `./notes`
    pub fn notes_dir(&self, cli_dir: Option<&PathBuf>) -> PathBuf {
        cli_dir
            .cloned()
            .or_else(|| self.dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_NOTES_DIR))
    }

    /// Resolve the monthly task list file name.
    pub fn tasks_file(&self) -> &str {
        self.tasks_file.as_deref().unwrap_or(DEFAULT_TASKS_FILE)
    }
}
