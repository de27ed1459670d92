//! Isolated test environment with temp directory.

// Allow dead code since not every test binary uses every helper
#![allow(dead_code)]

use super::BujoCommand;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary notes root.
///
/// Creates a temp directory that is automatically cleaned up on drop. The
/// notes root lives at `<temp>/notes`; a separate empty config home keeps the
/// user's own config file out of the tests.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path to the notes root
    notes_dir: PathBuf,
    /// Path used as the config home for spawned commands
    config_home: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment with an empty notes root.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let notes_dir = temp_dir.path().join("notes");
        let config_home = temp_dir.path().join("config");
        std::fs::create_dir(&notes_dir).expect("Failed to create notes directory");
        std::fs::create_dir(&config_home).expect("Failed to create config directory");
        Self {
            _temp_dir: temp_dir,
            notes_dir,
            config_home,
        }
    }

    /// Returns the path to the notes root.
    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    /// Returns `<notes>/<year>/<mon>`.
    pub fn month_dir(&self, year: &str, month: &str) -> PathBuf {
        self.notes_dir.join(year).join(month)
    }

    /// Writes a note file relative to the notes root, creating parent directories.
    pub fn write_note(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.notes_dir.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create note directory");
        }
        std::fs::write(&path, content).expect("Failed to write note");
        path
    }

    /// Reads a note file relative to the notes root.
    pub fn read_note(&self, relative: &str) -> String {
        std::fs::read_to_string(self.notes_dir.join(relative)).expect("Failed to read note")
    }

    /// Copies a fixture directory into `<notes>/<year>/<mon>`.
    pub fn seed_month(&self, fixture: &str, year: &str, month: &str) -> PathBuf {
        let dest = self.month_dir(year, month);
        crate::common::copy_dir(&crate::common::fixture(fixture), &dest);
        dest
    }

    /// Creates a BujoCommand configured for this test environment.
    pub fn cmd(&self) -> BujoCommand {
        BujoCommand::new()
            .config_home(&self.config_home)
            .dir(&self.notes_dir)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_notes_directory() {
        let env = TestEnv::new();
        assert!(env.notes_dir().is_dir(), "notes directory should exist");
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.notes_dir().to_path_buf()
        };
        assert!(
            !path.exists(),
            "temp directory should be cleaned up on drop"
        );
    }

    #[test]
    fn test_env_write_and_read_note() {
        let env = TestEnv::new();
        let path = env.write_note("2019/dec/dec1.note", "* task\n");
        assert!(path.exists());
        assert_eq!(env.read_note("2019/dec/dec1.note"), "* task\n");
    }

    #[test]
    fn test_env_seed_month_copies_fixture() {
        let env = TestEnv::new();
        let dec = env.seed_month("dec", "2019", "dec");
        assert!(dec.join("dec23.note").exists());
        assert!(dec.join("tasks.note").exists());
    }
}
