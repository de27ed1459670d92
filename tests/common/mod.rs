//! Test fixture utilities for integration tests.

pub mod harness;

use pretty_assertions::assert_eq;
use std::path::{Path, PathBuf};

/// Returns the path to the fixtures directory.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Returns the path to a fixture directory by name.
pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Copies every file in `src` into `dest`, creating `dest` if needed.
///
/// # Panics
///
/// Panics if any file cannot be copied.
pub fn copy_dir(src: &Path, dest: &Path) {
    std::fs::create_dir_all(dest)
        .unwrap_or_else(|e| panic!("Failed to create {}: {}", dest.display(), e));
    for entry in std::fs::read_dir(src).expect("Failed to read fixture directory") {
        let path = entry.expect("Failed to read fixture entry").path();
        if path.is_file() {
            let target = dest.join(path.file_name().unwrap());
            std::fs::copy(&path, &target)
                .unwrap_or_else(|e| panic!("Failed to copy {}: {}", path.display(), e));
        }
    }
}

/// Asserts that two directories hold the same file names with identical contents.
///
/// # Panics
///
/// Panics with a diff of the first mismatching file.
pub fn assert_dirs_equal(actual: &Path, expected: &Path) {
    let actual_files = sorted_files(actual);
    let expected_files = sorted_files(expected);
    assert_eq!(
        names(&actual_files),
        names(&expected_files),
        "file names differ in {}",
        actual.display()
    );

    for (a, e) in actual_files.iter().zip(&expected_files) {
        assert_eq!(
            read(a),
            read(e),
            "contents differ for {}",
            a.display()
        );
    }
}

fn sorted_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", dir.display(), e))
        .map(|entry| entry.expect("Failed to read entry").path())
        .filter(|path| path.is_file())
        .collect();
    files.sort();
    files
}

fn names(files: &[PathBuf]) -> Vec<String> {
    files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect()
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
}
