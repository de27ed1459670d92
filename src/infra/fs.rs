//! File I/O for note files with atomic writes.

use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

/// Extension of note files.
pub const NOTE_EXTENSION: &str = "note";

/// Errors during file system operations on notes.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("not found: {path}")]
    NotFound { path: PathBuf },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("already exists: {path}")]
    AlreadyExists { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parent directory does not exist: {path}")]
    ParentNotFound { path: PathBuf },

    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("invalid encoding in {path}: {encoding}")]
    InvalidEncoding { path: PathBuf, encoding: String },
}

impl FsError {
    /// Creates an appropriate FsError from an io::Error.
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => FsError::NotFound { path: path.into() },
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path: path.into() },
            io::ErrorKind::AlreadyExists => FsError::AlreadyExists { path: path.into() },
            _ => FsError::Io {
                path: path.into(),
                source: error,
            },
        }
    }
}

/// Reads a note file as `\n`-joined lines.
///
/// CRLF line endings are normalized to LF and a single trailing newline is
/// dropped, so writing `text + "\n"` back reproduces an unchanged file.
///
/// # Errors
///
/// Returns `FsError::NotFound` if the file doesn't exist.
/// Returns `FsError::PermissionDenied` if access is denied.
/// Returns `FsError::InvalidEncoding` if the file is not valid UTF-8.
pub fn read_note_text(path: &Path) -> Result<String, FsError> {
    let bytes = std::fs::read(path).map_err(|e| FsError::from_io(path, e))?;
    decode_note_text(bytes, path)
}

fn decode_note_text(bytes: Vec<u8>, path: &Path) -> Result<String, FsError> {
    if bytes.starts_with(&[0xFF, 0xFE]) || bytes.starts_with(&[0xFE, 0xFF]) {
        return Err(FsError::InvalidEncoding {
            path: path.into(),
            encoding: "UTF-16 byte order mark detected; convert to UTF-8".into(),
        });
    }

    let content = String::from_utf8(bytes).map_err(|e| FsError::InvalidEncoding {
        path: path.into(),
        encoding: format!("invalid UTF-8 at byte {}", e.utf8_error().valid_up_to()),
    })?;

    let content = content.strip_prefix('\u{FEFF}').unwrap_or(&content);

    let has_lone_cr = content
        .as_bytes()
        .windows(2)
        .any(|w| w[0] == b'\r' && w[1] != b'\n')
        || content.as_bytes().last() == Some(&b'\r');
    if has_lone_cr {
        return Err(FsError::InvalidEncoding {
            path: path.into(),
            encoding: "CR-only line endings detected; convert to LF or CRLF".into(),
        });
    }

    let normalized = content.replace("\r\n", "\n");
    Ok(match normalized.strip_suffix('\n') {
        Some(trimmed) => trimmed.to_string(),
        None => normalized,
    })
}

/// Creates `dir` and any missing parents.
///
/// # Errors
///
/// Returns `FsError::PermissionDenied` if a directory cannot be created.
pub fn ensure_dir(dir: &Path) -> Result<(), FsError> {
    std::fs::create_dir_all(dir).map_err(|e| FsError::from_io(dir, e))
}

/// Replaces a file's contents atomically.
///
/// Writes to a temporary file in the same directory and renames it over the
/// target. The temporary file is removed if any step fails.
///
/// # Errors
///
/// Returns `FsError::ParentNotFound` if the parent directory doesn't exist.
/// Returns `FsError::AtomicWrite` if the rename fails.
pub fn replace_atomically(path: &Path, contents: &str) -> Result<(), FsError> {
    let temp = write_temp_sibling(path, contents)?;

    temp.persist(path).map_err(|e| FsError::AtomicWrite {
        path: path.into(),
        source: e.error,
    })?;

    Ok(())
}

/// Creates a new file atomically, refusing to overwrite an existing one.
///
/// # Errors
///
/// Returns `FsError::AlreadyExists` if `path` exists when the file is moved
/// into place.
/// Returns `FsError::ParentNotFound` if the parent directory doesn't exist.
pub fn create_exclusive(path: &Path, contents: &str) -> Result<(), FsError> {
    let temp = write_temp_sibling(path, contents)?;

    temp.persist_noclobber(path).map_err(|e| match e.error.kind() {
        io::ErrorKind::AlreadyExists => FsError::AlreadyExists { path: path.into() },
        _ => FsError::AtomicWrite {
            path: path.into(),
            source: e.error,
        },
    })?;

    Ok(())
}

fn write_temp_sibling(path: &Path, contents: &str) -> Result<NamedTempFile, FsError> {
    let parent = match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => Path::new("."),
        Some(parent) => parent,
        None => return Err(FsError::ParentNotFound { path: path.into() }),
    };

    if !parent.is_dir() {
        return Err(FsError::ParentNotFound {
            path: parent.into(),
        });
    }

    let mut temp = tempfile::Builder::new()
        .prefix(".tmp")
        .suffix(".note")
        .tempfile_in(parent)
        .map_err(|e| FsError::Io {
            path: path.into(),
            source: e,
        })?;

    temp.write_all(contents.as_bytes())
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|e| FsError::Io {
            path: path.into(),
            source: e,
        })?;

    Ok(temp)
}

/// Lists the note files directly inside `dir`, sorted by file name.
///
/// Skips hidden files (including in-flight temporary files), subdirectories,
/// files without the `.note` extension, and any file whose name is in `ignored`.
///
/// # Errors
///
/// Returns `FsError::NotFound` if the directory doesn't exist.
/// Returns `FsError::NotADirectory` if the path is not a directory.
pub fn scan_note_files(dir: &Path, ignored: &[String]) -> Result<Vec<PathBuf>, FsError> {
    if !dir.exists() {
        return Err(FsError::NotFound {
            path: dir.to_path_buf(),
        });
    }
    if !dir.is_dir() {
        return Err(FsError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| FsError::Io {
            path: dir.to_path_buf(),
            source: e.into(),
        })?;

        if entry.file_type().is_file()
            && !is_hidden(&entry)
            && has_note_extension(&entry)
            && !is_ignored(&entry, ignored)
        {
            paths.push(entry.into_path());
        }
    }

    Ok(paths)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|s| s.starts_with('.'))
}

fn has_note_extension(entry: &DirEntry) -> bool {
    entry
        .path()
        .extension()
        .is_some_and(|e| e == NOTE_EXTENSION)
}

fn is_ignored(entry: &DirEntry, ignored: &[String]) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| ignored.iter().any(|i| i == name))
}
