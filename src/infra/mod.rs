//! File I/O and the notes directory layout

mod fs;
mod period;

pub use fs::{
    FsError, NOTE_EXTENSION, create_exclusive, ensure_dir, read_note_text, replace_atomically,
    scan_note_files,
};
pub use period::{DEFAULT_TASKS_FILE, daily_file_name, month_dir, month_prefix, previous_month};
