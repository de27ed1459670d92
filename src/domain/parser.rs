//! Parsing raw note text into a flat sequence of depth-tagged records.

use regex::Regex;
use std::sync::LazyLock;

/// Matches a bullet line: optional leading indentation, then one marker character.
static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([ \t]*)[?\-*x~><]").expect("bullet pattern is valid"));

/// A single bullet item before its place in the hierarchy is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRecord {
    /// Number of leading whitespace characters before the marker.
    pub depth: usize,
    /// The bullet line plus any continuation lines, newline-joined.
    pub text: String,
}

impl NoteRecord {
    fn new(depth: usize, line: &str) -> Self {
        Self {
            depth,
            text: line.to_string(),
        }
    }

    fn append_line(&mut self, line: &str) {
        self.text.push('\n');
        self.text.push_str(line);
    }
}

/// Returns the depth of `line` if it is a bullet line.
pub fn bullet_depth(line: &str) -> Option<usize> {
    BULLET
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|indent| indent.as_str().len())
}

/// Splits `text` into depth-tagged records.
///
/// Lines that are not bullets are appended to the most recent record. Any
/// such lines before the first bullet are discarded.
pub fn parse_records(text: &str) -> Vec<NoteRecord> {
    let mut records: Vec<NoteRecord> = Vec::new();

    for line in text.split('\n') {
        match bullet_depth(line) {
            Some(depth) => records.push(NoteRecord::new(depth, line)),
            None => {
                if let Some(current) = records.last_mut() {
                    current.append_line(line);
                }
            }
        }
    }

    records
}
