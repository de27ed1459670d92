//! Hierarchical note model and the tree rewrites used by migrations.

use crate::domain::builder::build_tree;
use crate::domain::marker::Marker;
use crate::domain::parser::{bullet_depth, parse_records};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A single bullet item and the items nested beneath it.
///
/// `text` holds the bullet line and its continuation lines exactly as they
/// appeared in the source. `depth` is only used while building the tree;
/// serialization re-emits `text` verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    depth: usize,
    text: String,
    children: NoteTree,
}

impl Note {
    /// Creates a note with no children.
    pub fn new(depth: usize, text: impl Into<String>) -> Self {
        Self::with_children(depth, text, NoteTree::new())
    }

    pub fn with_children(depth: usize, text: impl Into<String>, children: NoteTree) -> Self {
        Self {
            depth,
            text: text.into(),
            children,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn children(&self) -> &NoteTree {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut NoteTree {
        &mut self.children
    }

    /// Returns the marker on the note's first line.
    pub fn marker(&self) -> Option<Marker> {
        self.marker_at().map(|(_, marker)| marker)
    }

    /// Returns true if the note is an open task that has not been carried forward.
    pub fn is_unmigrated(&self) -> bool {
        self.marker().is_some_and(Marker::is_unmigrated)
    }

    /// Rewrites the leading `*` marker to `>`.
    ///
    /// Only the marker character is replaced; the rest of the text, including
    /// continuation lines, is untouched. Returns false if the note was not
    /// unmigrated.
    pub fn migrate(&mut self) -> bool {
        let Some((at, marker)) = self.marker_at() else {
            return false;
        };
        if !marker.is_unmigrated() {
            return false;
        }
        let end = at + marker.as_char().len_utf8();
        self.text.replace_range(at..end, &Marker::Migrated.to_string());
        true
    }

    /// Byte offset and value of the first line's marker.
    fn marker_at(&self) -> Option<(usize, Marker)> {
        let depth = bullet_depth(&self.text)?;
        let marker = self.text[depth..].chars().next().and_then(Marker::from_char)?;
        Some((depth, marker))
    }

    /// Keeps only unmigrated descendants. Returns false if nothing in this
    /// branch is left open.
    fn retain_incomplete(&mut self) -> bool {
        if self.is_unmigrated() {
            return true;
        }
        self.children.filter_incomplete_tasks();
        !self.children.is_empty()
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)?;
        if !self.children.is_empty() {
            write!(f, "\n{}", self.children)?;
        }
        Ok(())
    }
}

/// An ordered list of sibling notes.
///
/// A parsed document is a `NoteTree` holding its top-level items. Sibling
/// order always follows document order.
///
/// # Examples
///
/// ```
/// use bujo::domain::NoteTree;
///
/// let mut tree = NoteTree::parse("- A\n  * B\n- C");
/// let mut open = tree.clone();
/// open.filter_incomplete_tasks();
/// assert_eq!(open.to_string(), "- A\n  * B");
///
/// tree.migrate_all();
/// assert_eq!(tree.to_string(), "- A\n  > B\n- C");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteTree {
    notes: Vec<Note>,
}

impl NoteTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses note text into a tree.
    pub fn parse(text: &str) -> Self {
        build_tree(parse_records(text))
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Appends a note after the existing top-level notes.
    pub fn push(&mut self, note: Note) {
        self.notes.push(note);
    }

    /// Appends `other`'s top-level notes after this tree's, in order.
    pub fn merge(&mut self, other: NoteTree) {
        self.notes.extend(other.notes);
    }

    /// Migrates every unmigrated note, parents before children.
    ///
    /// Returns the number of notes rewritten. A second application is a no-op.
    pub fn migrate_all(&mut self) -> usize {
        let mut migrated = 0;
        for note in &mut self.notes {
            if note.migrate() {
                migrated += 1;
            }
            migrated += note.children.migrate_all();
        }
        migrated
    }

    /// Drops every branch that contains no unmigrated note.
    ///
    /// Unmigrated notes are kept whole, with all their children. Other notes
    /// survive only if some descendant is unmigrated, and lose the children
    /// that are fully resolved.
    pub fn filter_incomplete_tasks(&mut self) {
        self.notes.retain_mut(Note::retain_incomplete);
    }

    /// Counts unmigrated notes at any depth.
    pub fn count_unmigrated(&self) -> usize {
        self.notes
            .iter()
            .map(|note| usize::from(note.is_unmigrated()) + note.children.count_unmigrated())
            .sum()
    }

    /// Serializes the tree as file contents, with a single trailing newline.
    pub fn to_file_contents(&self) -> String {
        format!("{}\n", self)
    }
}

impl fmt::Display for NoteTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, note) in self.notes.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", note)?;
        }
        Ok(())
    }
}

impl FromStr for NoteTree {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl FromIterator<Note> for NoteTree {
    fn from_iter<I: IntoIterator<Item = Note>>(iter: I) -> Self {
        Self {
            notes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a NoteTree {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}
