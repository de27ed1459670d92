//! Bullet markers that identify a line as a note item.

use std::fmt;

/// The leading symbol of a bullet line, encoding the item's state.
///
/// Only [`Marker::Task`] (`*`) counts as unmigrated; migrating a note rewrites
/// it to [`Marker::Migrated`] (`>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// `?` an open question
    Question,
    /// `-` a plain note
    Note,
    /// `*` an open task
    Task,
    /// `x` a completed task
    Done,
    /// `~` a cancelled task
    Cancelled,
    /// `>` a task carried forward
    Migrated,
    /// `<` a task scheduled back to the future log
    Scheduled,
}

impl Marker {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '?' => Some(Marker::Question),
            '-' => Some(Marker::Note),
            '*' => Some(Marker::Task),
            'x' => Some(Marker::Done),
            '~' => Some(Marker::Cancelled),
            '>' => Some(Marker::Migrated),
            '<' => Some(Marker::Scheduled),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Marker::Question => '?',
            Marker::Note => '-',
            Marker::Task => '*',
            Marker::Done => 'x',
            Marker::Cancelled => '~',
            Marker::Migrated => '>',
            Marker::Scheduled => '<',
        }
    }

    /// Returns true for the open-task marker.
    pub fn is_unmigrated(self) -> bool {
        self == Marker::Task
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
