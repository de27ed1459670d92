//! Core types: Note, NoteTree, Marker, and the parsing pipeline

mod builder;
mod marker;
mod note;
mod parser;
mod stack;

pub use builder::build_tree;
pub use marker::Marker;
pub use note::{Note, NoteTree};
pub use parser::{NoteRecord, bullet_depth, parse_records};
pub use stack::IndentStack;
