//! Reconstructing the note hierarchy from depth-tagged records.
//!
//! Records are kept in an index-addressed arena. A single pass assigns each
//! record a parent index using depth deltas and a stack of ancestor frames,
//! then the owned tree is assembled bottom-up.

use crate::domain::note::{Note, NoteTree};
use crate::domain::parser::NoteRecord;
use crate::domain::stack::IndentStack;

/// An ancestor on the stack. `index` is `None` for the synthetic root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    index: Option<usize>,
    depth: isize,
}

impl Frame {
    const ROOT: Frame = Frame {
        index: None,
        depth: -1,
    };

    fn record(index: usize, depth: usize) -> Self {
        Self {
            index: Some(index),
            depth: isize::try_from(depth).unwrap_or(isize::MAX),
        }
    }
}

/// Builds a tree from records in document order.
pub fn build_tree(records: Vec<NoteRecord>) -> NoteTree {
    let parents = assign_parents(&records);
    assemble(records, &parents)
}

/// Returns the parent index of every record (`None` = top level).
///
/// Equal depth makes a sibling. Greater depth descends into the previous
/// record, pushing it as a new ancestor frame. Smaller depth pops frames until
/// the top of the stack is strictly shallower than the record.
fn assign_parents(records: &[NoteRecord]) -> Vec<Option<usize>> {
    let mut stack = IndentStack::new();
    stack.push(Frame::ROOT);

    let mut parents = Vec::with_capacity(records.len());
    let mut previous: Option<Frame> = None;

    for (index, record) in records.iter().enumerate() {
        let current = Frame::record(index, record.depth);

        let parent = match previous {
            Some(prev) if current.depth < prev.depth => {
                while stack.peek().is_some_and(|top| top.depth >= current.depth) {
                    stack.pop();
                }
                stack.peek().copied()
            }
            Some(prev) if current.depth > prev.depth => {
                stack.push(prev);
                Some(prev)
            }
            // First record, or same depth as the previous one
            _ => stack.peek().copied(),
        };

        parents.push(parent.and_then(|frame| frame.index));
        previous = Some(current);
    }

    parents
}

fn assemble(records: Vec<NoteRecord>, parents: &[Option<usize>]) -> NoteTree {
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); records.len()];
    let mut top_level = Vec::new();

    for (index, parent) in parents.iter().enumerate() {
        match parent {
            Some(parent) => children[*parent].push(index),
            None => top_level.push(index),
        }
    }

    // Children always come after their parent, so walking backwards finishes
    // every subtree before it is attached.
    let mut nodes: Vec<Option<Note>> = (0..records.len()).map(|_| None).collect();
    for (index, record) in records.into_iter().enumerate().rev() {
        let child_notes: NoteTree = children[index]
            .iter()
            .filter_map(|&child| nodes[child].take())
            .collect();
        nodes[index] = Some(Note::with_children(record.depth, record.text, child_notes));
    }

    top_level
        .into_iter()
        .filter_map(|index| nodes[index].take())
        .collect()
}
