//! Last-in-first-out stack used to track ancestor frames while building a tree.

/// A typed LIFO stack.
///
/// Querying an empty stack returns `None` rather than failing; callers treat an
/// empty stack as a valid transient state.
#[derive(Debug, Clone)]
pub struct IndentStack<T> {
    items: Vec<T>,
}

impl<T> IndentStack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Pushes an item onto the top of the stack.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the top item, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns the top item without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for IndentStack<T> {
    fn default() -> Self {
        Self::new()
    }
}
