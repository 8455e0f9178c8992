use std::{collections::VecDeque, num::NonZero};

/// A bounded linear history with a cursor.
///
/// The entry under the cursor is the current state. Pushing discards every
/// entry after the cursor, and once the stack is full the oldest entry is
/// dropped.
#[derive(Debug, Clone)]
pub(crate) struct UndoRedoStack<T> {
    stack: VecDeque<T>,
    capacity: NonZero<usize>,
    cursor: usize,
}

impl<T> UndoRedoStack<T> {
    #[must_use]
    pub(crate) fn new(capacity: NonZero<usize>) -> Self {
        Self {
            stack: VecDeque::new(),
            capacity,
            cursor: 0,
        }
    }

    #[must_use]
    pub(crate) fn capacity(&self) -> NonZero<usize> {
        self.capacity
    }

    #[must_use]
    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    pub(crate) fn push(&mut self, item: T) {
        if self.stack.is_empty() {
            self.stack.push_back(item);
            self.cursor = 0;
            return;
        }

        self.stack.truncate(self.cursor + 1);
        if self.stack.len() == self.capacity.get() {
            self.stack.pop_front();
        }
        self.stack.push_back(item);
        self.cursor = self.stack.len() - 1;
    }

    #[must_use]
    pub(crate) fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub(crate) fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.cursor -= 1;
        true
    }

    #[must_use]
    pub(crate) fn can_redo(&self) -> bool {
        self.cursor + 1 < self.stack.len()
    }

    pub(crate) fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Drops every entry and starts over from `item`.
    pub(crate) fn reset(&mut self, item: T) {
        self.stack.clear();
        self.stack.push_back(item);
        self.cursor = 0;
    }

    #[must_use]
    pub(crate) fn current(&self) -> Option<&T> {
        self.stack.get(self.cursor)
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use super::UndoRedoStack;

    fn stack_of(capacity: usize, items: &[char]) -> UndoRedoStack<char> {
        let mut stack = UndoRedoStack::new(NonZero::new(capacity).unwrap());
        for item in items {
            stack.push(*item);
        }
        stack
    }

    #[test]
    fn test_undo_and_redo_walk_the_line() {
        let mut stack = stack_of(10, &['a', 'b', 'c']);
        assert_eq!(stack.current(), Some(&'c'));
        assert!(stack.undo());
        assert!(stack.undo());
        assert_eq!(stack.current(), Some(&'a'));
        assert!(!stack.undo());
        assert!(stack.redo());
        assert!(stack.redo());
        assert_eq!(stack.current(), Some(&'c'));
        assert!(!stack.redo());
    }

    #[test]
    fn test_push_discards_redo_branch() {
        let mut stack = stack_of(10, &['a', 'b', 'c']);
        assert!(stack.undo());
        stack.push('d');
        assert!(!stack.can_redo());
        assert_eq!(stack.cursor(), 2);
        assert!(stack.undo());
        assert_eq!(stack.current(), Some(&'b'));
    }

    #[test]
    fn test_full_stack_drops_oldest() {
        let mut stack = stack_of(3, &['a', 'b', 'c', 'd']);
        assert_eq!(stack.capacity().get(), 3);
        assert_eq!(stack.cursor(), 2);
        assert!(stack.undo());
        assert!(stack.undo());
        assert_eq!(stack.current(), Some(&'b'));
        assert!(!stack.undo());
    }

    #[test]
    fn test_empty_and_reset() {
        let mut stack = stack_of(2, &[]);
        assert_eq!(stack.current(), None);
        assert!(!stack.undo());
        assert!(!stack.redo());

        stack.push('a');
        stack.push('b');
        stack.reset('z');
        assert_eq!(stack.current(), Some(&'z'));
        assert!(!stack.can_undo());
        assert!(!stack.can_redo());
    }
}
