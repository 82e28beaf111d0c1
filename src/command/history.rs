use std::collections::VecDeque;

use crate::constants::MAX_HISTORY_SIZE;

/// Bounded, linear undo/redo history over immutable snapshots.
///
/// The cursor points at the active snapshot. Pushing while the cursor is not
/// at the end drops the redo branch first; when the buffer is full the oldest
/// snapshot is evicted and the cursor moves with the active one.
#[derive(Debug, Clone)]
pub struct HistoryBuffer<T> {
    entries: VecDeque<T>,
    cursor: Option<usize>,
    capacity: usize,
}

impl<T> Default for HistoryBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> HistoryBuffer<T> {
    /// Creates an empty history holding up to `MAX_HISTORY_SIZE` snapshots
    pub fn new() -> Self {
        Self::with_capacity(MAX_HISTORY_SIZE)
    }

    /// Creates an empty history holding up to `capacity` snapshots (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            cursor: None,
            capacity,
        }
    }

    /// Records `state` as the new active snapshot.
    pub fn push(&mut self, state: T) {
        let next = match self.cursor {
            Some(cursor) => {
                // Discard the redo branch
                self.entries.truncate(cursor + 1);
                cursor + 1
            }
            None => {
                self.entries.clear();
                0
            }
        };
        self.entries.push_back(state);
        self.cursor = Some(next);

        if self.entries.len() > self.capacity {
            self.entries.pop_front();
            self.cursor = Some(next - 1);
        }
    }

    pub fn can_undo(&self) -> bool {
        matches!(self.cursor, Some(cursor) if cursor > 0)
    }

    pub fn can_redo(&self) -> bool {
        matches!(self.cursor, Some(cursor) if cursor + 1 < self.entries.len())
    }

    /// Steps back one snapshot and returns it, or `None` at the oldest entry.
    pub fn undo(&mut self) -> Option<&T> {
        let cursor = self.cursor.filter(|cursor| *cursor > 0)? - 1;
        self.cursor = Some(cursor);
        self.entries.get(cursor)
    }

    /// Steps forward one snapshot and returns it, or `None` at the newest entry.
    pub fn redo(&mut self) -> Option<&T> {
        if !self.can_redo() {
            return None;
        }
        let cursor = self.cursor? + 1;
        self.cursor = Some(cursor);
        self.entries.get(cursor)
    }

    /// The active snapshot
    pub fn current(&self) -> Option<&T> {
        self.cursor.and_then(|cursor| self.entries.get(cursor))
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_history() {
        let mut history: HistoryBuffer<u32> = HistoryBuffer::new();
        assert!(history.is_empty());
        assert_eq!(history.cursor(), None);
        assert_eq!(history.current(), None);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.undo(), None);
        assert_eq!(history.redo(), None);
    }

    #[test]
    fn test_zero_capacity_keeps_one_entry() {
        let mut history = HistoryBuffer::with_capacity(0);
        history.push(1);
        history.push(2);
        assert_eq!(history.len(), 1);
        assert_eq!(history.current(), Some(&2));
        assert!(!history.can_undo());
    }

    #[test]
    fn test_eviction_keeps_active_entry_after_undo() {
        let mut history = HistoryBuffer::with_capacity(3);
        history.push(1);
        history.push(2);
        history.push(3);
        history.undo();
        // Truncates 3, appends 4: [1, 2, 4], nothing evicted
        history.push(4);
        assert_eq!(history.iter().copied().collect::<Vec<_>>(), vec![1, 2, 4]);
        history.push(5);
        assert_eq!(history.iter().copied().collect::<Vec<_>>(), vec![2, 4, 5]);
        assert_eq!(history.cursor(), Some(2));
        assert_eq!(history.current(), Some(&5));
    }

    #[test]
    fn test_clear() {
        let mut history = HistoryBuffer::new();
        history.push("a");
        history.push("b");
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.current(), None);
        history.push("c");
        assert_eq!(history.cursor(), Some(0));
    }
}
