use serde::{Deserialize, Serialize};

use crate::core::models::PuzzleState;

/// Linear undo/redo log of owned puzzle snapshots.
///
/// Entries are whole-value deep copies; the live `PuzzleState` never
/// aliases an entry. The cursor identifies the active snapshot and always
/// satisfies `cursor < len()` while the log is non-empty. Recording while
/// the cursor sits before the newest entry discards the redo branch, so the
/// log stays a line, not a tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryLog {
    entries: Vec<PuzzleState>,
    cursor: usize,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the active snapshot, or `None` while the log is empty.
    pub fn cursor(&self) -> Option<usize> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.cursor)
        }
    }

    /// The active snapshot, if any.
    pub fn current(&self) -> Option<&PuzzleState> {
        self.entries.get(self.cursor)
    }

    /// Deep-copies `state` as the new newest entry, discarding anything
    /// after the cursor first.
    pub fn record(&mut self, state: &PuzzleState) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(state.clone());
        self.cursor = self.entries.len() - 1;
    }

    /// Steps the cursor back and returns the now-active snapshot, or `None`
    /// when already at the oldest entry.
    pub fn undo(&mut self) -> Option<&PuzzleState> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor)
    }

    /// Steps the cursor forward and returns the now-active snapshot, or
    /// `None` when already at the newest entry.
    pub fn redo(&mut self) -> Option<&PuzzleState> {
        if self.entries.is_empty() || self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor)
    }

    /// Clears the log and reseeds it with `initial` as entry 0.
    pub fn reset(&mut self, initial: &PuzzleState) {
        self.entries.clear();
        self.cursor = 0;
        self.entries.push(initial.clone());
    }

    pub(crate) fn entries(&self) -> &[PuzzleState] {
        &self.entries
    }

    pub(crate) fn is_consistent(&self) -> bool {
        self.entries.is_empty() || self.cursor < self.entries.len()
    }
}
