//! Per-document undo/redo history

use crate::snapshot::Snapshot;
use alloc::vec;
use alloc::vec::Vec;

/// Undo and redo stacks of document snapshots
///
/// The undo stack always holds at least the floor snapshot taken when the
/// document was created. Undo never pops the floor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    /// Maximum number of undo entries kept above the floor
    limit: Option<usize>,
}

impl History {
    /// Start a history whose floor is `floor`
    pub fn new(floor: Snapshot) -> Self {
        Self {
            undo_stack: vec![floor],
            redo_stack: Vec::new(),
            limit: None,
        }
    }

    /// Start a history that keeps at most `limit` entries above the floor
    pub fn with_limit(floor: Snapshot, limit: Option<usize>) -> Self {
        Self {
            limit,
            ..Self::new(floor)
        }
    }

    /// Record the state from just before an edit. Clears redo.
    pub fn record(&mut self, before: Snapshot) {
        self.undo_stack.push(before);
        self.redo_stack.clear();
        self.enforce_limit();
    }

    /// Step back: `current` goes onto the redo stack and the state to
    /// restore is returned. `None` when only the floor remains.
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        if self.undo_stack.len() <= 1 {
            return None;
        }

        let snapshot = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        Some(snapshot)
    }

    /// Step forward: `current` goes back onto the undo stack and the
    /// state to restore is returned. `None` when redo is empty.
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let snapshot = self.redo_stack.pop()?;
        self.undo_stack.push(current);
        self.enforce_limit();
        Some(snapshot)
    }

    pub fn can_undo(&self) -> bool {
        self.undo_stack.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Undo stack depth, floor included
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    fn enforce_limit(&mut self) {
        if let Some(limit) = self.limit {
            // Index 0 is the floor
            while self.undo_stack.len() > limit + 1 {
                self.undo_stack.remove(1);
            }
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Snapshot::empty())
    }
}
