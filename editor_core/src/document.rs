//! Document state machine
//!
//! A document owns its buffer, cursor, optional selection and history.
//! Every text-mutating operation dispatches on the selection mode and
//! records the pre-edit state before committing.

use alloc::string::String;

use crate::{
    buffer::TextBuffer,
    history::History,
    mode::SelectionMode,
    selection::{clamp_cursor, Selection},
    snapshot::Snapshot,
};

/// A single editable document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    buffer: TextBuffer,
    cursor: usize,
    selection: Option<Selection>,
    history: History,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::with_history_limit(None)
    }

    /// Create an empty document whose history keeps at most `limit`
    /// undo entries
    pub fn with_history_limit(limit: Option<usize>) -> Self {
        Self {
            buffer: TextBuffer::new(),
            cursor: 0,
            selection: None,
            history: History::with_limit(Snapshot::empty(), limit),
        }
    }

    // Public accessors for hosts/testing
    pub fn content(&self) -> &str {
        self.buffer.as_str()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn mode(&self) -> SelectionMode {
        if self.selection.is_some() {
            SelectionMode::Active
        } else {
            SelectionMode::Inactive
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Text covered by the active selection
    pub fn selected_text(&self) -> Option<String> {
        let sel = self.selection?;
        self.buffer.slice(sel.start, sel.end)
    }

    /// Capture the current state by value
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            content: String::from(self.buffer.as_str()),
            cursor: self.cursor,
            selection: self.selection,
        }
    }

    // Editing

    /// Insert at the cursor, or overwrite the selection
    pub fn append(&mut self, value: &str) {
        self.save_undo_snapshot();
        let inserted = value.chars().count();

        match self.selection.take() {
            Some(sel) => {
                self.buffer.replace_range(sel.start, sel.end, value);
                self.cursor = sel.start + inserted;
            }
            None => {
                self.buffer.insert_at(self.cursor, value);
                self.cursor += inserted;
            }
        }
    }

    /// Remove the selection, or the character at the cursor
    ///
    /// History is recorded even when nothing is removed.
    pub fn delete(&mut self) {
        self.save_undo_snapshot();

        match self.selection.take() {
            Some(sel) => {
                self.buffer.replace_range(sel.start, sel.end, "");
                self.cursor = sel.start;
            }
            None => {
                self.buffer.delete_char_at(self.cursor);
            }
        }
    }

    // Navigation

    /// Move the cursor, clamped to the buffer, and drop any selection
    pub fn move_to(&mut self, pos: isize) {
        self.cursor = clamp_cursor(pos, self.buffer.len());
        self.selection = None;
    }

    /// Select `[left, right)`; ignored requests leave state untouched.
    /// Returns whether the selection was applied.
    pub fn select(&mut self, left: isize, right: isize) -> bool {
        match Selection::clamped(left, right, self.buffer.len()) {
            Some(sel) => {
                self.selection = Some(sel);
                true
            }
            None => false,
        }
    }

    // Undo/redo implementation

    fn save_undo_snapshot(&mut self) {
        let snapshot = self.snapshot();
        self.history.record(snapshot);
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.buffer = TextBuffer::from_string(snapshot.content);
        self.cursor = snapshot.cursor;
        self.selection = snapshot.selection;
    }

    pub fn undo(&mut self) -> bool {
        let current = self.snapshot();
        match self.history.undo(current) {
            Some(snapshot) => {
                self.restore(snapshot);
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        let current = self.snapshot();
        match self.history.redo(current) {
            Some(snapshot) => {
                self.restore(snapshot);
                true
            }
            None => false,
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
