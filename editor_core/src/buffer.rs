//! Text buffer addressed by character offset

use alloc::string::String;

/// Text buffer with flat storage
///
/// Every offset accepted or returned by the buffer counts characters
/// (Unicode scalar values), not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextBuffer {
    text: String,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    pub fn from_string(content: String) -> Self {
        Self { text: content }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte index of the character at `offset`, or the end of the text
    fn byte_index(&self, offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(offset)
            .map(|(idx, _)| idx)
            .unwrap_or(self.text.len())
    }

    /// Insert text at a character offset
    pub fn insert_at(&mut self, offset: usize, text: &str) -> bool {
        if offset > self.len() {
            return false;
        }

        let idx = self.byte_index(offset);
        self.text.insert_str(idx, text);
        true
    }

    /// Replace `[start, end)` with `text`
    pub fn replace_range(&mut self, start: usize, end: usize, text: &str) -> bool {
        if start > end || end > self.len() {
            return false;
        }

        let start_idx = self.byte_index(start);
        let end_idx = self.byte_index(end);
        self.text.replace_range(start_idx..end_idx, text);
        true
    }

    /// Delete the character at `offset`
    pub fn delete_char_at(&mut self, offset: usize) -> bool {
        if offset >= self.len() {
            return false;
        }

        let idx = self.byte_index(offset);
        self.text.remove(idx);
        true
    }

    /// Copy of the characters in `[start, end)`
    pub fn slice(&self, start: usize, end: usize) -> Option<String> {
        if start > end || end > self.len() {
            return None;
        }

        Some(self.text.chars().skip(start).take(end - start).collect())
    }
}
