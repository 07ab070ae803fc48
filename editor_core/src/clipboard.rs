//! Clipboard holding the last cut text

use alloc::string::String;

/// Single-slot clipboard
///
/// Hosts keep one clipboard for all documents; it is never part of a
/// document's history.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Clipboard {
    contents: String,
}

impl Clipboard {
    pub fn new() -> Self {
        Self {
            contents: String::new(),
        }
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Overwrite the clipboard
    pub fn set(&mut self, text: String) {
        self.contents = text;
    }

    pub fn clear(&mut self) {
        self.contents.clear();
    }
}
