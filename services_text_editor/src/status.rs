//! Serializable editor status for UI hosts

use editor_core::{Selection, SelectionMode};
use serde::{Deserialize, Serialize};

/// Complete observable state of the active document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorStatus {
    pub document: String,
    pub content: String,
    pub cursor: usize,
    pub selection: Option<Selection>,
    pub mode: SelectionMode,
    pub clipboard: String,
    pub undo_depth: usize,
    pub redo_depth: usize,
}

impl EditorStatus {
    /// One-line summary, e.g. `untitled [CURSOR] 5 chars @3`
    pub fn summary(&self) -> String {
        let mut line = format!(
            "{} [{}] {} chars @{}",
            self.document,
            self.mode.as_str(),
            self.content.chars().count(),
            self.cursor
        );
        if let Some(sel) = self.selection {
            line.push_str(&format!(" sel {}..{}", sel.start, sel.end));
        }
        line
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status() -> EditorStatus {
        EditorStatus {
            document: "untitled".into(),
            content: "Lorem".into(),
            cursor: 3,
            selection: None,
            mode: SelectionMode::Inactive,
            clipboard: String::new(),
            undo_depth: 2,
            redo_depth: 0,
        }
    }

    #[test]
    fn test_summary() {
        assert_eq!(status().summary(), "untitled [CURSOR] 5 chars @3");

        let selected = EditorStatus {
            selection: Some(Selection { start: 1, end: 4 }),
            mode: SelectionMode::Active,
            ..status()
        };
        assert_eq!(selected.summary(), "untitled [SELECTION] 5 chars @3 sel 1..4");
    }

    #[test]
    fn test_json_round_trip() {
        let original = status();
        let json = original.to_json().unwrap();
        let parsed: EditorStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }
}
