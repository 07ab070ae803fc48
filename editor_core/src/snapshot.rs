//! Document snapshots for undo/redo

use crate::selection::Selection;
use alloc::string::String;

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// Immutable capture of a document's editable state
///
/// Owns a copy of the content; later edits to the live buffer never
/// reach a stored snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct Snapshot {
    pub content: String,
    pub cursor: usize,
    pub selection: Option<Selection>,
}

impl Snapshot {
    /// Snapshot of a fresh, empty document
    pub fn empty() -> Self {
        Self {
            content: String::new(),
            cursor: 0,
            selection: None,
        }
    }

    /// Compute a deterministic hash of the snapshot state
    /// This is used for fast comparison in tests
    #[cfg(test)]
    pub fn fingerprint(&self) -> u64 {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();

        hasher.update(self.content.as_bytes());
        hasher.update([0u8]);
        hasher.update(self.cursor.to_le_bytes());

        match self.selection {
            Some(sel) => {
                hasher.update([1u8]);
                hasher.update(sel.start.to_le_bytes());
                hasher.update(sel.end.to_le_bytes());
            }
            None => hasher.update([0u8]),
        }

        let result = hasher.finalize();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&result[..8]);
        u64::from_le_bytes(bytes)
    }
}
