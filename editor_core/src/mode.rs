//! Selection modes

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// Which target text-mutating operations act on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub enum SelectionMode {
    /// Edits act at the cursor
    Inactive,
    /// Edits replace or remove the selected range
    Active,
}

impl SelectionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionMode::Inactive => "CURSOR",
            SelectionMode::Active => "SELECTION",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, SelectionMode::Active)
    }
}
