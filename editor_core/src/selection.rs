//! Cursor clamping and selection ranges

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// Half-open selected range `[start, end)` in character offsets
///
/// A constructed selection always satisfies `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// Build a selection from a raw request against a buffer of `len` chars.
    ///
    /// Returns `None` when the request is ignored: `left >= right`,
    /// `left >= len`, or a range that is empty once clamped. Otherwise
    /// `left` is raised to 0 and `right` lowered to `len`.
    pub fn clamped(left: isize, right: isize, len: usize) -> Option<Self> {
        let len_signed = isize::try_from(len).unwrap_or(isize::MAX);
        if left >= right || left >= len_signed {
            return None;
        }

        let start = left.max(0) as usize;
        let end = right.min(len_signed);
        if end <= 0 || end as usize <= start {
            return None;
        }

        Some(Self {
            start,
            end: end as usize,
        })
    }

    /// Number of selected characters
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Clamp a requested cursor position into `[0, len]`
pub fn clamp_cursor(pos: isize, len: usize) -> usize {
    if pos < 0 {
        0
    } else {
        (pos as usize).min(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_cursor() {
        assert_eq!(clamp_cursor(-5, 10), 0);
        assert_eq!(clamp_cursor(4, 10), 4);
        assert_eq!(clamp_cursor(10, 10), 10);
        assert_eq!(clamp_cursor(100, 10), 10);
        assert_eq!(clamp_cursor(2, 0), 0);
    }

    #[test]
    fn test_selection_within_bounds() {
        let sel = Selection::clamped(6, 11, 20).unwrap();
        assert_eq!(sel, Selection { start: 6, end: 11 });
        assert_eq!(sel.len(), 5);
    }

    #[test]
    fn test_selection_right_truncated() {
        let sel = Selection::clamped(26, 60, 50).unwrap();
        assert_eq!(sel, Selection { start: 26, end: 50 });
    }

    #[test]
    fn test_selection_left_raised() {
        let sel = Selection::clamped(-1, 2, 10).unwrap();
        assert_eq!(sel, Selection { start: 0, end: 2 });
    }

    #[test]
    fn test_selection_rejected() {
        assert_eq!(Selection::clamped(3, 3, 10), None);
        assert_eq!(Selection::clamped(5, 2, 10), None);
        assert_eq!(Selection::clamped(10, 12, 10), None);
        assert_eq!(Selection::clamped(10, 20, 0), None);
    }

    #[test]
    fn test_selection_empty_after_clamp_rejected() {
        assert_eq!(Selection::clamped(-5, -1, 10), None);
        assert_eq!(Selection::clamped(-3, 0, 10), None);
        assert_eq!(Selection::clamped(-1, 4, 0), None);
    }
}
