//! Selection model - cursor position and selected unit range

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A selection in a rich-text buffer
///
/// Both ends are unit boundaries in `[0, len]`. The anchor is where the
/// selection started and the head is where the caret is. When
/// anchor == head the selection is collapsed (just a caret).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub anchor: usize,
    pub head: usize,
}

impl Selection {
    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// Create a collapsed selection (caret only)
    pub fn collapsed(position: usize) -> Self {
        Self {
            anchor: position,
            head: position,
        }
    }

    /// Build a selection from possibly out-of-range signed indices,
    /// clamping both ends to `[0, len]`
    pub fn clamped(anchor: isize, head: isize, len: usize) -> Self {
        let clamp = |i: isize| -> usize { usize::try_from(i).unwrap_or(0).min(len) };
        Self {
            anchor: clamp(anchor),
            head: clamp(head),
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.head
    }

    /// Whether the anchor precedes the head
    pub fn is_forward(&self) -> bool {
        self.anchor <= self.head
    }

    pub fn start(&self) -> usize {
        self.anchor.min(self.head)
    }

    pub fn end(&self) -> usize {
        self.anchor.max(self.head)
    }

    /// The selected unit range
    pub fn range(&self) -> Range<usize> {
        self.start()..self.end()
    }

    /// Move the head, extending the selection
    pub fn extend_to(&self, head: usize) -> Self {
        Self {
            anchor: self.anchor,
            head,
        }
    }

    /// Clamp both ends to a buffer of `len` units
    pub fn clamp_to(&self, len: usize) -> Self {
        Self {
            anchor: self.anchor.min(len),
            head: self.head.min(len),
        }
    }
}
