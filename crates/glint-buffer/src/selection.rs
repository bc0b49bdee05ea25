//! Text selection handling.
//!
//! ## Learning: Normalized Ranges with a Direction Tag
//!
//! A selection is stored normalized (`start <= end`) so range arithmetic
//! never has to care which way the user dragged. The direction is kept
//! beside it, which is all that's needed to recover the anchor (where the
//! drag began) and the head (where the caret is).

use serde::{Deserialize, Serialize};

/// Which end of a selection holds the caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionDirection {
    /// Zero-width selection
    #[default]
    None,
    /// Caret at `end`
    Forward,
    /// Caret at `start`
    Backward,
}

/// A selection over character offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    /// Start offset (inclusive)
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
    pub direction: SelectionDirection,
}

impl Selection {
    /// Creates a zero-width selection (caret).
    pub fn cursor(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
            direction: SelectionDirection::None,
        }
    }

    /// Creates a selection from where it was anchored to where the caret is.
    ///
    /// The direction is `None` when both are equal, `Forward` when the
    /// anchor comes first and `Backward` otherwise.
    pub fn between(anchor: usize, head: usize) -> Self {
        let direction = if anchor == head {
            SelectionDirection::None
        } else if anchor < head {
            SelectionDirection::Forward
        } else {
            SelectionDirection::Backward
        };

        Self {
            start: anchor.min(head),
            end: anchor.max(head),
            direction,
        }
    }

    /// Creates a selection from a normalized range and an explicit direction.
    ///
    /// Zero-width ranges always get `SelectionDirection::None`.
    pub fn new(start: usize, end: usize, direction: SelectionDirection) -> Self {
        let (start, end) = (start.min(end), start.max(end));
        let direction = if start == end {
            SelectionDirection::None
        } else {
            direction
        };
        Self {
            start,
            end,
            direction,
        }
    }

    /// Where the selection was started.
    pub fn anchor(&self) -> usize {
        match self.direction {
            SelectionDirection::Backward => self.end,
            _ => self.start,
        }
    }

    /// Where the caret is.
    pub fn head(&self) -> usize {
        match self.direction {
            SelectionDirection::Backward => self.start,
            _ => self.end,
        }
    }

    /// Returns true if this is a zero-width selection.
    pub fn is_cursor(&self) -> bool {
        self.start == self.end
    }

    /// Returns the number of selected characters.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Maps both ends through `f`, keeping which end is the anchor.
    pub fn map(&self, f: impl Fn(usize) -> usize) -> Self {
        Self::between(f(self.anchor()), f(self.head()))
    }

    /// Clamps both ends to `len`.
    pub fn clamp(&self, len: usize) -> Self {
        self.map(|offset| offset.min(len))
    }
}
