//! # Glint Buffer
//!
//! The text side of the editor: a rope-backed [`SourceBuffer`], directional
//! [`Selection`]s, and indentation edits that report how offsets moved.
//!
//! ## Key Concepts
//!
//! ### Character Offsets
//! - Everything in this crate is addressed by character index
//! - Selections reported by a text widget can be used as-is
//!
//! ### Ownership
//! - `SourceBuffer` owns its rope; `clone()` is cheap and shares chunks
//! - Mutations require `&mut self`, so a planned edit can work on a clone
//!   while the original stays untouched

mod buffer;
mod indent;
mod selection;

pub use buffer::SourceBuffer;
pub use indent::{IndentUnit, LineShift, ShiftMap};
pub use selection::{Selection, SelectionDirection};

/// Result type for buffer operations
pub type BufferResult<T> = Result<T, BufferError>;

/// Errors that can occur during buffer operations
#[derive(Debug, thiserror::Error)]
pub enum BufferError {
    #[error("Line {0} is out of bounds")]
    LineOutOfBounds(usize),

    #[error("Invalid character index: {0}")]
    InvalidCharIndex(usize),

    #[error("Invalid range: {start}..{end}")]
    InvalidRange { start: usize, end: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
