//! Source text storage backed by a rope.
//!
//! ## Why Rope?
//!
//! The render controller asks for individual lines far more often than for
//! the whole text, and it keeps the previous text around while it plans an
//! update. A rope answers "give me line 412" in O(log n) and clones in O(1)
//! because its chunks are shared, so holding old and new versions side by
//! side costs almost nothing.
//!
//! ## Line Model
//!
//! Only `\n` separates lines. An empty buffer has one line, and a trailing
//! `\n` creates an empty last line, exactly like splitting the text on `\n`.

use ropey::Rope;
use std::borrow::Cow;
use std::ops::Range;
use std::path::Path;

use crate::{BufferError, BufferResult};

/// The text being edited.
///
/// All offsets are character indices, matching the coordinate space text
/// input widgets report selections in.
#[derive(Debug, Clone, Default)]
pub struct SourceBuffer {
    rope: Rope,
}

impl SourceBuffer {
    /// Creates an empty buffer.
    ///
    /// # Example
    /// ```
    /// use glint_buffer::SourceBuffer;
    ///
    /// let buffer = SourceBuffer::new();
    /// assert!(buffer.is_empty());
    /// assert_eq!(buffer.len_lines(), 1);
    /// ```
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Loads a buffer from a file.
    pub fn from_file(path: impl AsRef<Path>) -> BufferResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(Self::from(content.as_str()))
    }

    // ==================== Text Access ====================

    /// Returns the entire text.
    #[inline]
    pub fn text(&self) -> Cow<'_, str> {
        self.rope.slice(..).into()
    }

    /// Returns a line without its trailing `\n`.
    pub fn line(&self, line_idx: usize) -> BufferResult<Cow<'_, str>> {
        if line_idx >= self.len_lines() {
            return Err(BufferError::LineOutOfBounds(line_idx));
        }
        let line = self.rope.line(line_idx);
        let len = line.len_chars();
        let content = if len > 0 && line.char(len - 1) == '\n' {
            line.slice(..len - 1)
        } else {
            line
        };
        Ok(content.into())
    }

    /// Iterates over all lines without their trailing `\n`.
    pub fn lines(&self) -> impl Iterator<Item = Cow<'_, str>> + '_ {
        (0..self.len_lines()).filter_map(move |idx| self.line(idx).ok())
    }

    /// Returns a slice of text by character range.
    pub fn slice(&self, range: Range<usize>) -> BufferResult<Cow<'_, str>> {
        self.check_range(&range)?;
        Ok(self.rope.slice(range).into())
    }

    // ==================== Measurements ====================

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Returns the number of characters.
    #[inline]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Returns the number of lines (`\n` count plus one).
    #[inline]
    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    /// Returns the line containing a character index.
    ///
    /// An index equal to the length maps to the last line.
    pub fn char_to_line(&self, char_idx: usize) -> BufferResult<usize> {
        if char_idx > self.len_chars() {
            return Err(BufferError::InvalidCharIndex(char_idx));
        }
        Ok(self.rope.char_to_line(char_idx))
    }

    /// Returns the character index where a line starts.
    pub fn line_to_char(&self, line_idx: usize) -> BufferResult<usize> {
        if line_idx >= self.len_lines() {
            return Err(BufferError::LineOutOfBounds(line_idx));
        }
        Ok(self.rope.line_to_char(line_idx))
    }

    /// Returns true if the text ending at `char_idx` ends with `pattern`.
    pub fn ends_with_at(&self, char_idx: usize, pattern: &str) -> bool {
        let len = pattern.chars().count();
        char_idx <= self.len_chars()
            && char_idx >= len
            && self.rope.slice(char_idx - len..char_idx) == pattern
    }

    /// Returns true if the text starting at `char_idx` starts with `pattern`.
    pub fn starts_with_at(&self, char_idx: usize, pattern: &str) -> bool {
        let end = char_idx + pattern.chars().count();
        end <= self.len_chars() && self.rope.slice(char_idx..end) == pattern
    }

    /// Returns true if `count` lines starting at `first` equal the `count`
    /// lines of `other` starting at `other_first`.
    ///
    /// Ranges reaching past either buffer's last line compare unequal.
    pub fn lines_equal(
        &self,
        first: usize,
        other: &SourceBuffer,
        other_first: usize,
        count: usize,
    ) -> bool {
        if count == 0 {
            return true;
        }
        match (self.lines_span(first, count), other.lines_span(other_first, count)) {
            (Some(ours), Some(theirs)) => self.rope.slice(ours) == other.rope.slice(theirs),
            _ => false,
        }
    }

    /// Character span of `count` lines joined by their `\n`s, excluding the
    /// newline after the last one.
    fn lines_span(&self, first: usize, count: usize) -> Option<Range<usize>> {
        let end_line = first.checked_add(count)?;
        if end_line > self.len_lines() {
            return None;
        }
        let start = self.rope.line_to_char(first);
        let end = if end_line == self.len_lines() {
            self.len_chars()
        } else {
            self.rope.line_to_char(end_line) - 1
        };
        Some(start..end)
    }

    // ==================== Mutations ====================

    /// Inserts text at a character index.
    pub fn insert(&mut self, char_idx: usize, text: &str) -> BufferResult<()> {
        if char_idx > self.len_chars() {
            return Err(BufferError::InvalidCharIndex(char_idx));
        }
        self.rope.insert(char_idx, text);
        Ok(())
    }

    /// Removes a character range, returning the removed text.
    pub fn remove(&mut self, range: Range<usize>) -> BufferResult<String> {
        self.check_range(&range)?;
        let removed: String = self.rope.slice(range.clone()).into();
        self.rope.remove(range);
        Ok(removed)
    }

    /// Replaces the whole text.
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
    }

    fn check_range(&self, range: &Range<usize>) -> BufferResult<()> {
        if range.start > range.end || range.end > self.len_chars() {
            return Err(BufferError::InvalidRange {
                start: range.start,
                end: range.end,
            });
        }
        Ok(())
    }
}

impl From<&str> for SourceBuffer {
    fn from(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
        }
    }
}

impl From<String> for SourceBuffer {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl PartialEq<str> for SourceBuffer {
    fn eq(&self, other: &str) -> bool {
        self.rope == other
    }
}
