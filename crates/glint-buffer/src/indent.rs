//! Indentation edits.
//!
//! Tab never inserts a literal `\t`; it inserts or removes one
//! [`IndentUnit`]. Multi-line edits return a [`ShiftMap`] so callers can move
//! offsets computed against the old text into the new one.

use std::ops::RangeInclusive;

use crate::{BufferResult, SourceBuffer};

/// One level of indentation.
///
/// Only built through [`IndentUnit::spaces`], so it is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentUnit(String);

impl IndentUnit {
    /// A unit of `width` spaces (at least one).
    pub fn spaces(width: usize) -> Self {
        Self(" ".repeat(width.max(1)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Width in characters.
    pub fn width(&self) -> usize {
        self.0.chars().count()
    }
}

impl Default for IndentUnit {
    fn default() -> Self {
        Self::spaces(2)
    }
}

/// Text inserted (positive) or removed (negative) at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineShift {
    /// Line start in the old text
    pub line_start: usize,
    pub delta: isize,
}

/// Maps offsets in the text before a multi-line edit to the text after it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShiftMap {
    shifts: Vec<LineShift>,
}

impl ShiftMap {
    pub fn shifts(&self) -> &[LineShift] {
        &self.shifts
    }

    /// Net change in length.
    pub fn total(&self) -> isize {
        self.shifts.iter().map(|s| s.delta).sum()
    }

    /// Maps an old offset into the new text.
    ///
    /// An offset sitting exactly at a line start stays at that line start.
    /// An offset inside removed indentation collapses to the line start.
    pub fn map(&self, offset: usize) -> usize {
        let mut mapped = offset as isize;
        for shift in &self.shifts {
            let start = shift.line_start;
            if shift.delta >= 0 {
                if offset > start {
                    mapped += shift.delta;
                }
            } else {
                let removed = shift.delta.unsigned_abs();
                if offset >= start + removed {
                    mapped += shift.delta;
                } else if offset > start {
                    mapped -= (offset - start) as isize;
                }
            }
        }
        mapped.max(0) as usize
    }
}

impl SourceBuffer {
    /// Inserts one unit at `caret`, returning the new caret.
    pub fn indent_at(&mut self, caret: usize, unit: &IndentUnit) -> BufferResult<usize> {
        self.insert(caret, unit.as_str())?;
        Ok(caret + unit.width())
    }

    /// Removes one unit ending at `caret` if there is one there.
    ///
    /// Returns how many characters were removed (zero or the unit width).
    pub fn outdent_before(&mut self, caret: usize, unit: &IndentUnit) -> BufferResult<usize> {
        if !self.ends_with_at(caret, unit.as_str()) {
            return Ok(0);
        }
        let width = unit.width();
        self.remove(caret - width..caret)?;
        Ok(width)
    }

    /// Indents, or with `outdent` un-indents, every line in `lines`.
    ///
    /// Outdenting a line that does not start with a full unit leaves it alone.
    pub fn shift_lines(
        &mut self,
        lines: RangeInclusive<usize>,
        unit: &IndentUnit,
        outdent: bool,
    ) -> BufferResult<ShiftMap> {
        let mut shifts = Vec::new();
        for line in lines {
            let line_start = self.line_to_char(line)?;
            if !outdent {
                shifts.push(LineShift {
                    line_start,
                    delta: unit.width() as isize,
                });
            } else if self.starts_with_at(line_start, unit.as_str()) {
                shifts.push(LineShift {
                    line_start,
                    delta: -(unit.width() as isize),
                });
            }
        }

        // Apply bottom-up so the recorded starts stay valid.
        for shift in shifts.iter().rev() {
            if shift.delta > 0 {
                self.insert(shift.line_start, unit.as_str())?;
            } else {
                self.remove(shift.line_start..shift.line_start + unit.width())?;
            }
        }

        Ok(ShiftMap { shifts })
    }
}
