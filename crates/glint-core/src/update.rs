//! Update planning for the rendered line list.
//!
//! The rendered output is a list of lines, one per source line. After an
//! edit only a few of them are stale, so instead of rebuilding the list the
//! controller emits a short plan of [`UpdateOp`]s.
//!
//! ## Planning Policy
//!
//! | line delta | plan                                                    |
//! |------------|---------------------------------------------------------|
//! | `0`        | re-render the caret line                                |
//! | `+k`       | create `k` lines above the caret, re-render around them |
//! | `< 0`      | rebuild everything                                      |
//!
//! A join can shift arbitrarily many line boundaries, so shrinking edits
//! always rebuild. Every minimal plan is checked against the old and new
//! text before it's used; a plan that would leave a stale line behind is
//! replaced by [`UpdateOp::FullUpdate`].

use glint_buffer::SourceBuffer;
use serde::{Deserialize, Serialize};

/// One mutation of the rendered line list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum UpdateOp {
    /// Discard and rebuild every line
    FullUpdate,
    /// Re-render `count` existing lines from `start`
    LineUpdate { start: usize, count: usize },
    /// Insert `count` empty lines at `start`
    CreateLine { start: usize, count: usize },
    /// Remove `count` lines from `start`
    DeleteLine { start: usize, count: usize },
}

/// Plans the update for a free-typing edit from `old` to `new`.
///
/// `caret_line` is the line holding the caret after the edit.
pub fn plan_text_change(old: &SourceBuffer, new: &SourceBuffer, caret_line: usize) -> Vec<UpdateOp> {
    let old_lines = old.len_lines();
    let new_lines = new.len_lines();

    if caret_line >= new_lines || new_lines < old_lines {
        return vec![UpdateOp::FullUpdate];
    }

    let added = new_lines - old_lines;
    if added > caret_line {
        return vec![UpdateOp::FullUpdate];
    }

    // Window of new lines that get re-rendered.
    let first = if added == 0 {
        caret_line
    } else {
        (caret_line - added).saturating_sub(1)
    };
    let after = new_lines - caret_line - 1;

    let unchanged_before = old.lines_equal(0, new, 0, first);
    let unchanged_after = old.lines_equal(caret_line + 1 - added, new, caret_line + 1, after);
    if !(unchanged_before && unchanged_after) {
        tracing::warn!(
            caret_line,
            added,
            "edit touched lines outside the update window; falling back to full update"
        );
        return vec![UpdateOp::FullUpdate];
    }

    let mut ops = Vec::with_capacity(2);
    if added > 0 {
        ops.push(UpdateOp::CreateLine {
            start: caret_line - added,
            count: added,
        });
    }
    ops.push(UpdateOp::LineUpdate {
        start: first,
        count: caret_line - first + 1,
    });

    tracing::debug!(?ops, "planned text change");
    ops
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(old: &str, new: &str, caret_line: usize) -> Vec<UpdateOp> {
        plan_text_change(&SourceBuffer::from(old), &SourceBuffer::from(new), caret_line)
    }

    #[test]
    fn test_same_line_count_updates_caret_line() {
        assert_eq!(
            plan("int x;\nint y;", "int x;\nint yz;", 1),
            vec![UpdateOp::LineUpdate { start: 1, count: 1 }]
        );
    }

    #[test]
    fn test_newline_creates_line() {
        // Enter at the end of line 0.
        assert_eq!(
            plan("a\nb", "a\n\nb", 1),
            vec![
                UpdateOp::CreateLine { start: 0, count: 1 },
                UpdateOp::LineUpdate { start: 0, count: 2 },
            ]
        );
    }

    #[test]
    fn test_split_in_middle_rerenders_neighbours() {
        assert_eq!(
            plan("x\nint main() {}\ny", "x\nint main()\n {}\ny", 2),
            vec![
                UpdateOp::CreateLine { start: 1, count: 1 },
                UpdateOp::LineUpdate { start: 0, count: 3 },
            ]
        );
    }

    #[test]
    fn test_paste_multiple_lines() {
        assert_eq!(
            plan("a\nb\nc", "a\nb1\n2\n3\nc", 3),
            vec![
                UpdateOp::CreateLine { start: 1, count: 2 },
                UpdateOp::LineUpdate { start: 0, count: 4 },
            ]
        );
    }

    #[test]
    fn test_removed_lines_rebuild() {
        assert_eq!(plan("a\nb", "ab", 0), vec![UpdateOp::FullUpdate]);
    }

    #[test]
    fn test_edit_outside_window_rebuilds() {
        // Same line count but line 0 changed while the caret sits on line 1.
        assert_eq!(plan("a\nb", "x\nb", 1), vec![UpdateOp::FullUpdate]);
        // A multi-line change that the caret window can't cover.
        assert_eq!(plan("a\nb\nc\nd", "q\nb\nc\n\nd", 3), vec![UpdateOp::FullUpdate]);
    }

    #[test]
    fn test_caret_above_inserted_lines_rebuilds() {
        assert_eq!(plan("a", "a\n\n", 1), vec![UpdateOp::FullUpdate]);
    }

    #[test]
    fn test_caret_past_end_rebuilds() {
        assert_eq!(plan("a", "b", 4), vec![UpdateOp::FullUpdate]);
    }
}
