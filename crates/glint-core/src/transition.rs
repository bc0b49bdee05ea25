//! Input handling as a pure state transition.
//!
//! ## Learning: Pure Functions at the Core
//!
//! A text-input widget reports what happened (new text, a key press, the
//! selection it ended up with). [`transition`] turns the current source plus
//! one [`Event`] into the next source, the [`UpdateOp`]s that bring the
//! rendered lines up to date, and the selection to restore. It touches no
//! shared state, so every rule below is testable with plain values; the
//! [`Editor`](crate::Editor) is the thin layer that applies the result.

use glint_buffer::{IndentUnit, Selection, SourceBuffer};
use serde::{Deserialize, Serialize};

use crate::update::{plan_text_change, UpdateOp};
use crate::CoreResult;

/// Keys the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Key {
    Tab,
    /// Anything else; handled by the widget's own text input
    Other,
}

/// Something the host widget reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The widget's text changed; `selection` is where it left the caret
    TextChanged { text: String, selection: Selection },
    /// A key went down before the widget handled it
    KeyDown {
        key: Key,
        shift: bool,
        selection: Selection,
    },
    /// The whole text was replaced, e.g. by loading a file
    Replace { text: String },
    /// The user asked to run the source
    Execute,
}

/// Outcome of one event.
#[derive(Debug, Clone)]
pub struct Transition {
    /// Source after the event
    pub source: SourceBuffer,
    /// Operations that bring the rendered lines up to date, in order
    pub ops: Vec<UpdateOp>,
    /// Selection to restore, if the event moved it
    pub selection: Option<Selection>,
}

impl Transition {
    fn unchanged(source: &SourceBuffer) -> Self {
        Self {
            source: source.clone(),
            ops: Vec::new(),
            selection: None,
        }
    }

    /// Number of rows the input widget should show.
    pub fn rows(&self) -> usize {
        self.source.len_lines()
    }
}

/// Computes the next state for `event`.
pub fn transition(source: &SourceBuffer, unit: &IndentUnit, event: Event) -> CoreResult<Transition> {
    match event {
        Event::TextChanged { text, selection } => text_changed(source, unit, &text, selection),
        Event::KeyDown {
            key: Key::Tab,
            shift,
            selection,
        } => tab(source, unit, shift, selection),
        Event::KeyDown { key: Key::Other, .. } | Event::Execute => Ok(Transition::unchanged(source)),
        Event::Replace { text } => Ok(Transition {
            source: SourceBuffer::from(text),
            ops: vec![UpdateOp::FullUpdate],
            selection: Some(Selection::cursor(0)),
        }),
    }
}

fn text_changed(
    old: &SourceBuffer,
    unit: &IndentUnit,
    text: &str,
    selection: Selection,
) -> CoreResult<Transition> {
    let (text, selection) = expand_tabs(text, selection, unit);
    let new = SourceBuffer::from(text);
    let selection = selection.clamp(new.len_chars());

    let caret_line = new.char_to_line(selection.head())?;
    let ops = plan_text_change(old, &new, caret_line);

    Ok(Transition {
        source: new,
        ops,
        selection: Some(selection),
    })
}

/// Replaces literal tabs with `unit`, moving the selection along.
fn expand_tabs(text: &str, selection: Selection, unit: &IndentUnit) -> (String, Selection) {
    let tabs: Vec<usize> = text
        .chars()
        .enumerate()
        .filter_map(|(idx, ch)| (ch == '\t').then_some(idx))
        .collect();
    if tabs.is_empty() {
        return (text.to_string(), selection);
    }

    let grow = unit.width().saturating_sub(1);
    let remap = |offset: usize| offset + tabs.iter().take_while(|&&tab| tab < offset).count() * grow;
    (text.replace('\t', unit.as_str()), selection.map(remap))
}

fn tab(
    old: &SourceBuffer,
    unit: &IndentUnit,
    shift: bool,
    selection: Selection,
) -> CoreResult<Transition> {
    let selection = selection.clamp(old.len_chars());
    let mut source = old.clone();

    if selection.is_cursor() {
        let caret = selection.start;
        let line = old.char_to_line(caret)?;
        let (caret, changed) = if shift {
            let removed = source.outdent_before(caret, unit)?;
            (caret - removed, removed > 0)
        } else {
            (source.indent_at(caret, unit)?, true)
        };

        let ops = if changed {
            vec![UpdateOp::LineUpdate { start: line, count: 1 }]
        } else {
            Vec::new()
        };
        return Ok(Transition {
            source,
            ops,
            selection: Some(Selection::cursor(caret)),
        });
    }

    let first = old.char_to_line(selection.start)?;
    let last = old.char_to_line(selection.end)?;
    let shifts = source.shift_lines(first..=last, unit, shift)?;
    tracing::debug!(first, last, outdent = shift, shifted = shifts.shifts().len(), "shifted lines");

    let ops = if shifts.shifts().is_empty() {
        Vec::new()
    } else {
        vec![UpdateOp::LineUpdate {
            start: first,
            count: last - first + 1,
        }]
    };
    Ok(Transition {
        source,
        ops,
        selection: Some(selection.map(|offset| shifts.map(offset))),
    })
}
