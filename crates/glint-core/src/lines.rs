//! The rendered line list.

use glint_buffer::SourceBuffer;
use glint_syntax::{render, Fragment, HighlightClass, Language, TokenizerOptions};

use crate::update::UpdateOp;

/// Renders one source line to markup.
#[derive(Debug, Clone)]
pub struct LineRenderer {
    language: Language,
    options: TokenizerOptions,
}

impl LineRenderer {
    pub fn new(language: Language, options: TokenizerOptions) -> Self {
        Self { language, options }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Highlights `line`.
    ///
    /// Only a `throw-error` unknown-character policy can make highlighting
    /// fail; the line is then shown whole as `unexpected`.
    pub fn render(&self, line: &str) -> String {
        match self.language.highlight(line, &self.options) {
            Ok(html) => html,
            Err(err) => {
                tracing::warn!(%err, line, "rendering line as unexpected");
                render(&[Fragment::classed(HighlightClass::Unexpected, line)])
            }
        }
    }
}

/// Rendered markup, one entry per source line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedLines {
    lines: Vec<String>,
}

impl RenderedLines {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one operation, reading line text from `source`.
    ///
    /// Line updates skip indices past either end; creates and deletes are
    /// clamped to the current length.
    pub fn apply(&mut self, op: &UpdateOp, source: &SourceBuffer, renderer: &LineRenderer) {
        match *op {
            UpdateOp::FullUpdate => {
                self.lines = source.lines().map(|line| renderer.render(&line)).collect();
            }
            UpdateOp::LineUpdate { start, count } => {
                let end = start.saturating_add(count).min(self.lines.len());
                for idx in start..end {
                    if let Ok(line) = source.line(idx) {
                        tracing::trace!(idx, "re-rendering line");
                        self.lines[idx] = renderer.render(&line);
                    }
                }
            }
            UpdateOp::CreateLine { start, count } => {
                let start = start.min(self.lines.len());
                self.lines
                    .splice(start..start, std::iter::repeat_n(String::new(), count));
            }
            UpdateOp::DeleteLine { start, count } => {
                let start = start.min(self.lines.len());
                let end = start.saturating_add(count).min(self.lines.len());
                self.lines.drain(start..end);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&str> {
        self.lines.get(idx).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Wraps every line in an ordered list.
    pub fn to_html(&self) -> String {
        let mut out = String::from("<ol class=\"output-lines\">");
        for line in &self.lines {
            out.push_str("<li>");
            out.push_str(line);
            out.push_str("</li>");
        }
        out.push_str("</ol>");
        out
    }
}
