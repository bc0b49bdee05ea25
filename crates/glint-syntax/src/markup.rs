//! Highlight classes and markup rendering.

use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Semantic display class assigned by a classifier.
///
/// The set is closed and its CSS names are the stable part of the rendered
/// output: hosts style lines with these class names and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HighlightClass {
    Keyword,
    Type,
    Function,
    Variable,
    Library,
    String,
    Number,
    Comment,
    PointerIndicator,
    Unexpected,
}

impl HighlightClass {
    /// Every class, in declaration order.
    pub const ALL: [HighlightClass; 10] = [
        HighlightClass::Keyword,
        HighlightClass::Type,
        HighlightClass::Function,
        HighlightClass::Variable,
        HighlightClass::Library,
        HighlightClass::String,
        HighlightClass::Number,
        HighlightClass::Comment,
        HighlightClass::PointerIndicator,
        HighlightClass::Unexpected,
    ];

    /// Returns the CSS class name.
    pub fn css_class(&self) -> &'static str {
        match self {
            HighlightClass::Keyword => "keyword",
            HighlightClass::Type => "type",
            HighlightClass::Function => "function",
            HighlightClass::Variable => "variable",
            HighlightClass::Library => "library",
            HighlightClass::String => "string",
            HighlightClass::Number => "number",
            HighlightClass::Comment => "comment",
            HighlightClass::PointerIndicator => "pointer-indicator",
            HighlightClass::Unexpected => "unexpected",
        }
    }
}

/// A piece of rendered output: already-escaped text, optionally classed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    pub class: Option<HighlightClass>,
    pub text: String,
}

impl Fragment {
    /// Escapes `raw` and tags it with `class`.
    pub fn classed(class: HighlightClass, raw: &str) -> Self {
        Self {
            class: Some(class),
            text: escape(raw),
        }
    }

    /// Escapes `raw` without a class.
    pub fn plain(raw: &str) -> Self {
        Self {
            class: None,
            text: escape(raw),
        }
    }

    /// Appends this fragment's markup to `out`.
    pub fn write_markup(&self, out: &mut String) {
        match self.class {
            Some(class) => {
                // Writing into a String cannot fail.
                let _ = write!(out, "<span class=\"{}\">{}</span>", class.css_class(), self.text);
            }
            None => out.push_str(&self.text),
        }
    }
}

/// Concatenates fragments into a markup string.
pub fn render(fragments: &[Fragment]) -> String {
    let mut out = String::new();
    for fragment in fragments {
        fragment.write_markup(&mut out);
    }
    out
}

/// Substitutes the characters that would not survive HTML layout.
///
/// Note that `&` passes through unchanged, so source text such as `&lt;`
/// renders as `<` rather than literally. Hosts relying on exact round-trips
/// of ampersands will see this.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '\t' => out.push_str("&nbsp; &nbsp;"),
            '\n' => out.push_str("<br />"),
            ' ' => out.push_str("&nbsp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}
