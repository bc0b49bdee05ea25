//! Token types produced by the tokenizer.
//!
//! ## Learning: Spans Instead of Owned Text
//!
//! A `Token` never stores its own text. It records where it starts and how
//! long it is, and the text is recovered by slicing the source it came from.
//! This keeps tokens `Copy` and avoids one allocation per token.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Lexical category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenType {
    Identifier,
    Number,
    Operator,
    String,
    Char,
    EnclosureStart,
    EnclosureEnd,
    Comment,
    Ignored,
    Hash,
    Dot,
    Comma,
    Colon,
    Semicolon,
    Whitespace,
    Indentation,
    Newline,
}

impl TokenType {
    /// Returns true for the whitespace-like kinds the tokenizer may suppress.
    pub fn is_blank(&self) -> bool {
        matches!(
            self,
            TokenType::Whitespace | TokenType::Indentation | TokenType::Newline
        )
    }
}

/// A classified span of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Byte offset of the first character
    pub at: usize,
    /// Length in bytes
    pub len: usize,
    /// Lexical category
    pub kind: TokenType,
}

impl Token {
    pub fn new(at: usize, len: usize, kind: TokenType) -> Self {
        Self { at, len, kind }
    }

    /// Byte range covered by this token.
    pub fn span(&self) -> Range<usize> {
        self.at..self.at + self.len
    }

    /// Offset one past the last byte.
    pub fn end(&self) -> usize {
        self.at + self.len
    }

    /// Recovers the token's text from the source it was produced from.
    ///
    /// Returns an empty string if the span falls outside `source`, which only
    /// happens when a token is paired with the wrong source.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.span()).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_text() {
        let source = "int main";
        let token = Token::new(4, 4, TokenType::Identifier);
        assert_eq!(token.text(source), "main");
        assert_eq!(token.end(), 8);
    }

    #[test]
    fn test_token_text_out_of_range() {
        let token = Token::new(10, 2, TokenType::Identifier);
        assert_eq!(token.text("short"), "");
    }

    #[test]
    fn test_blank_kinds() {
        assert!(TokenType::Newline.is_blank());
        assert!(TokenType::Indentation.is_blank());
        assert!(!TokenType::Comment.is_blank());
    }
}
