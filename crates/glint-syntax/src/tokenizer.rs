//! Language-agnostic tokenizer.
//!
//! The tokenizer knows the generic shapes shared by C-like languages:
//! identifiers, integer literals, quoted literals, line comments and a fixed
//! table of punctuation. Anything language specific (which identifiers are
//! keywords, what a `*` means) is left to the classifiers.
//!
//! ## Learning: Scanning by `char`, Indexing by Byte
//!
//! Rust strings are UTF-8, so indexing is by byte. The scanner walks the
//! input one `char` at a time but always advances `pos` by the character's
//! encoded width, which keeps every token boundary on a char boundary and
//! makes `&input[token.span()]` safe.

use serde::{Deserialize, Serialize};

use crate::token::{Token, TokenType};

const OPERATORS: &str = "=+-*/%<>!&|^~";
const ENCLOSURE_STARTS: &str = "({[";
const ENCLOSURE_ENDS: &str = ")}]";

/// What to do with a character that matches no rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownCharacterBehaviour {
    /// Emit an `Ignored` token and keep scanning
    #[default]
    Ignore,
    /// Abort with `TokenizeError::UnrecognizedCharacter`
    ThrowError,
}

/// Tokenizer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerOptions {
    /// Policy for characters matching no rule
    pub unknown_character_behaviour: UnknownCharacterBehaviour,

    /// Literal prefix starting a line comment (empty disables comments)
    pub comment_prefix: String,

    /// Emit tokens for non-tab, non-newline whitespace
    pub include_whitespace: bool,

    /// Emit tokens for `\n`
    pub include_newlines: bool,

    /// Emit tokens for tabs
    pub include_indentation: bool,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            unknown_character_behaviour: UnknownCharacterBehaviour::Ignore,
            comment_prefix: String::new(),
            include_whitespace: true,
            include_newlines: true,
            include_indentation: true,
        }
    }
}

impl TokenizerOptions {
    /// Sets the line comment prefix.
    pub fn with_comment_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.comment_prefix = prefix.into();
        self
    }

    /// Sets the unknown-character policy.
    pub fn with_unknown_characters(mut self, behaviour: UnknownCharacterBehaviour) -> Self {
        self.unknown_character_behaviour = behaviour;
        self
    }

    /// Enables or disables all three whitespace-like token kinds at once.
    pub fn with_blanks(mut self, include: bool) -> Self {
        self.include_whitespace = include;
        self.include_newlines = include;
        self.include_indentation = include;
        self
    }
}

/// Errors raised while tokenizing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenizeError {
    #[error("Unrecognized character {ch:?} at offset {at}")]
    UnrecognizedCharacter { ch: char, at: usize },
}

/// Splits `input` into tokens.
///
/// Unterminated string/char literals and comments without a trailing newline
/// simply extend to the end of the input. The only error is an unknown
/// character under [`UnknownCharacterBehaviour::ThrowError`].
///
/// # Example
/// ```
/// use glint_syntax::{tokenize, TokenType, TokenizerOptions};
///
/// let tokens = tokenize("x = 42;", &TokenizerOptions::default()).unwrap();
/// assert_eq!(tokens[0].kind, TokenType::Identifier);
/// assert_eq!(tokens[4].kind, TokenType::Number);
/// ```
pub fn tokenize(input: &str, options: &TokenizerOptions) -> Result<Vec<Token>, TokenizeError> {
    Scanner::new(input, options).run()
}

/// Outcome of looking a single character up in the punctuation table.
enum Lexeme {
    Emit(TokenType),
    Skip,
    Unknown,
}

struct Scanner<'a> {
    input: &'a str,
    options: &'a TokenizerOptions,
    pos: usize,
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str, options: &'a TokenizerOptions) -> Self {
        Self {
            input,
            options,
            pos: 0,
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Vec<Token>, TokenizeError> {
        while let Some(ch) = self.peek() {
            if self.at_comment() {
                self.comment();
            } else if ch.is_ascii_digit() {
                self.take_while(TokenType::Number, |c| c.is_ascii_digit());
            } else if is_identifier_start(ch) {
                self.take_while(TokenType::Identifier, is_identifier_char);
            } else if ch == '"' || ch == '\'' {
                self.literal(ch);
            } else {
                self.single(ch)?;
            }
        }
        Ok(self.tokens)
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn push(&mut self, start: usize, kind: TokenType) {
        self.tokens.push(Token::new(start, self.pos - start, kind));
    }

    fn at_comment(&self) -> bool {
        let prefix = &self.options.comment_prefix;
        !prefix.is_empty() && self.input[self.pos..].starts_with(prefix.as_str())
    }

    /// Consumes up to, not including, the next newline.
    fn comment(&mut self) {
        let start = self.pos;
        self.pos = match self.input[start..].find('\n') {
            Some(offset) => start + offset,
            None => self.input.len(),
        };
        self.push(start, TokenType::Comment);
    }

    fn take_while(&mut self, kind: TokenType, accept: impl Fn(char) -> bool) {
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if !accept(ch) {
                break;
            }
            self.pos += ch.len_utf8();
        }
        self.push(start, kind);
    }

    /// Consumes a quoted literal. There is no escape handling: the first
    /// matching quote closes it.
    fn literal(&mut self, quote: char) {
        let start = self.pos;
        let body = start + quote.len_utf8();
        self.pos = match self.input[body..].find(quote) {
            Some(offset) => body + offset + quote.len_utf8(),
            None => self.input.len(),
        };
        let kind = if quote == '\'' {
            TokenType::Char
        } else {
            TokenType::String
        };
        self.push(start, kind);
    }

    fn single(&mut self, ch: char) -> Result<(), TokenizeError> {
        let start = self.pos;
        match lexeme(ch, self.options) {
            Lexeme::Emit(kind) => {
                self.pos += ch.len_utf8();
                self.push(start, kind);
            }
            Lexeme::Skip => self.pos += ch.len_utf8(),
            Lexeme::Unknown => match self.options.unknown_character_behaviour {
                UnknownCharacterBehaviour::Ignore => {
                    tracing::trace!(?ch, at = start, "ignoring unknown character");
                    self.pos += ch.len_utf8();
                    self.push(start, TokenType::Ignored);
                }
                UnknownCharacterBehaviour::ThrowError => {
                    return Err(TokenizeError::UnrecognizedCharacter { ch, at: start });
                }
            },
        }
        Ok(())
    }
}

fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_identifier_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

fn lexeme(ch: char, options: &TokenizerOptions) -> Lexeme {
    let emit_if = |include: bool, kind| {
        if include {
            Lexeme::Emit(kind)
        } else {
            Lexeme::Skip
        }
    };

    match ch {
        _ if ENCLOSURE_STARTS.contains(ch) => Lexeme::Emit(TokenType::EnclosureStart),
        _ if ENCLOSURE_ENDS.contains(ch) => Lexeme::Emit(TokenType::EnclosureEnd),
        _ if OPERATORS.contains(ch) => Lexeme::Emit(TokenType::Operator),
        '\t' => emit_if(options.include_indentation, TokenType::Indentation),
        '\n' => emit_if(options.include_newlines, TokenType::Newline),
        _ if ch.is_whitespace() => emit_if(options.include_whitespace, TokenType::Whitespace),
        '.' => Lexeme::Emit(TokenType::Dot),
        ',' => Lexeme::Emit(TokenType::Comma),
        ':' => Lexeme::Emit(TokenType::Colon),
        ';' => Lexeme::Emit(TokenType::Semicolon),
        '#' => Lexeme::Emit(TokenType::Hash),
        _ => Lexeme::Unknown,
    }
}
