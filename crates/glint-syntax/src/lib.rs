//! # Glint Syntax
//!
//! Lexical syntax highlighting in two stages.
//!
//! ```text
//!  source ──► tokenize() ──► [Token] ──► Language::classify() ──► [Fragment] ──► markup
//! ```
//!
//! 1. The **tokenizer** turns text into a flat list of position-addressed
//!    tokens. It knows nothing about any particular language.
//! 2. A **classifier** walks the tokens with a small window of context and
//!    decides what each one means: a function call, a type, a library name,
//!    a pointer declarator.
//!
//! There is no parser and no AST. Malformed input (an unclosed string, a
//! stray `@`) never fails; it degrades to the `unexpected` class or simply
//! extends to the end of the line.

pub mod context;
pub mod languages;
pub mod markup;
pub mod token;
pub mod tokenizer;

pub use context::{contexts, Context, ContextToken};
pub use languages::{Classifier, Language};
pub use markup::{escape, render, Fragment, HighlightClass};
pub use token::{Token, TokenType};
pub use tokenizer::{tokenize, TokenizeError, TokenizerOptions, UnknownCharacterBehaviour};

/// Errors that can occur during syntax highlighting.
#[derive(Debug, thiserror::Error)]
pub enum SyntaxError {
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Tokenize error: {0}")]
    Tokenize(#[from] TokenizeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello_world_line() {
        let language = Language::Cpp;
        let html = language
            .highlight(
                "\tstd::cout << \"Hello World!\";",
                &language.tokenizer_options(),
            )
            .unwrap();

        assert!(html.starts_with("&nbsp; &nbsp;<span class=\"variable\">std</span>::"));
        assert!(html.contains("&lt;&lt;"));
        assert!(html.contains("<span class=\"string\">\"Hello&nbsp;World!\"</span>;"));
    }

    #[test]
    fn test_unknown_language() {
        let result = Language::from_id("unknown_lang");
        assert!(result.is_err());
    }

    #[test]
    fn test_tokenize_error_converts() {
        let options = TokenizerOptions::default()
            .with_unknown_characters(UnknownCharacterBehaviour::ThrowError);
        let err: SyntaxError = tokenize("$", &options).unwrap_err().into();
        assert!(matches!(
            err,
            SyntaxError::Tokenize(TokenizeError::UnrecognizedCharacter { ch: '$', at: 0 })
        ));
    }
}
