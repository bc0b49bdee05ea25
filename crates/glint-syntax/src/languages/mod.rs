//! Language registry.
//!
//! ## Learning: Closed Enums over String Keys
//!
//! Each supported language is an enum variant. A `match` over `Language`
//! must cover every variant, so adding one is a compile error until its
//! classifier and tokenizer options are supplied. The tokenizer and the
//! render controller never change when a language is added.

mod c;
mod c_family;
mod cpp;

pub use c_family::CFamily;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::markup::{self, Fragment};
use crate::token::Token;
use crate::tokenizer::{tokenize, TokenizeError, TokenizerOptions, UnknownCharacterBehaviour};
use crate::SyntaxError;

/// Assigns display classes to a token stream.
pub trait Classifier: Send + Sync {
    /// Returns one fragment per token, in order.
    fn classify(&self, source: &str, tokens: &[Token]) -> Vec<Fragment>;
}

/// A supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Cpp,
    C,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Cpp, Language::C];

    /// Canonical identifier.
    pub fn id(&self) -> &'static str {
        match self {
            Language::Cpp => "cpp",
            Language::C => "c",
        }
    }

    /// Looks a language up by identifier or common alias.
    pub fn from_id(id: &str) -> Result<Self, SyntaxError> {
        match id.to_ascii_lowercase().as_str() {
            "cpp" | "c++" | "cc" | "cxx" | "hpp" | "hxx" => Ok(Language::Cpp),
            "c" | "h" => Ok(Language::C),
            _ => Err(SyntaxError::UnknownLanguage(id.to_string())),
        }
    }

    /// Detects a language from a file name's extension.
    pub fn detect(filename: &str) -> Option<Self> {
        let (_, ext) = filename.rsplit_once('.')?;
        Self::from_id(ext).ok()
    }

    /// Tokenizer configuration for this language.
    pub fn tokenizer_options(&self) -> TokenizerOptions {
        match self {
            Language::Cpp | Language::C => TokenizerOptions::default()
                .with_comment_prefix("//")
                .with_unknown_characters(UnknownCharacterBehaviour::Ignore),
        }
    }

    fn classifier(&self) -> &'static dyn Classifier {
        match self {
            Language::Cpp => &*cpp::CPP,
            Language::C => &*c::C,
        }
    }

    /// Classifies an already tokenized source.
    pub fn classify(&self, source: &str, tokens: &[Token]) -> Vec<Fragment> {
        self.classifier().classify(source, tokens)
    }

    /// Tokenizes, classifies and renders `source` to markup.
    pub fn highlight(
        &self,
        source: &str,
        options: &TokenizerOptions,
    ) -> Result<String, TokenizeError> {
        let tokens = tokenize(source, options)?;
        Ok(markup::render(&self.classify(source, &tokens)))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Language {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id_aliases() {
        assert_eq!(Language::from_id("cpp").unwrap(), Language::Cpp);
        assert_eq!(Language::from_id("C++").unwrap(), Language::Cpp);
        assert_eq!(Language::from_id("h").unwrap(), Language::C);
        assert!(matches!(
            Language::from_id("cobol"),
            Err(SyntaxError::UnknownLanguage(_))
        ));
    }

    #[test]
    fn test_id_round_trips() {
        for language in Language::ALL {
            assert_eq!(language.id().parse::<Language>().unwrap(), language);
        }
    }

    #[test]
    fn test_detect() {
        assert_eq!(Language::detect("main.cpp"), Some(Language::Cpp));
        assert_eq!(Language::detect("lib/util.h"), Some(Language::C));
        assert_eq!(Language::detect("README"), None);
        assert_eq!(Language::detect("notes.txt"), None);
    }

    #[test]
    fn test_cpp_highlight() {
        let language = Language::Cpp;
        let html = language
            .highlight("int main() {", &language.tokenizer_options())
            .unwrap();
        assert_eq!(
            html,
            "<span class=\"type\">int</span>&nbsp;<span class=\"function\">main</span>()&nbsp;{"
        );
    }

    #[test]
    fn test_c_tables_differ_from_cpp() {
        let options = Language::C.tokenizer_options();
        let c = Language::C.highlight("class", &options).unwrap();
        let cpp = Language::Cpp.highlight("class", &options).unwrap();
        assert_eq!(c, "<span class=\"variable\">class</span>");
        assert_eq!(cpp, "<span class=\"keyword\">class</span>");
    }

    #[test]
    fn test_highlight_is_deterministic() {
        let language = Language::Cpp;
        let options = language.tokenizer_options();
        let source = "std::cout << \"Hello World!\"; // greet";
        assert_eq!(
            language.highlight(source, &options).unwrap(),
            language.highlight(source, &options).unwrap()
        );
    }
}
