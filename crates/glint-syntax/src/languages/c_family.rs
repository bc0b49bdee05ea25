//! Classification rules shared by C and C++.

use std::collections::HashSet;

use crate::context::{contexts, Context};
use crate::languages::Classifier;
use crate::markup::{Fragment, HighlightClass};
use crate::token::{Token, TokenType};

/// Preprocessor directives recognized right after a `#`.
const DIRECTIVES: &[&str] = &[
    "include", "define", "undef", "ifdef", "ifndef", "elif", "endif", "pragma", "error",
    "line",
];

/// A C-family rule set parameterized by its keyword and type tables.
#[derive(Debug)]
pub struct CFamily {
    keywords: HashSet<&'static str>,
    types: HashSet<&'static str>,
}

impl CFamily {
    pub fn new(keywords: &[&'static str], types: &[&'static str]) -> Self {
        Self {
            keywords: keywords.iter().copied().collect(),
            types: types.iter().copied().collect(),
        }
    }

    fn fragment(&self, ctx: &Context<'_>) -> Fragment {
        let text = ctx.current.text;
        match ctx.current.kind {
            TokenType::Dot | TokenType::Comma | TokenType::Semicolon | TokenType::Operator => {
                if is_pointer_indicator(ctx) {
                    Fragment::classed(HighlightClass::PointerIndicator, text)
                } else {
                    Fragment::plain(text)
                }
            }
            TokenType::String | TokenType::Char => Fragment::classed(HighlightClass::String, text),
            TokenType::Identifier => Fragment::classed(self.identifier_class(ctx), text),
            TokenType::Number => Fragment::classed(HighlightClass::Number, text),
            TokenType::Comment => Fragment::classed(HighlightClass::Comment, text),
            TokenType::Ignored => Fragment::classed(HighlightClass::Unexpected, text),
            _ => Fragment::plain(text),
        }
    }

    fn identifier_class(&self, ctx: &Context<'_>) -> HighlightClass {
        let text = ctx.current.text;
        if ctx.next_is("(") {
            HighlightClass::Function
        } else if is_library(ctx) {
            HighlightClass::Library
        } else if is_directive(ctx) || self.keywords.contains(text) {
            HighlightClass::Keyword
        } else if self.types.contains(text) {
            HighlightClass::Type
        } else {
            HighlightClass::Variable
        }
    }
}

impl Classifier for CFamily {
    fn classify(&self, source: &str, tokens: &[Token]) -> Vec<Fragment> {
        contexts(source, tokens)
            .map(|ctx| self.fragment(&ctx))
            .collect()
    }
}

/// `*` touching an identifier on either side, or `&` directly before one.
fn is_pointer_indicator(ctx: &Context<'_>) -> bool {
    match ctx.current.text {
        "*" => ctx.back_kind(1, TokenType::Identifier) || ctx.next_kind(TokenType::Identifier),
        "&" => ctx.next_kind(TokenType::Identifier),
        _ => false,
    }
}

/// The name inside `#include <name>`, or the name after `namespace `.
fn is_library(ctx: &Context<'_>) -> bool {
    let included = ctx.next_is(">")
        && ctx.back_is(1, "<")
        && ctx.back_kind(2, TokenType::Whitespace)
        && ctx.back_is(3, "include")
        && ctx.back_is(4, "#");
    let namespaced = ctx.back_kind(1, TokenType::Whitespace) && ctx.back_is(2, "namespace");

    included || namespaced
}

/// A directive name glued to its `#`; `# include` does not count.
fn is_directive(ctx: &Context<'_>) -> bool {
    DIRECTIVES.contains(&ctx.current.text)
        && ctx
            .prev()
            .is_some_and(|hash| hash.is(TokenType::Hash) && hash.at + 1 == ctx.current.at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::{tokenize, TokenizerOptions};

    fn rules() -> CFamily {
        CFamily::new(&["return", "namespace", "using"], &["int", "vector"])
    }

    fn classes(source: &str) -> Vec<(String, Option<HighlightClass>)> {
        let options = TokenizerOptions::default().with_comment_prefix("//");
        let tokens = tokenize(source, &options).unwrap();
        rules()
            .classify(source, &tokens)
            .into_iter()
            .map(|f| (f.text, f.class))
            .collect()
    }

    fn class_of(source: &str, text: &str) -> Option<HighlightClass> {
        classes(source)
            .into_iter()
            .find(|(t, _)| t == text)
            .and_then(|(_, class)| class)
    }

    #[test]
    fn test_include_directive() {
        let source = "#include <vector>";
        assert_eq!(class_of(source, "include"), Some(HighlightClass::Keyword));
        assert_eq!(class_of(source, "vector"), Some(HighlightClass::Library));
    }

    #[test]
    fn test_spaced_hash_is_not_a_directive() {
        let source = "# include <vector>";
        assert_eq!(class_of(source, "include"), Some(HighlightClass::Variable));
        assert_eq!(class_of(source, "vector"), Some(HighlightClass::Type));
    }

    #[test]
    fn test_define_directive() {
        assert_eq!(class_of("#define N 4", "define"), Some(HighlightClass::Keyword));
        assert_eq!(class_of("#define N 4", "N"), Some(HighlightClass::Variable));
    }

    #[test]
    fn test_namespace_library() {
        assert_eq!(
            class_of("using namespace std;", "std"),
            Some(HighlightClass::Library)
        );
    }

    #[test]
    fn test_function_beats_everything() {
        assert_eq!(class_of("int(x)", "int"), Some(HighlightClass::Function));
        assert_eq!(class_of("main()", "main"), Some(HighlightClass::Function));
        assert_eq!(class_of("main ()", "main"), Some(HighlightClass::Variable));
    }

    #[test]
    fn test_keyword_type_variable() {
        let source = "return int x";
        assert_eq!(class_of(source, "return"), Some(HighlightClass::Keyword));
        assert_eq!(class_of(source, "int"), Some(HighlightClass::Type));
        assert_eq!(class_of(source, "x"), Some(HighlightClass::Variable));
    }

    #[test]
    fn test_pointer_declarator() {
        assert_eq!(
            class_of("int* p;", "*"),
            Some(HighlightClass::PointerIndicator)
        );
        assert_eq!(
            class_of("int *p;", "*"),
            Some(HighlightClass::PointerIndicator)
        );
    }

    #[test]
    fn test_multiplication_adjacency() {
        // Adjacent identifiers trigger the rule even for a product.
        assert_eq!(class_of("a*b;", "*"), Some(HighlightClass::PointerIndicator));
        // Whitespace tokens break adjacency.
        assert_eq!(class_of("a * b;", "*"), None);

        // With blanks suppressed the operands become stream neighbours.
        let source = "a * b;";
        let options = TokenizerOptions::default().with_blanks(false);
        let tokens = tokenize(source, &options).unwrap();
        let star = rules()
            .classify(source, &tokens)
            .into_iter()
            .find(|f| f.text == "*")
            .and_then(|f| f.class);
        assert_eq!(star, Some(HighlightClass::PointerIndicator));
    }

    #[test]
    fn test_reference_indicator() {
        assert_eq!(class_of("f(&x)", "&"), Some(HighlightClass::PointerIndicator));
        assert_eq!(class_of("x& y", "&"), None);
    }

    #[test]
    fn test_literals_and_comments() {
        let source = "x = \"a b\"; // done";
        assert_eq!(
            class_of(source, "\"a&nbsp;b\""),
            Some(HighlightClass::String)
        );
        assert_eq!(
            class_of(source, "//&nbsp;done"),
            Some(HighlightClass::Comment)
        );
        assert_eq!(class_of("'c'", "'c'"), Some(HighlightClass::String));
        assert_eq!(class_of("42", "42"), Some(HighlightClass::Number));
    }

    #[test]
    fn test_unexpected_character() {
        assert_eq!(class_of("a @", "@"), Some(HighlightClass::Unexpected));
    }

    #[test]
    fn test_fragments_cover_every_token() {
        let source = "if (a < b) { return; }";
        let tokens = tokenize(source, &TokenizerOptions::default()).unwrap();
        assert_eq!(rules().classify(source, &tokens).len(), tokens.len());
    }

    #[test]
    fn test_plain_punctuation_is_escaped() {
        let all = classes("a<b");
        assert_eq!(all[1], ("&lt;".to_string(), None));
    }
}
