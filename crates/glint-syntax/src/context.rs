//! Sliding classification context over a token stream.
//!
//! ## Learning: Windows Instead of Linked Lists
//!
//! Classifiers need to look a few tokens back ("was the token before the
//! whitespace `namespace`?") and exactly one token ahead. Instead of chaining
//! every state to its predecessor, each step copies a small fixed array of
//! the most recent tokens. Everything is `Copy` and borrows the source, so no
//! node owns another and nothing is allocated per token.

use crate::token::{Token, TokenType};

/// How many previous tokens a context remembers.
pub const LOOKBACK: usize = 4;

/// A token resolved against its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextToken<'s> {
    pub kind: TokenType,
    pub text: &'s str,
    /// Byte offset into the classified source
    pub at: usize,
    /// Zero-based line the token starts on
    pub line: usize,
}

impl ContextToken<'_> {
    pub fn is(&self, kind: TokenType) -> bool {
        self.kind == kind
    }
}

/// View of one token with its neighbours.
#[derive(Debug, Clone, Copy)]
pub struct Context<'s> {
    pub current: ContextToken<'s>,
    previous: [Option<ContextToken<'s>>; LOOKBACK],
    pub next: Option<ContextToken<'s>>,
}

impl<'s> Context<'s> {
    /// Looks `depth` tokens back; `back(0)` is the current token.
    pub fn back(&self, depth: usize) -> Option<ContextToken<'s>> {
        match depth {
            0 => Some(self.current),
            _ => self.previous.get(depth - 1).copied().flatten(),
        }
    }

    /// The token immediately before the current one.
    pub fn prev(&self) -> Option<ContextToken<'s>> {
        self.back(1)
    }

    /// True if the token `depth` back has the given text.
    pub fn back_is(&self, depth: usize, text: &str) -> bool {
        self.back(depth).is_some_and(|t| t.text == text)
    }

    /// True if the token `depth` back has the given kind.
    pub fn back_kind(&self, depth: usize, kind: TokenType) -> bool {
        self.back(depth).is_some_and(|t| t.is(kind))
    }

    pub fn next_is(&self, text: &str) -> bool {
        self.next.is_some_and(|t| t.text == text)
    }

    pub fn next_kind(&self, kind: TokenType) -> bool {
        self.next.is_some_and(|t| t.is(kind))
    }
}

/// Walks `tokens` left to right, yielding a [`Context`] per token.
pub fn contexts<'s, 't>(source: &'s str, tokens: &'t [Token]) -> Contexts<'s, 't> {
    Contexts {
        source,
        tokens: tokens.iter(),
        history: [None; LOOKBACK],
        upcoming: None,
        line: 0,
        scanned: 0,
    }
}

/// Iterator returned by [`contexts`].
pub struct Contexts<'s, 't> {
    source: &'s str,
    tokens: std::slice::Iter<'t, Token>,
    history: [Option<ContextToken<'s>>; LOOKBACK],
    upcoming: Option<ContextToken<'s>>,
    line: usize,
    scanned: usize,
}

impl<'s> Contexts<'s, '_> {
    /// Resolves text and line number. Tokens arrive in offset order, so the
    /// newline count only has to cover the gap since the last token.
    fn resolve(&mut self, token: &Token) -> ContextToken<'s> {
        if token.at > self.scanned {
            self.line += self
                .source
                .get(self.scanned..token.at)
                .map_or(0, |gap| gap.matches('\n').count());
            self.scanned = token.at;
        }

        ContextToken {
            kind: token.kind,
            text: token.text(self.source),
            at: token.at,
            line: self.line,
        }
    }
}

impl<'s> Iterator for Contexts<'s, '_> {
    type Item = Context<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = match self.upcoming.take() {
            Some(token) => token,
            None => {
                let token = self.tokens.next()?;
                self.resolve(token)
            }
        };
        let next = self.tokens.next().map(|token| self.resolve(token));
        self.upcoming = next;

        let context = Context {
            current,
            previous: self.history,
            next,
        };

        self.history.rotate_right(1);
        self.history[0] = Some(current);

        Some(context)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.tokens.len() + usize::from(self.upcoming.is_some());
        (remaining, Some(remaining))
    }
}
