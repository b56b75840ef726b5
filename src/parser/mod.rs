//! The parser core: Token Stream (§4.1), Cursor predicates (§4.2) and
//! Expectation Layer (§4.3).
//!
//! Grounded in the teacher's `parser/mod.rs`, which also wraps a token
//! buffer with `peek`/`bump`/`expect`-shaped helpers; we diverge from it in
//! the one place `spec.md` requires: every expectation here returns a
//! `Result` and bails out on the first mismatch (§7 "Fail-Fast Parsing"),
//! rather than pushing an error onto an accumulator and trying to recover.

pub(crate) mod combinators;
pub(crate) mod grammar;

use crate::ast::Document;
use crate::error::{Error, Expected};
use crate::lexer::{self, Token, TokenKind};
use crate::position::Position;

/// Default recursion depth the grammar engine tolerates before giving up
/// with [`Error::RecursionLimitExceeded`], grounded in the teacher's
/// `DEFAULT_RECURSION_LIMIT` (`limit.rs` / `parser/mod.rs`), scaled down
/// since this crate has no CST node overhead to amortize the call depth
/// against (`SPEC_FULL.md` §5).
pub const DEFAULT_RECURSION_LIMIT: usize = 256;

/// Parses GraphQL source text, producing a [`Document`] or the first
/// syntax/lexical error encountered.
///
/// This is the implementer's-choice entry point `spec.md` asks for (§5):
/// a `Parser` builder so callers can override the recursion limit, plus
/// free functions ([`crate::parse`], [`crate::parse_value`],
/// [`crate::parse_type`]) for the common case.
pub struct Parser<'a> {
    source: &'a str,
    recursion_limit: usize,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }

    /// Overrides the recursion guard's limit (`SPEC_FULL.md` §5). Exists for
    /// callers embedding this parser somewhere recursion depth is
    /// constrained more tightly than our default (e.g. a request handler
    /// with a small stack).
    pub fn recursion_limit(mut self, limit: usize) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn parse(self) -> Result<Document, Error> {
        let mut tokens = TokenStream::new(self.source, self.recursion_limit)?;
        grammar::document::document(&mut tokens)
    }
}

/// Tracks call depth against [`Parser::recursion_limit`]; every
/// mutually-recursive grammar function (`ty`, `value`, `selection_set` /
/// `selection`) enters a guard before recursing and the guard pops it back
/// off on drop. Grounded in the teacher's `LimitTracker` (`src/limit.rs`),
/// adapted from a `high`-watermark counter into a RAII guard since this
/// parser has no long-lived `Parser` value that function calls flow
/// through outside of `TokenStream` itself.
pub(crate) struct RecursionGuard<'t, 'a> {
    stream: &'t mut TokenStream<'a>,
}

impl Drop for RecursionGuard<'_, '_> {
    fn drop(&mut self) {
        self.stream.depth -= 1;
    }
}

/// Eagerly-lexed tokens plus a read cursor over them (§4.1: "Materializes
/// all tokens upfront... Exposes only: `peek`, `lookahead`, `next`,
/// `start`.").
pub(crate) struct TokenStream<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
    recursion_limit: usize,
}

impl<'a> TokenStream<'a> {
    pub(crate) fn new(source: &'a str, recursion_limit: usize) -> Result<Self, Error> {
        let tokens = lexer::tokenize(source)?;
        Ok(Self {
            source,
            tokens,
            pos: 0,
            depth: 0,
            recursion_limit,
        })
    }

    /// The current token without consuming it.
    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// The token one past the current one, without consuming either.
    pub(crate) fn lookahead(&self) -> &Token {
        &self.tokens[(self.pos + 1).min(self.tokens.len() - 1)]
    }

    /// Consumes and returns the current token, advancing the cursor (unless
    /// already at EOF, which is sticky).
    pub(crate) fn next(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// The start position of the current token — used to stamp a node's
    /// `position` before consuming any of its children (§4.1: "`start`:
    /// current token's starting position, for stamping node `position`
    /// fields.").
    pub(crate) fn start(&self) -> Position {
        self.peek().start
    }

    /// Enters a recursion guard scope; returns [`Error::RecursionLimitExceeded`]
    /// if the configured limit would be exceeded.
    pub(crate) fn enter(&mut self) -> Result<RecursionGuard<'_, 'a>, Error> {
        if self.depth >= self.recursion_limit {
            return Err(Error::RecursionLimitExceeded);
        }
        self.depth += 1;
        Ok(RecursionGuard { stream: self })
    }

    /// Cursor predicate (§4.2, exact-kind mode): does the current token have
    /// this `TokenKind`? `Name`/`Scalar` tokens compare true regardless of
    /// payload, matching the class-matching mode for those two kinds.
    pub(crate) fn at(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Cursor predicate: is the current token a `Name` token spelled
    /// exactly `keyword`? GraphQL has no reserved words at the lexical
    /// level — `query`, `on`, `true`, etc. are ordinary `Name` tokens that
    /// specific grammar productions happen to test for.
    pub(crate) fn at_keyword(&self, keyword: &str) -> bool {
        self.peek().name_value() == Some(keyword)
    }

    /// Expectation Layer (§4.3): consumes the current token if it has
    /// `kind`, else raises [`Error::SyntaxError`].
    pub(crate) fn expect_token(&mut self, kind: TokenKind) -> Result<Token, Error> {
        if self.at(kind) {
            Ok(self.next())
        } else {
            Err(self.syntax_error(Expected::Kind(kind)))
        }
    }

    /// Expectation Layer: consumes the current token if it's a `Name`
    /// spelled `keyword`, else raises [`Error::SyntaxError`].
    pub(crate) fn expect_keyword(&mut self, keyword: &'static str) -> Result<Token, Error> {
        if self.at_keyword(keyword) {
            Ok(self.next())
        } else {
            Err(self.syntax_error(Expected::Keyword(keyword)))
        }
    }

    /// Expectation Layer: consumes the current token if it has `kind`,
    /// returning `None` (without advancing or erroring) otherwise.
    pub(crate) fn expect_optional_token(&mut self, kind: TokenKind) -> Option<Token> {
        if self.at(kind) {
            Some(self.next())
        } else {
            None
        }
    }

    /// Expectation Layer: consumes the current token if it's a `Name`
    /// spelled `keyword`, returning `None` (without advancing or erroring)
    /// otherwise.
    pub(crate) fn expect_optional_keyword(&mut self, keyword: &str) -> Option<Token> {
        if self.at_keyword(keyword) {
            Some(self.next())
        } else {
            None
        }
    }

    fn syntax_error(&self, expected: Expected) -> Error {
        Error::SyntaxError {
            source_text: self.source.to_string(),
            start: self.peek().start,
            got: self.peek().clone(),
            expected,
        }
    }

    pub(crate) fn unexpected_token(&self) -> Error {
        Error::UnexpectedToken {
            source_text: self.source.to_string(),
            start: self.peek().start,
            got: self.peek().clone(),
        }
    }
}
