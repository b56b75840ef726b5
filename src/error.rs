use std::fmt;

use crate::lexer::{Token, TokenKind};
use crate::position::Position;

/// What the [`Expectation Layer`](crate::parser::Parser) was expecting when
/// a [`SyntaxError`](Error::SyntaxError) was raised: either a specific
/// punctuator/class `TokenKind`, or a specific keyword spelling.
#[derive(Debug, Clone, PartialEq)]
pub enum Expected {
    Kind(TokenKind),
    Keyword(&'static str),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Kind(kind) => write!(f, "{kind}"),
            Expected::Keyword(word) => write!(f, "\"{word}\""),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = match self {
            TokenKind::Eof => "EOF",
            TokenKind::Ellipsis => "\"...\"",
            TokenKind::Exclamation => "\"!\"",
            TokenKind::Dollar => "\"$\"",
            TokenKind::ParenOpen => "\"(\"",
            TokenKind::ParenClose => "\")\"",
            TokenKind::CurlyOpen => "\"{\"",
            TokenKind::CurlyClose => "\"}\"",
            TokenKind::BracketOpen => "\"[\"",
            TokenKind::BracketClose => "\"]\"",
            TokenKind::Colon => "\":\"",
            TokenKind::Equals => "\"=\"",
            TokenKind::At => "\"@\"",
            TokenKind::Pipe => "\"|\"",
            TokenKind::Amp => "\"&\"",
            TokenKind::Name => "Name",
            TokenKind::Scalar => "Scalar",
        };
        f.write_str(rendered)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Errors this crate's public operations ([`parse`](crate::parse),
/// [`parse_value`](crate::parse_value), [`parse_type`](crate::parse_type))
/// can return.
///
/// Exactly one variant is ever returned per failed call: parsing is
/// fail-fast and stops at the first syntactic anomaly (see `spec.md` §7).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The input handed to a public operation was not usable as GraphQL
    /// source text (e.g. contained invalid UTF-8 byte sequences before
    /// even reaching the lexer).
    #[error("incorrect source: input is not a valid GraphQL source string")]
    IncorrectSource,

    /// A specific token or keyword was required at `start` and something
    /// else was found.
    #[error(
        "Syntax error. Got token {got} instead of {expected} at position {line}:{col}",
        line = start.line + 1,
        col = start.col + 1
    )]
    SyntaxError {
        source_text: String,
        start: Position,
        got: Token,
        expected: Expected,
    },

    /// No specific expectation was active; the current token simply could
    /// not begin any valid production at this point in the grammar.
    #[error(
        "Syntax error. Got unexpected token {got} at position {line}:{col}",
        line = start.line + 1,
        col = start.col + 1
    )]
    UnexpectedToken {
        source_text: String,
        start: Position,
        got: Token,
    },

    /// The grammar engine's recursion guard tripped before a syntax error
    /// could even be localized — an ambient safety net, not a grammar rule
    /// (see `SPEC_FULL.md` §5).
    #[error("parser recursion limit reached while parsing")]
    RecursionLimitExceeded,

    /// The lexer could not tokenize the input at all (§6.1: "The parser
    /// treats the first lexical error as fatal."). The lexer's internals
    /// aren't specified beyond that contract, so this carries a free-form
    /// message rather than a structured `expected`/`got` pair.
    #[error(
        "Syntax error. {message} at position {line}:{col}",
        line = start.line + 1,
        col = start.col + 1
    )]
    LexError {
        source_text: String,
        start: Position,
        message: String,
    },
}

impl Error {
    /// The position at which this error was raised. Always within
    /// `[0, len(source)]` (`spec.md` §7).
    pub fn start(&self) -> Position {
        match self {
            Error::IncorrectSource => Position::start(),
            Error::SyntaxError { start, .. } => *start,
            Error::UnexpectedToken { start, .. } => *start,
            Error::RecursionLimitExceeded => Position::start(),
            Error::LexError { start, .. } => *start,
        }
    }
}
