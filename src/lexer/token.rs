use crate::position::Position;

/// The lexical kinds a [`Token`] can carry.
///
/// Punctuators and `Eof` are compared for equality by variant alone — this
/// is the "exact-kind" matching mode. `Name` and `Scalar` are compared the
/// same way (two `Name` tokens are equal as *kinds* regardless of which
/// identifier they carry) — this is the "class" matching mode. Both modes
/// therefore reduce to plain `TokenKind` equality; what differs is whether a
/// caller also inspects the token's `value` (see [`Parser::expect_keyword`](crate::parser::Parser::expect_keyword)).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Eof,
    Ellipsis,
    Exclamation,
    Dollar,
    ParenOpen,
    ParenClose,
    CurlyOpen,
    CurlyClose,
    BracketOpen,
    BracketClose,
    Colon,
    Equals,
    At,
    Pipe,
    Amp,
    Name,
    Scalar,
}

/// The runtime type of a `Scalar` token's payload, mirroring the three
/// scalar literal forms the GraphQL grammar recognizes at the lexical
/// level (block and non-block strings are not distinguished past this
/// point — interpreting block string indentation is explicitly out of
/// scope).
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarLiteral {
    Int(i64),
    Float(f64),
    Str(String),
}

/// The value payload carried by `Name` and `Scalar` tokens. Punctuator and
/// `Eof` tokens carry no payload.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Name(String),
    Scalar(ScalarLiteral),
}

/// A single lexical token together with the source position at which it
/// starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<TokenValue>,
    pub start: Position,
}

impl Token {
    pub fn eof(start: Position) -> Self {
        Self {
            kind: TokenKind::Eof,
            value: None,
            start,
        }
    }

    pub fn punctuator(kind: TokenKind, start: Position) -> Self {
        debug_assert!(!matches!(kind, TokenKind::Name | TokenKind::Scalar));
        Self {
            kind,
            value: None,
            start,
        }
    }

    pub fn name(text: String, start: Position) -> Self {
        Self {
            kind: TokenKind::Name,
            value: Some(TokenValue::Name(text)),
            start,
        }
    }

    pub fn scalar(literal: ScalarLiteral, start: Position) -> Self {
        Self {
            kind: TokenKind::Scalar,
            value: Some(TokenValue::Scalar(literal)),
            start,
        }
    }

    /// The `Name` text this token carries, if any. Used both to read
    /// identifiers and to compare against keywords.
    pub fn name_value(&self) -> Option<&str> {
        match &self.value {
            Some(TokenValue::Name(text)) => Some(text),
            _ => None,
        }
    }

    pub fn scalar_value(&self) -> Option<&ScalarLiteral> {
        match &self.value {
            Some(TokenValue::Scalar(literal)) => Some(literal),
            _ => None,
        }
    }

    /// A short human-readable rendering of this token, used in error
    /// messages (the `got` side of a `Syntax error. Got token <got> ...`).
    pub fn describe(&self) -> String {
        match (&self.kind, &self.value) {
            (TokenKind::Eof, _) => "EOF".to_string(),
            (_, Some(TokenValue::Name(text))) => format!("Name \"{text}\""),
            (_, Some(TokenValue::Scalar(ScalarLiteral::Int(v)))) => format!("Int \"{v}\""),
            (_, Some(TokenValue::Scalar(ScalarLiteral::Float(v)))) => format!("Float \"{v}\""),
            (_, Some(TokenValue::Scalar(ScalarLiteral::Str(v)))) => format!("String \"{v}\""),
            (kind, None) => format!("{kind:?}"),
        }
    }
}
