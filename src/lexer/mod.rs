//! The lexer is an external collaborator as far as `spec.md` is concerned
//! (§6.1): the grammar engine only relies on the contract that `next()`
//! yields positioned tokens (or a fatal lexical error), and that punctuators
//! compare by identity while `Name`/`Scalar` compare as classes. This module
//! provides a concrete implementation of that contract, grounded in the
//! character-scanning approach of the teacher's `lexer/cursor.rs`
//! (`examples/apollographql-apollo-rs/crates/apollo-parser/src/lexer/cursor.rs`),
//! adapted to emit owned, trivia-free tokens directly (commas and comments
//! are consumed and never surface to the grammar engine, matching `spec.md`'s
//! "no trivia preservation" Non-goal).

mod cursor;
mod token;

use cursor::Cursor;

pub use token::{ScalarLiteral, Token, TokenKind, TokenValue};

use crate::error::Error;
use crate::position::Position;

/// Tokenizes an entire source string eagerly, per §4.1: "Token Stream...
/// Materializes all tokens upfront."
///
/// Returns the first lexical error encountered, if any — lexical errors are
/// as fatal to the parse as syntax errors (§6.1: "The parser treats the
/// first lexical error as fatal.").
pub(crate) fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut cursor = Cursor::new(source);
    let mut tokens = Vec::new();

    loop {
        skip_trivia(&mut cursor);

        let start = Position {
            offset: cursor.offset(),
            line: cursor.line(),
            col: cursor.col(),
        };

        let Some(c) = cursor.first() else {
            tokens.push(Token::eof(start));
            break;
        };

        let token = match c {
            '!' => punctuator(&mut cursor, TokenKind::Exclamation, start),
            '$' => punctuator(&mut cursor, TokenKind::Dollar, start),
            '(' => punctuator(&mut cursor, TokenKind::ParenOpen, start),
            ')' => punctuator(&mut cursor, TokenKind::ParenClose, start),
            '{' => punctuator(&mut cursor, TokenKind::CurlyOpen, start),
            '}' => punctuator(&mut cursor, TokenKind::CurlyClose, start),
            '[' => punctuator(&mut cursor, TokenKind::BracketOpen, start),
            ']' => punctuator(&mut cursor, TokenKind::BracketClose, start),
            ':' => punctuator(&mut cursor, TokenKind::Colon, start),
            '=' => punctuator(&mut cursor, TokenKind::Equals, start),
            '@' => punctuator(&mut cursor, TokenKind::At, start),
            '|' => punctuator(&mut cursor, TokenKind::Pipe, start),
            '&' => punctuator(&mut cursor, TokenKind::Amp, start),
            '.' => ellipsis(&mut cursor, start, source)?,
            '"' => string_value(&mut cursor, start, source)?,
            c if is_name_start(c) => name(&mut cursor, start),
            c if is_digit(c) || c == '-' => number(&mut cursor, start, source)?,
            other => {
                return Err(lex_error(source, start, format!("unexpected character '{other}'")))
            }
        };

        tokens.push(token);
    }

    Ok(tokens)
}

fn punctuator(cursor: &mut Cursor<'_>, kind: TokenKind, start: Position) -> Token {
    cursor.bump();
    Token::punctuator(kind, start)
}

fn ellipsis(cursor: &mut Cursor<'_>, start: Position, source: &str) -> Result<Token, Error> {
    cursor.bump();
    if cursor.first() == Some('.') && cursor.second() == Some('.') {
        cursor.bump();
        cursor.bump();
        Ok(Token::punctuator(TokenKind::Ellipsis, start))
    } else {
        Err(lex_error(
            source,
            start,
            "unterminated spread operator, expected `...`".to_string(),
        ))
    }
}

fn is_name_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

fn is_name_continue(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn name(cursor: &mut Cursor<'_>, start: Position) -> Token {
    let from = cursor.offset();
    while cursor.first().is_some_and(is_name_continue) {
        cursor.bump();
    }
    Token::name(cursor.slice_from(from).to_string(), start)
}

/// IntValue / FloatValue, per the GraphQL grammar:
/// ```txt
/// IntValue   :: IntegerPart
/// IntegerPart :: -? (0 | [1-9][0-9]*)
/// FloatValue :: IntegerPart ((. Digit+ ExponentPart?) | ExponentPart)
/// ExponentPart :: (e|E) (+|-)? Digit+
/// ```
fn number(cursor: &mut Cursor<'_>, start: Position, source: &str) -> Result<Token, Error> {
    let from = cursor.offset();

    if cursor.first() == Some('-') {
        cursor.bump();
    }
    match cursor.first() {
        Some('0') => {
            cursor.bump();
        }
        Some(c) if is_digit(c) => {
            while cursor.first().is_some_and(is_digit) {
                cursor.bump();
            }
        }
        _ => {
            return Err(lex_error(
                source,
                start,
                "invalid number literal: expected a digit".to_string(),
            ))
        }
    }

    let mut is_float = false;

    if cursor.first() == Some('.') {
        is_float = true;
        cursor.bump();
        if !cursor.first().is_some_and(is_digit) {
            return Err(lex_error(
                source,
                start,
                "invalid number literal: expected a digit after '.'".to_string(),
            ));
        }
        while cursor.first().is_some_and(is_digit) {
            cursor.bump();
        }
    }

    if matches!(cursor.first(), Some('e') | Some('E')) {
        is_float = true;
        cursor.bump();
        if matches!(cursor.first(), Some('+') | Some('-')) {
            cursor.bump();
        }
        if !cursor.first().is_some_and(is_digit) {
            return Err(lex_error(
                source,
                start,
                "invalid number literal: expected a digit in exponent".to_string(),
            ));
        }
        while cursor.first().is_some_and(is_digit) {
            cursor.bump();
        }
    }

    let text = cursor.slice_from(from);
    if is_float {
        let value: f64 = text
            .parse()
            .map_err(|_| lex_error(source, start, format!("invalid float literal '{text}'")))?;
        Ok(Token::scalar(ScalarLiteral::Float(value), start))
    } else {
        let value: i64 = text
            .parse()
            .map_err(|_| lex_error(source, start, format!("invalid int literal '{text}'")))?;
        Ok(Token::scalar(ScalarLiteral::Int(value), start))
    }
}

/// StringValue, either `"..."` or a block string `"""..."""`. Escape
/// sequences in non-block strings are decoded; block string content is
/// taken verbatim (no dedentation) since interpreting block strings is
/// explicitly out of scope (`spec.md` §1).
fn string_value(cursor: &mut Cursor<'_>, start: Position, source: &str) -> Result<Token, Error> {
    cursor.bump(); // opening quote

    if cursor.first() == Some('"') && cursor.second() == Some('"') {
        cursor.bump();
        cursor.bump();
        return block_string_value(cursor, start, source);
    }

    let mut value = String::new();
    loop {
        match cursor.first() {
            None | Some('\n') | Some('\r') => {
                return Err(lex_error(
                    source,
                    start,
                    "unterminated string literal".to_string(),
                ))
            }
            Some('"') => {
                cursor.bump();
                break;
            }
            Some('\\') => {
                cursor.bump();
                let escaped = cursor.first().ok_or_else(|| {
                    lex_error(source, start, "unterminated string literal".to_string())
                })?;
                match escaped {
                    '"' => value.push('"'),
                    '\\' => value.push('\\'),
                    '/' => value.push('/'),
                    'b' => value.push('\u{0008}'),
                    'f' => value.push('\u{000C}'),
                    'n' => value.push('\n'),
                    'r' => value.push('\r'),
                    't' => value.push('\t'),
                    'u' => {
                        cursor.bump();
                        let mut hex = String::with_capacity(4);
                        for _ in 0..4 {
                            let digit = cursor.first().ok_or_else(|| {
                                lex_error(
                                    source,
                                    start,
                                    "unterminated unicode escape".to_string(),
                                )
                            })?;
                            hex.push(digit);
                            cursor.bump();
                        }
                        let code = u32::from_str_radix(&hex, 16).map_err(|_| {
                            lex_error(source, start, format!("invalid unicode escape \\u{hex}"))
                        })?;
                        let c = char::from_u32(code).ok_or_else(|| {
                            lex_error(source, start, format!("invalid unicode escape \\u{hex}"))
                        })?;
                        value.push(c);
                        continue;
                    }
                    other => {
                        return Err(lex_error(
                            source,
                            start,
                            format!("invalid escape sequence \\{other}"),
                        ))
                    }
                }
                cursor.bump();
            }
            Some(c) => {
                value.push(c);
                cursor.bump();
            }
        }
    }

    Ok(Token::scalar(ScalarLiteral::Str(value), start))
}

fn block_string_value(
    cursor: &mut Cursor<'_>,
    start: Position,
    source: &str,
) -> Result<Token, Error> {
    let mut value = String::new();
    loop {
        match (cursor.first(), cursor.second()) {
            (Some('"'), Some('"')) => {
                let mut lookahead = cursor.clone();
                lookahead.bump();
                lookahead.bump();
                if lookahead.first() == Some('"') {
                    cursor.bump();
                    cursor.bump();
                    cursor.bump();
                    break;
                }
                value.push('"');
                cursor.bump();
            }
            (Some('\\'), Some('"')) => {
                // `\"""` escapes a literal `"""` inside a block string.
                let mut lookahead = cursor.clone();
                lookahead.bump();
                lookahead.bump();
                if lookahead.first() == Some('"') && lookahead.second() == Some('"') {
                    value.push_str("\"\"\"");
                    cursor.bump();
                    cursor.bump();
                    cursor.bump();
                    cursor.bump();
                } else {
                    value.push('\\');
                    cursor.bump();
                }
            }
            (Some(c), _) => {
                value.push(c);
                cursor.bump();
            }
            (None, _) => {
                return Err(lex_error(
                    source,
                    start,
                    "unterminated block string literal".to_string(),
                ))
            }
        }
    }

    Ok(Token::scalar(ScalarLiteral::Str(value), start))
}

fn skip_trivia(cursor: &mut Cursor<'_>) {
    loop {
        match cursor.first() {
            Some(c) if is_whitespace(c) => {
                cursor.bump();
            }
            Some(',') => {
                cursor.bump();
            }
            Some('#') => {
                while !cursor.is_eof() && !matches!(cursor.first(), Some('\n') | Some('\r')) {
                    cursor.bump();
                }
            }
            _ => break,
        }
    }
}

fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}' | '\u{000A}' | '\u{000B}' | '\u{000C}' | '\u{000D}' | '\u{0020}' | '\u{FEFF}'
    )
}

fn lex_error(source: &str, start: Position, message: String) -> Error {
    Error::LexError {
        source_text: source.to_string(),
        start,
        message,
    }
}
