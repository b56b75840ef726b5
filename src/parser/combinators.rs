//! The three list-shaped combinators every bracketed grammar production
//! reduces to (§4.5). They differ only in whether the opening delimiter is
//! mandatory and whether the close check happens before or after the first
//! item, which is exactly the degrees of freedom the grammar needs:
//!
//! - [`many`]: opening delimiter required, at least one item, close checked
//!   *after* each item (`SelectionSet`: `{ Selection+ }`).
//! - [`optional_many`]: the whole bracketed group is optional; once the
//!   opening delimiter is seen, behaves like `many` (`Arguments`:
//!   `( Argument+ )?`).
//! - [`any`]: opening delimiter required, zero or more items, close checked
//!   *before* each item so an empty body is allowed (`ListValue`:
//!   `[ Value* ]`).

use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::TokenStream;

pub(crate) fn many<T>(
    tokens: &mut TokenStream,
    open: TokenKind,
    close: TokenKind,
    mut parse_item: impl FnMut(&mut TokenStream) -> Result<T, Error>,
) -> Result<Vec<T>, Error> {
    tokens.expect_token(open)?;
    let mut items = vec![parse_item(tokens)?];
    while tokens.expect_optional_token(close).is_none() {
        items.push(parse_item(tokens)?);
    }
    Ok(items)
}

pub(crate) fn optional_many<T>(
    tokens: &mut TokenStream,
    open: TokenKind,
    close: TokenKind,
    parse_item: impl FnMut(&mut TokenStream) -> Result<T, Error>,
) -> Result<Vec<T>, Error> {
    if !tokens.at(open) {
        return Ok(Vec::new());
    }
    many(tokens, open, close, parse_item)
}

pub(crate) fn any<T>(
    tokens: &mut TokenStream,
    open: TokenKind,
    close: TokenKind,
    mut parse_item: impl FnMut(&mut TokenStream) -> Result<T, Error>,
) -> Result<Vec<T>, Error> {
    tokens.expect_token(open)?;
    let mut items = Vec::new();
    while tokens.expect_optional_token(close).is_none() {
        items.push(parse_item(tokens)?);
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenKind;

    fn stream(source: &'static str) -> TokenStream<'static> {
        TokenStream::new(source, crate::parser::DEFAULT_RECURSION_LIMIT).unwrap()
    }

    #[test]
    fn many_requires_at_least_one_item() {
        let mut tokens = stream("{}");
        let err = many(&mut tokens, TokenKind::CurlyOpen, TokenKind::CurlyClose, |t| {
            t.expect_token(TokenKind::Name)
        });
        assert!(err.is_err());
    }

    #[test]
    fn optional_many_returns_empty_without_consuming() {
        let mut tokens = stream("foo");
        let items = optional_many(&mut tokens, TokenKind::ParenOpen, TokenKind::ParenClose, |t| {
            t.expect_token(TokenKind::Name)
        })
        .unwrap();
        assert!(items.is_empty());
        assert!(tokens.at(TokenKind::Name));
    }

    #[test]
    fn any_allows_empty_body() {
        let mut tokens = stream("[]");
        let items = any(&mut tokens, TokenKind::BracketOpen, TokenKind::BracketClose, |t| {
            t.expect_token(TokenKind::Name)
        })
        .unwrap();
        assert!(items.is_empty());
    }
}
