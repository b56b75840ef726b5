//! ```txt
//! Field :: Alias? Name Arguments? Directives? SelectionSet?
//! Alias :: Name :
//! ```
//! `Alias` is distinguished from a bare `Name` purely by whether a `:`
//! follows — there's no separate lexical form, so this just looks one
//! token ahead after consuming the first `Name`.

use crate::ast::Field;
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::TokenStream;

use super::{argument, directive, name, selection};

pub(crate) fn field(tokens: &mut TokenStream) -> Result<Field, Error> {
    let start = tokens.start();
    let first = name::name(tokens)?;
    let (alias, name) = if tokens.expect_optional_token(TokenKind::Colon).is_some() {
        (Some(first), name::name(tokens)?)
    } else {
        (None, first)
    };
    let arguments = argument::arguments(tokens, false)?;
    let directives = directive::directives(tokens, false)?;
    let selection_set = if tokens.at(TokenKind::CurlyOpen) {
        Some(selection::selection_set(tokens)?)
    } else {
        None
    };
    Ok(Field { alias, name, arguments, directives, selection_set, position: start })
}
