//! ```txt
//! SelectionSet :: { Selection+ }
//! Selection :: Field | FragmentSpread | InlineFragment
//! ```
//! `SelectionSet` recurses into itself through `Field`'s own (optional)
//! `SelectionSet` and through `InlineFragment`, so this enters a
//! [recursion guard](crate::parser::RecursionGuard) like `ty` and `value`.

use crate::ast::{Selection, SelectionSet};
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::{combinators, TokenStream};

use super::{field, fragment};

pub(crate) fn selection_set(tokens: &mut TokenStream) -> Result<SelectionSet, Error> {
    let _guard = tokens.enter()?;
    let start = tokens.start();
    let selections =
        combinators::many(tokens, TokenKind::CurlyOpen, TokenKind::CurlyClose, selection)?;
    Ok(SelectionSet { selections, position: start })
}

fn selection(tokens: &mut TokenStream) -> Result<Selection, Error> {
    if tokens.at(TokenKind::Ellipsis) {
        fragment::fragment_selection(tokens)
    } else {
        Ok(Selection::Field(field::field(tokens)?))
    }
}
