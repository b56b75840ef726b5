//! ```txt
//! FragmentSpread :: ... FragmentName Directives?
//! InlineFragment :: ... TypeCondition? Directives? SelectionSet
//! FragmentDefinition :: fragment FragmentName TypeCondition Directives? SelectionSet
//! FragmentName :: Name but not on
//! TypeCondition :: on NamedType
//! ```
//! After the `...`, the three-way split between `FragmentSpread` and the
//! two `InlineFragment` shapes is purely lookahead-driven: `on` means a
//! `TypeCondition` follows, a `Name` that isn't `on` means a fragment name,
//! anything else (directly `@` or `{`) means a type-condition-less inline
//! fragment (§8 invariant 3: `fragment_name.value` is never `"on"`).

use crate::ast::{FragmentDefinition, FragmentSpread, InlineFragment, Name, Selection};
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::TokenStream;

use super::{directive, name, selection, ty};

pub(crate) fn fragment_selection(tokens: &mut TokenStream) -> Result<Selection, Error> {
    let start = tokens.start();
    tokens.expect_token(TokenKind::Ellipsis)?;

    if tokens.at_keyword("on") {
        tokens.next();
        let type_condition = ty::named_type(tokens)?;
        let directives = directive::directives(tokens, false)?;
        let selection_set = selection::selection_set(tokens)?;
        return Ok(Selection::InlineFragment(InlineFragment {
            type_condition: Some(type_condition),
            directives,
            selection_set,
            position: start,
        }));
    }

    if tokens.at(TokenKind::Name) {
        let fragment_name = fragment_name(tokens)?;
        let directives = directive::directives(tokens, false)?;
        return Ok(Selection::FragmentSpread(FragmentSpread {
            fragment_name,
            directives,
            position: start,
        }));
    }

    let directives = directive::directives(tokens, false)?;
    let selection_set = selection::selection_set(tokens)?;
    Ok(Selection::InlineFragment(InlineFragment {
        type_condition: None,
        directives,
        selection_set,
        position: start,
    }))
}

pub(crate) fn fragment_name(tokens: &mut TokenStream) -> Result<Name, Error> {
    if tokens.at_keyword("on") {
        return Err(tokens.unexpected_token());
    }
    name::name(tokens)
}

pub(crate) fn fragment_definition(tokens: &mut TokenStream) -> Result<FragmentDefinition, Error> {
    let start = tokens.start();
    tokens.expect_keyword("fragment")?;
    let name = fragment_name(tokens)?;
    tokens.expect_keyword("on")?;
    let type_condition = ty::named_type(tokens)?;
    let directives = directive::directives(tokens, false)?;
    let selection_set = selection::selection_set(tokens)?;
    Ok(FragmentDefinition { name, type_condition, directives, selection_set, position: start })
}
