//! ```txt
//! Type :: NamedType | ListType | NonNullType
//! NamedType :: Name
//! ListType :: [ Type ]
//! NonNullType :: NamedType ! | ListType !
//! ```
//! `Type` recurses into itself through `ListType`'s element type, so this
//! enters a [recursion guard](crate::parser::RecursionGuard) the same way
//! `value` and `selection_set` do.

use crate::ast::{ListType, NamedType, NonNullType, NonNullableType, Type};
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::TokenStream;

use super::name;

pub(crate) fn ty(tokens: &mut TokenStream) -> Result<Type, Error> {
    let _guard = tokens.enter()?;
    let start = tokens.start();
    let base = base_type(tokens)?;
    if tokens.expect_optional_token(TokenKind::Exclamation).is_none() {
        return Ok(base);
    }
    let inner = match base {
        Type::Named(named) => NonNullableType::Named(named),
        Type::List(list) => NonNullableType::List(list),
        Type::NonNull(_) => unreachable!("base_type never produces a NonNullType"),
    };
    Ok(Type::NonNull(NonNullType { ty: Box::new(inner), position: start }))
}

fn base_type(tokens: &mut TokenStream) -> Result<Type, Error> {
    let start = tokens.start();
    if tokens.expect_optional_token(TokenKind::BracketOpen).is_some() {
        let element = ty(tokens)?;
        tokens.expect_token(TokenKind::BracketClose)?;
        Ok(Type::List(ListType { ty: Box::new(element), position: start }))
    } else {
        Ok(Type::Named(named_type(tokens)?))
    }
}

/// `NamedType` on its own, used wherever the grammar wants exactly a name
/// (`TypeCondition`, `ImplementsInterfaces`, `UnionMemberTypes`, ...) rather
/// than the full `Type` production.
pub(crate) fn named_type(tokens: &mut TokenStream) -> Result<NamedType, Error> {
    let start = tokens.start();
    let name = name::name(tokens)?;
    Ok(NamedType { name, position: start })
}
