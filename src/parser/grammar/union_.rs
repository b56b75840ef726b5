//! ```txt
//! UnionTypeDefinition :: Description? union Name Directives[Const]? UnionMemberTypes?
//! UnionMemberTypes :: = |? NamedType (| NamedType)*
//! ```
//! Supplemented per `spec.md` §9's Open Question / `SPEC_FULL.md` §4.4 —
//! the distilled spec dropped `union`, we fill it back in from the GraphQL
//! grammar since `original_source/` carried nothing to resolve it against.

use crate::ast::{NamedType, StringValue, UnionTypeDefinition};
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::TokenStream;
use crate::position::Position;

use super::{directive, name, ty};

pub(crate) fn union_type_definition(
    tokens: &mut TokenStream,
    description: Option<StringValue>,
    start: Position,
) -> Result<UnionTypeDefinition, Error> {
    tokens.expect_keyword("union")?;
    let name = name::name(tokens)?;
    let directives = directive::directives(tokens, true)?;
    let types = union_member_types(tokens)?;
    Ok(UnionTypeDefinition { description, name, directives, types, position: start })
}

fn union_member_types(tokens: &mut TokenStream) -> Result<Vec<NamedType>, Error> {
    if tokens.expect_optional_token(TokenKind::Equals).is_none() {
        return Ok(Vec::new());
    }
    tokens.expect_optional_token(TokenKind::Pipe);
    let mut types = vec![ty::named_type(tokens)?];
    while tokens.expect_optional_token(TokenKind::Pipe).is_some() {
        types.push(ty::named_type(tokens)?);
    }
    Ok(types)
}
