//! ```txt
//! TypeSystemExtension :: SchemaExtension | TypeExtension
//! SchemaExtension :: extend schema Directives[Const]? { OperationTypeDefinition+ }
//!                   | extend schema Directives[Const]
//! TypeExtension :: ScalarTypeExtension | ObjectTypeExtension | InterfaceTypeExtension
//!                 | UnionTypeExtension | EnumTypeExtension | InputObjectTypeExtension
//! ```
//! Supplemented per `spec.md` §9's Open Question / `SPEC_FULL.md` §4.4 —
//! `spec.md` named `TypeSystemExtension` as a dropped module without
//! specifying it further, so this follows the GraphQL grammar directly.
//! Every extension kind requires extending *something* (at least one
//! directive, interface, field, member, or value) — an extension with an
//! empty body is a syntax error, not a no-op.

use crate::ast::{
    Definition, EnumTypeExtension, InputObjectTypeExtension, InterfaceTypeExtension, NamedType,
    ObjectTypeExtension, ScalarTypeExtension, SchemaExtension, UnionTypeExtension,
};
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::{combinators, TokenStream};
use crate::position::Position;

use super::{directive, enum_, input, name, object, schema, ty, union_};

pub(crate) fn type_system_extension(tokens: &mut TokenStream) -> Result<Definition, Error> {
    let start = tokens.start();
    tokens.expect_keyword("extend")?;

    if tokens.expect_optional_keyword("schema").is_some() {
        return schema_extension(tokens, start);
    }
    if tokens.expect_optional_keyword("scalar").is_some() {
        return scalar_type_extension(tokens, start);
    }
    if tokens.expect_optional_keyword("type").is_some() {
        return object_type_extension(tokens, start);
    }
    if tokens.expect_optional_keyword("interface").is_some() {
        return interface_type_extension(tokens, start);
    }
    if tokens.expect_optional_keyword("union").is_some() {
        return union_type_extension(tokens, start);
    }
    if tokens.expect_optional_keyword("enum").is_some() {
        return enum_type_extension(tokens, start);
    }
    if tokens.expect_optional_keyword("input").is_some() {
        return input_object_type_extension(tokens, start);
    }
    Err(tokens.unexpected_token())
}

fn schema_extension(tokens: &mut TokenStream, start: Position) -> Result<Definition, Error> {
    let directives = directive::directives(tokens, true)?;
    let operation_types = combinators::optional_many(
        tokens,
        TokenKind::CurlyOpen,
        TokenKind::CurlyClose,
        schema::operation_type_definition,
    )?;
    if directives.is_empty() && operation_types.is_empty() {
        return Err(tokens.unexpected_token());
    }
    Ok(Definition::SchemaExtension(SchemaExtension { directives, operation_types, position: start }))
}

fn scalar_type_extension(tokens: &mut TokenStream, start: Position) -> Result<Definition, Error> {
    let name = name::name(tokens)?;
    let directives = directive::directives(tokens, true)?;
    if directives.is_empty() {
        return Err(tokens.unexpected_token());
    }
    Ok(Definition::ScalarTypeExtension(ScalarTypeExtension { name, directives, position: start }))
}

fn object_type_extension(tokens: &mut TokenStream, start: Position) -> Result<Definition, Error> {
    let name = name::name(tokens)?;
    let interfaces = object::implements_interfaces(tokens)?;
    let directives = directive::directives(tokens, true)?;
    let fields = object::fields_definition(tokens)?;
    if interfaces.is_empty() && directives.is_empty() && fields.is_empty() {
        return Err(tokens.unexpected_token());
    }
    Ok(Definition::ObjectTypeExtension(ObjectTypeExtension {
        name,
        interfaces,
        directives,
        fields,
        position: start,
    }))
}

fn interface_type_extension(tokens: &mut TokenStream, start: Position) -> Result<Definition, Error> {
    let name = name::name(tokens)?;
    let directives = directive::directives(tokens, true)?;
    let fields = object::fields_definition(tokens)?;
    if directives.is_empty() && fields.is_empty() {
        return Err(tokens.unexpected_token());
    }
    Ok(Definition::InterfaceTypeExtension(InterfaceTypeExtension { name, directives, fields, position: start }))
}

fn union_type_extension(tokens: &mut TokenStream, start: Position) -> Result<Definition, Error> {
    let name = name::name(tokens)?;
    let directives = directive::directives(tokens, true)?;
    let types = if tokens.at(TokenKind::Equals) {
        union_member_types(tokens)?
    } else {
        Vec::new()
    };
    if directives.is_empty() && types.is_empty() {
        return Err(tokens.unexpected_token());
    }
    Ok(Definition::UnionTypeExtension(UnionTypeExtension { name, directives, types, position: start }))
}

fn union_member_types(tokens: &mut TokenStream) -> Result<Vec<NamedType>, Error> {
    tokens.expect_token(TokenKind::Equals)?;
    tokens.expect_optional_token(TokenKind::Pipe);
    let mut types = vec![ty::named_type(tokens)?];
    while tokens.expect_optional_token(TokenKind::Pipe).is_some() {
        types.push(ty::named_type(tokens)?);
    }
    Ok(types)
}

fn enum_type_extension(tokens: &mut TokenStream, start: Position) -> Result<Definition, Error> {
    let name = name::name(tokens)?;
    let directives = directive::directives(tokens, true)?;
    let values = enum_::enum_values_definition(tokens)?;
    if directives.is_empty() && values.is_empty() {
        return Err(tokens.unexpected_token());
    }
    Ok(Definition::EnumTypeExtension(EnumTypeExtension { name, directives, values, position: start }))
}

fn input_object_type_extension(tokens: &mut TokenStream, start: Position) -> Result<Definition, Error> {
    let name = name::name(tokens)?;
    let directives = directive::directives(tokens, true)?;
    let fields = input::input_fields_definition(tokens)?;
    if directives.is_empty() && fields.is_empty() {
        return Err(tokens.unexpected_token());
    }
    Ok(Definition::InputObjectTypeExtension(InputObjectTypeExtension { name, directives, fields, position: start }))
}
