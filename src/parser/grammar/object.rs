//! ```txt
//! ObjectTypeDefinition :: Description? type Name ImplementsInterfaces? Directives[Const]? FieldsDefinition?
//! ImplementsInterfaces :: implements &? NamedType (& NamedType)*
//! FieldsDefinition :: { FieldDefinition+ }
//! FieldDefinition :: Description? Name ArgumentsDefinition? : Type Directives[Const]?
//! ArgumentsDefinition :: ( InputValueDefinition+ )
//! InputValueDefinition :: Description? Name : Type DefaultValue? Directives[Const]?
//! ```
//! `field_definition`/`input_value_definition`/`arguments_definition` live
//! here (rather than splayed across `interface.rs`, `input.rs`,
//! `directive.rs`) because `ObjectTypeDefinition` is where they're first
//! needed; every other construct that embeds them calls back into this
//! module.

use crate::ast::{FieldDefinition, InputValueDefinition, NamedType, ObjectTypeDefinition, StringValue};
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::{combinators, TokenStream};
use crate::position::Position;

use super::{description, directive, name, ty, value};

pub(crate) fn object_type_definition(
    tokens: &mut TokenStream,
    description: Option<StringValue>,
    start: Position,
) -> Result<ObjectTypeDefinition, Error> {
    tokens.expect_keyword("type")?;
    let name = name::name(tokens)?;
    let interfaces = implements_interfaces(tokens)?;
    let directives = directive::directives(tokens, true)?;
    let fields = fields_definition(tokens)?;
    Ok(ObjectTypeDefinition { description, name, interfaces, directives, fields, position: start })
}

pub(crate) fn implements_interfaces(tokens: &mut TokenStream) -> Result<Vec<NamedType>, Error> {
    if tokens.expect_optional_keyword("implements").is_none() {
        return Ok(Vec::new());
    }
    tokens.expect_optional_token(TokenKind::Amp);
    let mut interfaces = vec![ty::named_type(tokens)?];
    while tokens.expect_optional_token(TokenKind::Amp).is_some() {
        interfaces.push(ty::named_type(tokens)?);
    }
    Ok(interfaces)
}

pub(crate) fn fields_definition(tokens: &mut TokenStream) -> Result<Vec<FieldDefinition>, Error> {
    combinators::optional_many(tokens, TokenKind::CurlyOpen, TokenKind::CurlyClose, field_definition)
}

pub(crate) fn field_definition(tokens: &mut TokenStream) -> Result<FieldDefinition, Error> {
    let start = tokens.start();
    let description = description::description(tokens)?;
    let name = name::name(tokens)?;
    let arguments = arguments_definition(tokens)?;
    tokens.expect_token(TokenKind::Colon)?;
    let ty = ty::ty(tokens)?;
    let directives = directive::directives(tokens, true)?;
    Ok(FieldDefinition { description, name, arguments, ty, directives, position: start })
}

pub(crate) fn arguments_definition(tokens: &mut TokenStream) -> Result<Vec<InputValueDefinition>, Error> {
    combinators::optional_many(
        tokens,
        TokenKind::ParenOpen,
        TokenKind::ParenClose,
        input_value_definition,
    )
}

pub(crate) fn input_value_definition(tokens: &mut TokenStream) -> Result<InputValueDefinition, Error> {
    let start = tokens.start();
    let description = description::description(tokens)?;
    let name = name::name(tokens)?;
    tokens.expect_token(TokenKind::Colon)?;
    let ty = ty::ty(tokens)?;
    let default_value = if tokens.expect_optional_token(TokenKind::Equals).is_some() {
        Some(value::value(tokens, true)?)
    } else {
        None
    };
    let directives = directive::directives(tokens, true)?;
    Ok(InputValueDefinition { description, name, ty, default_value, directives, position: start })
}
