//! ```txt
//! EnumTypeDefinition :: Description? enum Name Directives[Const]? EnumValuesDefinition?
//! EnumValuesDefinition :: { EnumValueDefinition+ }
//! EnumValueDefinition :: Description? EnumValue Directives[Const]?
//! EnumValue :: Name but not true, false or null
//! ```

use crate::ast::{EnumTypeDefinition, EnumValueDefinition, Name, StringValue};
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::{combinators, TokenStream};
use crate::position::Position;

use super::{description, directive, name};

pub(crate) fn enum_type_definition(
    tokens: &mut TokenStream,
    description: Option<StringValue>,
    start: Position,
) -> Result<EnumTypeDefinition, Error> {
    tokens.expect_keyword("enum")?;
    let name = name::name(tokens)?;
    let directives = directive::directives(tokens, true)?;
    let values = enum_values_definition(tokens)?;
    Ok(EnumTypeDefinition { description, name, directives, values, position: start })
}

pub(crate) fn enum_values_definition(tokens: &mut TokenStream) -> Result<Vec<EnumValueDefinition>, Error> {
    combinators::optional_many(
        tokens,
        TokenKind::CurlyOpen,
        TokenKind::CurlyClose,
        enum_value_definition,
    )
}

fn enum_value_definition(tokens: &mut TokenStream) -> Result<EnumValueDefinition, Error> {
    let start = tokens.start();
    let description = description::description(tokens)?;
    let value = enum_value_name(tokens)?;
    let directives = directive::directives(tokens, true)?;
    Ok(EnumValueDefinition { description, value, directives, position: start })
}

fn enum_value_name(tokens: &mut TokenStream) -> Result<Name, Error> {
    if matches!(tokens.peek().name_value(), Some("true") | Some("false") | Some("null")) {
        return Err(tokens.unexpected_token());
    }
    name::name(tokens)
}
