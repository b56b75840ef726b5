//! ```txt
//! InputObjectTypeDefinition :: Description? input Name Directives[Const]? InputFieldsDefinition?
//! InputFieldsDefinition :: { InputValueDefinition+ }
//! ```

use crate::ast::{InputObjectTypeDefinition, InputValueDefinition, StringValue};
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::{combinators, TokenStream};
use crate::position::Position;

use super::{directive, name, object};

pub(crate) fn input_object_type_definition(
    tokens: &mut TokenStream,
    description: Option<StringValue>,
    start: Position,
) -> Result<InputObjectTypeDefinition, Error> {
    tokens.expect_keyword("input")?;
    let name = name::name(tokens)?;
    let directives = directive::directives(tokens, true)?;
    let fields = input_fields_definition(tokens)?;
    Ok(InputObjectTypeDefinition { description, name, directives, fields, position: start })
}

pub(crate) fn input_fields_definition(tokens: &mut TokenStream) -> Result<Vec<InputValueDefinition>, Error> {
    combinators::optional_many(
        tokens,
        TokenKind::CurlyOpen,
        TokenKind::CurlyClose,
        object::input_value_definition,
    )
}
