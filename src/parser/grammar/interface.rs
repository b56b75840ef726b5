//! ```txt
//! InterfaceTypeDefinition :: Description? interface Name Directives[Const]? FieldsDefinition?
//! ```

use crate::ast::{InterfaceTypeDefinition, StringValue};
use crate::error::Error;
use crate::parser::TokenStream;
use crate::position::Position;

use super::{directive, name, object};

pub(crate) fn interface_type_definition(
    tokens: &mut TokenStream,
    description: Option<StringValue>,
    start: Position,
) -> Result<InterfaceTypeDefinition, Error> {
    tokens.expect_keyword("interface")?;
    let name = name::name(tokens)?;
    let directives = directive::directives(tokens, true)?;
    let fields = object::fields_definition(tokens)?;
    Ok(InterfaceTypeDefinition { description, name, directives, fields, position: start })
}
