//! ```txt
//! ScalarTypeDefinition :: Description? scalar Name Directives[Const]?
//! ```

use crate::ast::{ScalarTypeDefinition, StringValue};
use crate::error::Error;
use crate::parser::TokenStream;
use crate::position::Position;

use super::{directive, name};

pub(crate) fn scalar_type_definition(
    tokens: &mut TokenStream,
    description: Option<StringValue>,
    start: Position,
) -> Result<ScalarTypeDefinition, Error> {
    tokens.expect_keyword("scalar")?;
    let name = name::name(tokens)?;
    let directives = directive::directives(tokens, true)?;
    Ok(ScalarTypeDefinition { description, name, directives, position: start })
}
