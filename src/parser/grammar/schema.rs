//! ```txt
//! SchemaDefinition :: Description? schema Directives[Const]? { OperationTypeDefinition+ }
//! OperationTypeDefinition :: OperationType : NamedType
//! ```

use crate::ast::{OperationTypeDefinition, SchemaDefinition, StringValue};
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::{combinators, TokenStream};
use crate::position::Position;

use super::{directive, operation, ty};

pub(crate) fn schema_definition(
    tokens: &mut TokenStream,
    description: Option<StringValue>,
    start: Position,
) -> Result<SchemaDefinition, Error> {
    tokens.expect_keyword("schema")?;
    let directives = directive::directives(tokens, true)?;
    let operation_types =
        combinators::many(tokens, TokenKind::CurlyOpen, TokenKind::CurlyClose, operation_type_definition)?;
    Ok(SchemaDefinition { description, directives, operation_types, position: start })
}

pub(crate) fn operation_type_definition(tokens: &mut TokenStream) -> Result<OperationTypeDefinition, Error> {
    let start = tokens.start();
    let operation = operation::operation_type(tokens)?;
    tokens.expect_token(TokenKind::Colon)?;
    let ty = ty::named_type(tokens)?;
    Ok(OperationTypeDefinition { operation, ty, position: start })
}
