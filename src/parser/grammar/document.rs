//! ```txt
//! Document :: Definition+
//! Definition :: ExecutableDefinition | TypeSystemDefinition | TypeSystemExtension
//! ExecutableDefinition :: OperationDefinition | FragmentDefinition
//! TypeSystemDefinition :: SchemaDefinition | TypeDefinition | DirectiveDefinition
//! TypeDefinition :: ScalarTypeDefinition | ObjectTypeDefinition | InterfaceTypeDefinition
//!                 | UnionTypeDefinition | EnumTypeDefinition | InputObjectTypeDefinition
//! ```
//! The entry point: dispatches on the leading keyword (or `{` for the
//! operation shorthand) and loops until EOF. `spec.md` §8 invariant 1: a
//! successful parse never produces an empty `definitions` list — enforced
//! here directly, since `Document` has no bracket delimiters for the list
//! combinators to hook into.

use crate::ast::{Definition, Document};
use crate::error::Error;
use crate::lexer::{ScalarLiteral, Token, TokenKind, TokenValue};
use crate::parser::TokenStream;

use super::{description, directive, enum_, extensions, fragment, input, interface, object,
    operation, scalar, schema, union_};

pub(crate) fn document(tokens: &mut TokenStream) -> Result<Document, Error> {
    let start = tokens.start();
    let mut definitions = Vec::new();
    while !tokens.at(TokenKind::Eof) {
        definitions.push(definition(tokens)?);
    }
    if definitions.is_empty() {
        return Err(tokens.unexpected_token());
    }
    Ok(Document { definitions, position: start })
}

fn definition(tokens: &mut TokenStream) -> Result<Definition, Error> {
    if tokens.at(TokenKind::CurlyOpen)
        || tokens.at_keyword("query")
        || tokens.at_keyword("mutation")
        || tokens.at_keyword("subscription")
    {
        return Ok(Definition::Operation(operation::operation_definition(tokens)?));
    }
    if tokens.at_keyword("fragment") {
        return Ok(Definition::Fragment(fragment::fragment_definition(tokens)?));
    }
    if tokens.at_keyword("extend") {
        return extensions::type_system_extension(tokens);
    }

    // A leading string SCALAR only begins a `Description` when it's actually
    // followed by a TypeSystemDefinition keyword; `lookahead()` resolves that
    // one token ahead of time rather than letting `description()` commit to
    // consuming a string that turns out to head nothing recognizable.
    if is_string_scalar(tokens.peek()) && !is_type_system_keyword(tokens.lookahead()) {
        return Err(tokens.unexpected_token());
    }

    let start = tokens.start();
    let description = description::description(tokens)?;

    if tokens.at_keyword("schema") {
        return Ok(Definition::Schema(schema::schema_definition(tokens, description, start)?));
    }
    if tokens.at_keyword("scalar") {
        return Ok(Definition::ScalarType(scalar::scalar_type_definition(tokens, description, start)?));
    }
    if tokens.at_keyword("type") {
        return Ok(Definition::ObjectType(object::object_type_definition(tokens, description, start)?));
    }
    if tokens.at_keyword("interface") {
        return Ok(Definition::InterfaceType(interface::interface_type_definition(
            tokens, description, start,
        )?));
    }
    if tokens.at_keyword("union") {
        return Ok(Definition::UnionType(union_::union_type_definition(tokens, description, start)?));
    }
    if tokens.at_keyword("enum") {
        return Ok(Definition::EnumType(enum_::enum_type_definition(tokens, description, start)?));
    }
    if tokens.at_keyword("input") {
        return Ok(Definition::InputObjectType(input::input_object_type_definition(
            tokens, description, start,
        )?));
    }
    if tokens.at_keyword("directive") {
        return Ok(Definition::Directive(directive::directive_definition(tokens, description, start)?));
    }

    Err(tokens.unexpected_token())
}

fn is_string_scalar(token: &Token) -> bool {
    matches!(token.value, Some(TokenValue::Scalar(ScalarLiteral::Str(_))))
}

fn is_type_system_keyword(token: &Token) -> bool {
    matches!(
        token.name_value(),
        Some(
            "schema" | "scalar" | "type" | "interface" | "union" | "enum" | "input" | "directive"
        )
    )
}
