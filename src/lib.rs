//! A spec-compliant, fail-fast GraphQL document and type-system parser
//! producing a typed, tagged-variant AST (see `DESIGN.md` for how this
//! diverges from its teacher crate's lossless CST).
//!
//! The grammar engine (§4 of `SPEC_FULL.md`) is fail-fast: a parse stops at
//! the first syntactic or lexical anomaly and returns a single [`Error`],
//! rather than accumulating a list of diagnostics. For the common case, use
//! [`parse`], [`parse_value`] or [`parse_type`] directly; for control over
//! the recursion limit, build a [`Parser`].
//!
//! ```
//! use graphql_ast_parser::parse;
//!
//! let document = parse("{ hero { name } }").unwrap();
//! assert_eq!(document.definitions.len(), 1);
//! ```

pub mod ast;
mod error;
mod lexer;
mod parser;
mod position;

pub use error::{Error, Expected};
pub use parser::{Parser, DEFAULT_RECURSION_LIMIT};
pub use position::Position;

pub use ast::{Document, Type, Value};

use lexer::TokenKind;

/// Parses a complete GraphQL document (executable definitions and/or
/// type-system definitions/extensions, freely mixed per the grammar).
pub fn parse(source: &str) -> Result<Document, Error> {
    Parser::new(source).parse()
}

/// Parses a single standalone [`Value`] (e.g. a default value or argument
/// literal), requiring the entire input to be consumed.
pub fn parse_value(source: &str) -> Result<Value, Error> {
    let mut tokens = parser::TokenStream::new(source, DEFAULT_RECURSION_LIMIT)?;
    let value = parser::grammar::value::value(&mut tokens, false)?;
    tokens.expect_token(TokenKind::Eof)?;
    Ok(value)
}

/// Parses a single standalone [`Type`] reference (e.g. `[String!]!`),
/// requiring the entire input to be consumed.
pub fn parse_type(source: &str) -> Result<Type, Error> {
    let mut tokens = parser::TokenStream::new(source, DEFAULT_RECURSION_LIMIT)?;
    let ty = parser::grammar::ty::ty(&mut tokens)?;
    tokens.expect_token(TokenKind::Eof)?;
    Ok(ty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{AstNode, Definition, OperationType, Selection};
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_shorthand_query() {
        let document = parse("{ hero { name } }").unwrap();
        assert_eq!(document.definitions.len(), 1);
        let Definition::Operation(op) = &document.definitions[0] else {
            panic!("expected an operation definition");
        };
        assert_eq!(op.operation, OperationType::Query);
        assert!(op.name.is_none());
        assert_eq!(op.selection_set.selections.len(), 1);
    }

    #[test]
    fn parses_named_query_with_variables_and_directive() {
        let document =
            parse("query Foo($x: Boolean = false @bar) { field }").unwrap();
        let Definition::Operation(op) = &document.definitions[0] else {
            panic!("expected an operation definition");
        };
        assert_eq!(op.name.as_ref().unwrap().value, "Foo");
        assert_eq!(op.variable_definitions.len(), 1);
        let variable_definition = &op.variable_definitions[0];
        assert_eq!(variable_definition.variable.name.value, "x");
        assert_eq!(variable_definition.directives.len(), 1);
        assert_eq!(variable_definition.directives[0].name.value, "bar");
    }

    #[test]
    fn rejects_empty_selection_set() {
        let err = parse("{ }").unwrap_err();
        assert!(matches!(err, Error::SyntaxError { .. }));
    }

    #[test]
    fn rejects_variable_in_const_context() {
        let err = parse("query ($x: Int = $y) { field }").unwrap_err();
        assert!(matches!(err, Error::UnexpectedToken { .. }));
    }

    #[test]
    fn rejects_on_as_fragment_name() {
        let err = parse("fragment on on Foo { field }").unwrap_err();
        assert!(matches!(err, Error::UnexpectedToken { .. }));
    }

    #[test]
    fn rejects_unknown_directive_location() {
        let err = parse("directive @skip on NOT_A_LOCATION").unwrap_err();
        assert!(matches!(err, Error::UnexpectedToken { .. }));
    }

    #[test]
    fn parses_fragment_spread_and_inline_fragment() {
        let document = parse(
            "{ ...Frag ... on Droid { primaryFunction } ... { id } }",
        )
        .unwrap();
        let Definition::Operation(op) = &document.definitions[0] else {
            panic!("expected an operation definition");
        };
        assert_eq!(op.selection_set.selections.len(), 3);
        assert!(matches!(op.selection_set.selections[0], Selection::FragmentSpread(_)));
        assert!(matches!(op.selection_set.selections[1], Selection::InlineFragment(_)));
        assert!(matches!(op.selection_set.selections[2], Selection::InlineFragment(_)));
    }

    #[test]
    fn parses_object_type_definition_with_interfaces() {
        let document = parse(
            r#""Description" type Droid implements Character & Sentient {
                id: ID!
                name: String
            }"#,
        )
        .unwrap();
        let Definition::ObjectType(object) = &document.definitions[0] else {
            panic!("expected an object type definition");
        };
        assert_eq!(object.description.as_ref().unwrap().value, "Description");
        assert_eq!(object.interfaces.len(), 2);
        assert_eq!(object.fields.len(), 2);
    }

    #[test]
    fn parses_union_and_input_and_extension() {
        let document = parse(
            "union SearchResult = Human | Droid\n\
             input Point { x: Int y: Int }\n\
             extend type Droid @deprecated",
        )
        .unwrap();
        assert_eq!(document.definitions.len(), 3);
        assert!(matches!(document.definitions[0], Definition::UnionType(_)));
        assert!(matches!(document.definitions[1], Definition::InputObjectType(_)));
        assert!(matches!(document.definitions[2], Definition::ObjectTypeExtension(_)));
    }

    #[test]
    fn empty_type_extension_is_a_syntax_error() {
        let err = parse("extend type Droid").unwrap_err();
        assert!(matches!(err, Error::UnexpectedToken { .. }));
    }

    #[test]
    fn parse_value_rejects_trailing_tokens() {
        let err = parse_value("1 2").unwrap_err();
        assert!(matches!(err, Error::SyntaxError { .. }));
    }

    #[test]
    fn parse_type_parses_non_null_list() {
        let ty = parse_type("[String!]!").unwrap();
        assert_eq!(ty.to_mapping(), parse_type("[String!]!").unwrap().to_mapping());
        assert!(matches!(ty, Type::NonNull(_)));
    }

    #[test]
    fn recursion_limit_is_enforced() {
        let deeply_nested_type =
            format!("query($x: {}Int{}) {{ field }}", "[".repeat(2000), "]".repeat(2000));
        let err = Parser::new(&deeply_nested_type)
            .recursion_limit(50)
            .parse()
            .unwrap_err();
        assert!(matches!(err, Error::RecursionLimitExceeded));
    }
}
