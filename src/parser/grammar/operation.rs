//! ```txt
//! OperationDefinition :: OperationType Name? VariableDefinitions? Directives? SelectionSet
//!                      |  SelectionSet
//! OperationType :: query | mutation | subscription
//! VariableDefinitions :: ( VariableDefinition+ )
//! VariableDefinition :: Variable : Type DefaultValue? Directives[Const]?
//! ```
//! The shorthand form (just a bare `SelectionSet`) is the June 2018
//! grammar's `query` shorthand; `VariableDefinition`'s trailing
//! `Directives[Const]?` isn't in the June 2018 grammar but is exercised by
//! `spec.md` §8 scenario 6 (`$x: Boolean = false @bar`), so we carry it the
//! way later GraphQL editions define it (see `DESIGN.md`).

use crate::ast::{OperationDefinition, OperationType, VariableDefinition};
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::{combinators, TokenStream};

use super::{directive, name, selection, ty, value, variable};

pub(crate) fn operation_definition(tokens: &mut TokenStream) -> Result<OperationDefinition, Error> {
    let start = tokens.start();

    if tokens.at(TokenKind::CurlyOpen) {
        let selection_set = selection::selection_set(tokens)?;
        return Ok(OperationDefinition {
            operation: OperationType::Query,
            name: None,
            variable_definitions: Vec::new(),
            directives: Vec::new(),
            selection_set,
            position: start,
        });
    }

    let operation = operation_type(tokens)?;
    let name = if tokens.at(TokenKind::Name) { Some(name::name(tokens)?) } else { None };
    let variable_definitions = variable_definitions(tokens)?;
    let directives = directive::directives(tokens, false)?;
    let selection_set = selection::selection_set(tokens)?;
    Ok(OperationDefinition {
        operation,
        name,
        variable_definitions,
        directives,
        selection_set,
        position: start,
    })
}

pub(crate) fn operation_type(tokens: &mut TokenStream) -> Result<OperationType, Error> {
    if tokens.expect_optional_keyword("query").is_some() {
        Ok(OperationType::Query)
    } else if tokens.expect_optional_keyword("mutation").is_some() {
        Ok(OperationType::Mutation)
    } else if tokens.expect_optional_keyword("subscription").is_some() {
        Ok(OperationType::Subscription)
    } else {
        Err(tokens.unexpected_token())
    }
}

fn variable_definitions(tokens: &mut TokenStream) -> Result<Vec<VariableDefinition>, Error> {
    combinators::optional_many(tokens, TokenKind::ParenOpen, TokenKind::ParenClose, variable_definition)
}

fn variable_definition(tokens: &mut TokenStream) -> Result<VariableDefinition, Error> {
    let start = tokens.start();
    let variable = variable::variable(tokens)?;
    tokens.expect_token(TokenKind::Colon)?;
    let ty = ty::ty(tokens)?;
    let default_value = if tokens.expect_optional_token(TokenKind::Equals).is_some() {
        Some(value::value(tokens, true)?)
    } else {
        None
    };
    let directives = directive::directives(tokens, true)?;
    Ok(VariableDefinition { variable, ty, default_value, directives, position: start })
}
