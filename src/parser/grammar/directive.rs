//! ```txt
//! Directives[Const] :: Directive[?Const]+
//! Directive[Const] :: @ Name Arguments[?Const]?
//! DirectiveDefinition :: Description? directive @ Name ArgumentsDefinition? repeatable? on DirectiveLocations
//! DirectiveLocations :: |? DirectiveLocation (| DirectiveLocation)*
//! ```
//! `directives` has no brackets of its own — it's just "while the current
//! token is `@`, parse one more `Directive`" — so it doesn't go through the
//! list combinators module at all.

use crate::ast::{Directive, DirectiveDefinition, DirectiveLocation, StringValue};
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::TokenStream;
use crate::position::Position;

use super::{argument, name, object};

pub(crate) fn directives(tokens: &mut TokenStream, is_const: bool) -> Result<Vec<Directive>, Error> {
    let mut directives = Vec::new();
    while tokens.at(TokenKind::At) {
        directives.push(directive(tokens, is_const)?);
    }
    Ok(directives)
}

fn directive(tokens: &mut TokenStream, is_const: bool) -> Result<Directive, Error> {
    let start = tokens.start();
    tokens.expect_token(TokenKind::At)?;
    let name = name::name(tokens)?;
    let arguments = argument::arguments(tokens, is_const)?;
    Ok(Directive { name, arguments, position: start })
}

pub(crate) fn directive_definition(
    tokens: &mut TokenStream,
    description: Option<StringValue>,
    start: Position,
) -> Result<DirectiveDefinition, Error> {
    tokens.expect_keyword("directive")?;
    tokens.expect_token(TokenKind::At)?;
    let name = name::name(tokens)?;
    let arguments = object::arguments_definition(tokens)?;
    let repeatable = tokens.expect_optional_keyword("repeatable").is_some();
    tokens.expect_keyword("on")?;
    let locations = directive_locations(tokens)?;
    Ok(DirectiveDefinition { description, name, arguments, repeatable, locations, position: start })
}

fn directive_locations(tokens: &mut TokenStream) -> Result<Vec<DirectiveLocation>, Error> {
    tokens.expect_optional_token(TokenKind::Pipe);
    let mut locations = vec![directive_location(tokens)?];
    while tokens.expect_optional_token(TokenKind::Pipe).is_some() {
        locations.push(directive_location(tokens)?);
    }
    Ok(locations)
}

/// An unrecognized location name is a syntax error, not a silently dropped
/// location — resolving the Open Question in `spec.md` §9 the same way
/// `value`'s `is_const` check does.
fn directive_location(tokens: &mut TokenStream) -> Result<DirectiveLocation, Error> {
    if !tokens.at(TokenKind::Name) {
        return Err(tokens.unexpected_token());
    }
    let text = tokens
        .peek()
        .name_value()
        .expect("checked at() above")
        .to_string();
    match DirectiveLocation::from_name(&text) {
        Some(location) => {
            tokens.next();
            Ok(location)
        }
        None => Err(tokens.unexpected_token()),
    }
}
