//! ```txt
//! Description :: StringValue
//! ```
//! Every type-system definition and extension may be preceded by a
//! `Description`, which is just a `StringValue` literal — there's no
//! dedicated lexical form for it.

use crate::ast::StringValue;
use crate::error::Error;
use crate::lexer::{ScalarLiteral, TokenValue};
use crate::parser::TokenStream;

pub(crate) fn description(tokens: &mut TokenStream) -> Result<Option<StringValue>, Error> {
    if !matches!(&tokens.peek().value, Some(TokenValue::Scalar(ScalarLiteral::Str(_)))) {
        return Ok(None);
    }
    let start = tokens.start();
    let token = tokens.next();
    let value = match token.value {
        Some(TokenValue::Scalar(ScalarLiteral::Str(value))) => value,
        _ => unreachable!("checked above"),
    };
    Ok(Some(StringValue { value, position: start }))
}
