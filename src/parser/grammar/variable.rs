//! ```txt
//! Variable :: $ Name
//! ```

use crate::ast::Variable;
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::TokenStream;

use super::name;

pub(crate) fn variable(tokens: &mut TokenStream) -> Result<Variable, Error> {
    let start = tokens.start();
    tokens.expect_token(TokenKind::Dollar)?;
    let name = name::name(tokens)?;
    Ok(Variable { name, position: start })
}
