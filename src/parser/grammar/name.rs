//! ```txt
//! Name :: /[_A-Za-z][_0-9A-Za-z]*/
//! ```
//! Lexed as a single `Name` token (§3.1); this just projects that token
//! into an AST [`Name`] node.

use crate::ast::Name;
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::TokenStream;

pub(crate) fn name(tokens: &mut TokenStream) -> Result<Name, Error> {
    let start = tokens.start();
    let token = tokens.expect_token(TokenKind::Name)?;
    let value = token
        .name_value()
        .expect("a Name-kind token always carries a Name value")
        .to_string();
    Ok(Name { value, position: start })
}
