//! ```txt
//! Value[Const] :
//!   if !Const: Variable
//!   IntValue
//!   FloatValue
//!   StringValue
//!   BooleanValue
//!   NullValue
//!   EnumValue
//!   ListValue[?Const]
//!   ObjectValue[?Const]
//! ```
//! `is_const` threads the `[Const]` grammar parameter explicitly (§5
//! "Const-context propagation"), rather than through parser-global state:
//! a `Variable` found while `is_const` is `true` is a syntax error, which
//! resolves the Open Question in `spec.md` §9 the same way as the unknown
//! `DirectiveLocation` case — reject rather than silently drop.
//!
//! `ListValue`/`ObjectValue` recurse back into `value`, so this enters a
//! [recursion guard](crate::parser::RecursionGuard) like `ty` and
//! `selection_set` do.

use crate::ast::{BooleanValue, EnumValue, FloatValue, IntValue, ListValue, Name, NullValue,
    ObjectField, ObjectValue, StringValue, Value};
use crate::error::Error;
use crate::lexer::{ScalarLiteral, TokenKind};
use crate::parser::{combinators, TokenStream};

use super::{name, variable};

pub(crate) fn value(tokens: &mut TokenStream, is_const: bool) -> Result<Value, Error> {
    let _guard = tokens.enter()?;
    let start = tokens.start();

    if tokens.at(TokenKind::Dollar) {
        if is_const {
            return Err(tokens.unexpected_token());
        }
        return Ok(Value::Variable(variable::variable(tokens)?));
    }

    if tokens.at(TokenKind::BracketOpen) {
        let values =
            combinators::any(tokens, TokenKind::BracketOpen, TokenKind::BracketClose, |t| {
                value(t, is_const)
            })?;
        return Ok(Value::List(ListValue { values, position: start }));
    }

    if tokens.at(TokenKind::CurlyOpen) {
        let fields =
            combinators::any(tokens, TokenKind::CurlyOpen, TokenKind::CurlyClose, |t| {
                object_field(t, is_const)
            })?;
        return Ok(Value::Object(ObjectValue { fields, position: start }));
    }

    if let Some(literal) = tokens.peek().scalar_value().cloned() {
        tokens.next();
        return Ok(match literal {
            ScalarLiteral::Int(v) => Value::Int(IntValue { value: v, position: start }),
            ScalarLiteral::Float(v) => Value::Float(FloatValue { value: v, position: start }),
            ScalarLiteral::Str(v) => Value::String(StringValue { value: v, position: start }),
        });
    }

    match tokens.peek().name_value().map(str::to_string) {
        Some(n) if n == "true" => {
            tokens.next();
            Ok(Value::Boolean(BooleanValue { value: true, position: start }))
        }
        Some(n) if n == "false" => {
            tokens.next();
            Ok(Value::Boolean(BooleanValue { value: false, position: start }))
        }
        Some(n) if n == "null" => {
            tokens.next();
            Ok(Value::Null(NullValue { position: start }))
        }
        Some(n) => {
            tokens.next();
            Ok(Value::Enum(EnumValue { value: n, position: start }))
        }
        None => Err(tokens.unexpected_token()),
    }
}

fn object_field(tokens: &mut TokenStream, is_const: bool) -> Result<ObjectField, Error> {
    let start = tokens.start();
    let name: Name = name::name(tokens)?;
    tokens.expect_token(TokenKind::Colon)?;
    let value = value(tokens, is_const)?;
    Ok(ObjectField { name, value, position: start })
}
