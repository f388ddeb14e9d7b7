use winnow::Parser;

use crate::Value;

type Coercion = fn(&str) -> Option<Value>;

/// Coercion rules in precedence order; the first rule that accepts the
/// literal decides its type.
const PRECEDENCE: [Coercion; 3] = [true_literal, false_literal, number_literal];

fn true_literal(literal: &str) -> Option<Value> {
    (literal == "true").then_some(Value::Bool(true))
}

fn false_literal(literal: &str) -> Option<Value> {
    (literal == "false").then_some(Value::Bool(false))
}

fn number_literal(literal: &str) -> Option<Value> {
    crate::parse::decimal.parse(literal).ok().map(Value::Number)
}

/// Convert a raw rule literal into a typed [`Value`].
///
/// `true` and `false` (exact case) become booleans, a literal that is entirely
/// a decimal number becomes a number, anything else stays a string. Total:
/// every literal coerces to something.
///
/// ```
/// use segrule::{coerce, Value};
///
/// assert_eq!(coerce("true"), Value::Bool(true));
/// assert_eq!(coerce("4.0"), Value::Number(4.0));
/// assert_eq!(coerce("Smartphones"), Value::String("Smartphones".into()));
/// ```
#[must_use]
pub fn coerce(literal: &str) -> Value {
    let literal = literal.trim();
    PRECEDENCE
        .iter()
        .find_map(|rule| rule(literal))
        .unwrap_or_else(|| Value::String(literal.to_owned()))
}
