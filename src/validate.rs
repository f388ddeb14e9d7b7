use crate::parse::RuleTokens;
use crate::{coerce, Comparison, FieldKind, FieldSchema, Operator, RuleError, Value, ValueKind};

/// Validate one tokenized rule against the schema.
///
/// Checks run in a fixed order and the first failure is returned:
/// the field must exist, the operator must be one of the six legal tokens,
/// and the coerced literal must fit the field's kind.
pub(crate) fn validate(
    tokens: &RuleTokens<'_>,
    schema: &FieldSchema,
) -> Result<Comparison, RuleError> {
    let spec = schema
        .get(tokens.field)
        .ok_or_else(|| RuleError::UnknownField {
            field: tokens.field.to_owned(),
            line: tokens.line.to_owned(),
        })?;

    let op = Operator::from_token(tokens.operator).ok_or_else(|| {
        RuleError::UnsupportedOperator {
            operator: tokens.operator.to_owned(),
            line: tokens.line.to_owned(),
        }
    })?;

    let value = typed_value(tokens, spec.kind())?;

    Ok(Comparison {
        field: spec.name().to_owned(),
        op,
        value,
    })
}

fn typed_value(tokens: &RuleTokens<'_>, kind: &FieldKind) -> Result<Value, RuleError> {
    let mismatch = |expected: ValueKind| RuleError::TypeMismatch {
        field: tokens.field.to_owned(),
        literal: tokens.literal.to_owned(),
        expected,
        line: tokens.line.to_owned(),
    };

    match kind {
        FieldKind::Number => match coerce(tokens.literal) {
            value @ Value::Number(_) => Ok(value),
            _ => Err(mismatch(ValueKind::Number)),
        },
        FieldKind::Boolean => match coerce(tokens.literal) {
            value @ Value::Bool(_) => Ok(value),
            _ => Err(mismatch(ValueKind::Boolean)),
        },
        // Membership is checked on the literal as written, not the coerced value.
        FieldKind::Enum(allowed) => {
            if allowed.contains(tokens.literal) {
                Ok(Value::String(tokens.literal.to_owned()))
            } else {
                Err(RuleError::InvalidEnumValue {
                    field: tokens.field.to_owned(),
                    literal: tokens.literal.to_owned(),
                    allowed: allowed.iter().cloned().collect(),
                    line: tokens.line.to_owned(),
                })
            }
        }
        FieldKind::String => Ok(Value::String(tokens.literal.to_owned())),
    }
}
