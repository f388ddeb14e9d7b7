use tracing::debug;

use crate::parse::{lines, tokenize_line};
use crate::validate::validate;
use crate::{Clause, Comparison, FieldSchema, Operator, Predicate, RuleError};

/// Compile rule text into a [`Predicate`].
///
/// Lines are tokenized and validated one at a time; the first failing line
/// aborts compilation. Empty or whitespace-only text compiles to an empty
/// predicate, which matches every product.
///
/// ```
/// use segrule::{compile, FieldSchema};
///
/// let schema = FieldSchema::catalog();
/// let predicate = compile("price > 5000\nstock_status = instock", &schema).unwrap();
/// assert_eq!(predicate.len(), 2);
/// ```
///
/// # Errors
///
/// Returns the [`RuleError`] of the first invalid line.
pub fn compile(input: &str, schema: &FieldSchema) -> Result<Predicate, RuleError> {
    let comparisons = lines(input)
        .map(|line| validate(&tokenize_line(line)?, schema))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(fold(comparisons))
}

/// Fold validated comparisons left to right into a predicate.
///
/// A later comparison on the same field replaces the earlier one; ranges
/// such as `price > 100` then `price < 500` are not merged.
#[must_use]
pub fn fold(comparisons: impl IntoIterator<Item = Comparison>) -> Predicate {
    let mut predicate = Predicate::new();
    let mut rules = 0_usize;

    for Comparison { field, op, value } in comparisons {
        rules += 1;
        let clause = match op {
            Operator::Eq => Clause::Equals(value),
            Operator::Neq | Operator::Gt | Operator::Gte | Operator::Lt | Operator::Lte => {
                Clause::Compare { op, value }
            }
        };
        if let Some(replaced) = predicate.insert(field.clone(), clause) {
            debug!(field = %field, replaced = %replaced, "later rule replaces earlier clause");
        }
    }

    debug!(rules, clauses = predicate.len(), "compiled segment predicate");
    predicate
}
