//! Translation of a [`Predicate`] into a document-store filter.

use serde_json::{Map, Value as JsonValue};

use crate::{Clause, Operator, Predicate, Scalar, Value};

/// Render `predicate` as a document-store query.
///
/// Equality becomes a bare value; every other operator becomes a one-key
/// operator document. An empty predicate renders as `{}`, which matches all
/// documents.
///
/// ```
/// use segrule::{compile, query, FieldSchema};
/// use serde_json::json;
///
/// let predicate = compile("price > 5000\nstock_status = instock", &FieldSchema::catalog()).unwrap();
/// assert_eq!(
///     query::to_document(&predicate),
///     json!({"price": {"$gt": 5000.0}, "stock_status": "instock"})
/// );
/// ```
#[must_use]
pub fn to_document(predicate: &Predicate) -> JsonValue {
    let doc: Map<String, JsonValue> = predicate
        .iter()
        .map(|(field, clause)| (field.to_owned(), clause_document(clause)))
        .collect();
    JsonValue::Object(doc)
}

fn clause_document(clause: &Clause) -> JsonValue {
    let value = json_value(clause.value());
    match clause.operator() {
        Operator::Eq => value,
        op => {
            let mut doc = Map::with_capacity(1);
            doc.insert(query_operator(op).to_owned(), value);
            JsonValue::Object(doc)
        }
    }
}

fn query_operator(op: Operator) -> &'static str {
    match op {
        Operator::Eq => "$eq",
        Operator::Neq => "$ne",
        Operator::Gt => "$gt",
        Operator::Gte => "$gte",
        Operator::Lt => "$lt",
        Operator::Lte => "$lte",
    }
}

fn json_value(value: &Value) -> JsonValue {
    match value.as_scalar() {
        Scalar::Number(n) => JsonValue::from(n),
        Scalar::Bool(b) => JsonValue::Bool(b),
        Scalar::Str(s) => JsonValue::String(s.to_owned()),
    }
}
