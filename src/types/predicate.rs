use std::collections::BTreeMap;
use std::fmt;

use super::operator::Operator;
use super::product::{Attribute, Product};
use super::value::Value;

/// One validated rule line: a field, an operator and a typed value.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub field: String,
    pub op: Operator,
    pub value: Value,
}

/// The condition a [`Predicate`] places on a single field.
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    /// The attribute must equal the value.
    Equals(Value),
    /// The attribute must compare to the value with `op`.
    Compare { op: Operator, value: Value },
}

/// A compiled segment: the AND of one clause per field.
///
/// An empty predicate matches every product. Produced by
/// [`compile()`](crate::compile()) and owned by a single evaluation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Predicate {
    clauses: BTreeMap<String, Clause>,
}

impl Comparison {
    pub fn new(field: impl Into<String>, op: Operator, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            op,
            value: value.into(),
        }
    }
}

impl Clause {
    #[must_use]
    pub fn operator(&self) -> Operator {
        match self {
            Clause::Equals(_) => Operator::Eq,
            Clause::Compare { op, .. } => *op,
        }
    }

    #[must_use]
    pub fn value(&self) -> &Value {
        match self {
            Clause::Equals(value) | Clause::Compare { value, .. } => value,
        }
    }

    /// Test an attribute against this clause.
    ///
    /// A list attribute passes when any element passes. `!=` passes when no
    /// element is equal, so it also passes for a missing attribute.
    #[must_use]
    pub fn holds(&self, attr: Attribute<'_>) -> bool {
        let value = self.value();
        match self.operator() {
            Operator::Neq => !any_holds(attr, Operator::Eq, value),
            op => any_holds(attr, op, value),
        }
    }
}

fn any_holds(attr: Attribute<'_>, op: Operator, value: &Value) -> bool {
    attr.any(|s| s.partial_cmp_value(value).is_some_and(|ord| op.holds(ord)))
}

impl Predicate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the clause for `field`, returning the clause it replaced.
    pub fn insert(&mut self, field: impl Into<String>, clause: Clause) -> Option<Clause> {
        self.clauses.insert(field.into(), clause)
    }

    #[must_use]
    pub fn clause(&self, field: &str) -> Option<&Clause> {
        self.clauses.get(field)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// An empty predicate places no constraint and matches everything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Iterate over `(field, clause)` pairs in field name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Clause)> {
        self.clauses.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        self.clauses
            .iter()
            .all(|(field, clause)| clause.holds(product.attribute(field)))
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.operator(), self.value())
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "*");
        }
        for (i, (field, clause)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " AND ")?;
            }
            write!(f, "{field} {clause}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone() -> Product {
        Product::new(1, "Phone")
            .with_price(6000.0)
            .with_stock_status("instock")
            .with_tags(["featured", "android"])
    }

    #[test]
    fn empty_predicate_matches_everything() {
        let predicate = Predicate::new();
        assert!(predicate.matches(&phone()));
        assert!(predicate.matches(&Product::new(2, "Bare")));
        assert_eq!(predicate.to_string(), "*");
    }

    #[test]
    fn all_clauses_must_hold() {
        let mut predicate = Predicate::new();
        predicate.insert(
            "price",
            Clause::Compare {
                op: Operator::Gt,
                value: Value::Number(5000.0),
            },
        );
        predicate.insert("stock_status", Clause::Equals(Value::from("instock")));
        assert!(predicate.matches(&phone()));

        predicate.insert("stock_status", Clause::Equals(Value::from("outofstock")));
        assert!(!predicate.matches(&phone()));
    }

    #[test]
    fn insert_returns_replaced_clause() {
        let mut predicate = Predicate::new();
        assert!(predicate
            .insert("price", Clause::Equals(Value::Number(1.0)))
            .is_none());
        let old = predicate.insert("price", Clause::Equals(Value::Number(2.0)));
        assert_eq!(old, Some(Clause::Equals(Value::Number(1.0))));
        assert_eq!(predicate.len(), 1);
    }

    #[test]
    fn missing_attribute_fails_except_neq() {
        let bare = Product::new(2, "Bare");
        let gt = Clause::Compare {
            op: Operator::Gt,
            value: Value::Number(0.0),
        };
        let neq = Clause::Compare {
            op: Operator::Neq,
            value: Value::Number(0.0),
        };
        assert!(!gt.holds(bare.attribute("price")));
        assert!(!Clause::Equals(Value::Number(0.0)).holds(bare.attribute("price")));
        assert!(neq.holds(bare.attribute("price")));
    }

    #[test]
    fn list_attribute_matches_any_element() {
        let product = phone();
        assert!(Clause::Equals(Value::from("android")).holds(product.attribute("tags")));
        assert!(!Clause::Equals(Value::from("ios")).holds(product.attribute("tags")));

        let neq = |tag: &str| Clause::Compare {
            op: Operator::Neq,
            value: Value::from(tag),
        };
        assert!(neq("ios").holds(product.attribute("tags")));
        assert!(!neq("android").holds(product.attribute("tags")));
    }

    #[test]
    fn equality_forms_agree_and_neq_negates() {
        let product = phone();
        for field in ["price", "stock_status", "tags", "category"] {
            for value in [Value::Number(6000.0), Value::from("instock"), Value::from("android")] {
                let attr = product.attribute(field);
                let eq = Clause::Equals(value.clone()).holds(attr);
                let compare_eq = Clause::Compare {
                    op: Operator::Eq,
                    value: value.clone(),
                };
                let neq = Clause::Compare {
                    op: Operator::Neq,
                    value,
                };
                assert_eq!(compare_eq.holds(attr), eq, "{field}");
                assert_eq!(neq.holds(attr), !eq, "{field}");
            }
        }
    }

    #[test]
    fn type_mismatch_never_matches_ordering() {
        let clause = Clause::Compare {
            op: Operator::Lt,
            value: Value::Number(10.0),
        };
        assert!(!clause.holds(phone().attribute("title")));
    }

    #[test]
    fn display_in_field_order() {
        let mut predicate = Predicate::new();
        predicate.insert("stock_status", Clause::Equals(Value::from("instock")));
        predicate.insert(
            "price",
            Clause::Compare {
                op: Operator::Gte,
                value: Value::Number(100.0),
            },
        );
        assert_eq!(
            predicate.to_string(),
            "price >= 100 AND stock_status = \"instock\""
        );
    }
}
