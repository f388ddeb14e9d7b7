use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::error::RuleError;
use super::outcome::SegmentResult;
use super::predicate::Predicate;
use super::schema::FieldSchema;
use crate::store::ProductStore;
use crate::SegmentError;

/// Evaluates segment rule text against a product store.
///
/// The schema is shared and read-only; each call compiles its own predicate,
/// so one `Segmenter` can serve concurrent requests from behind an `Arc`.
///
/// # Example
///
/// ```
/// use segrule::{FieldSchema, InMemoryStore, MatchStatus, Product, Segmenter};
///
/// let store = InMemoryStore::new(vec![
///     Product::new(1, "Phone").with_price(6000.0).with_stock_status("instock"),
///     Product::new(2, "Tablet").with_price(3000.0).with_stock_status("instock"),
/// ]);
/// let segmenter = Segmenter::new(FieldSchema::catalog(), store);
///
/// let result = segmenter.evaluate("price > 5000\nstock_status = instock").unwrap();
/// assert_eq!(result.status(), MatchStatus::Matched);
/// assert_eq!(result.products()[0].id, 1);
/// ```
#[derive(Debug)]
pub struct Segmenter<S> {
    schema: Arc<FieldSchema>,
    store: S,
}

impl<S: ProductStore> Segmenter<S> {
    pub fn new(schema: impl Into<Arc<FieldSchema>>, store: S) -> Self {
        Self {
            schema: schema.into(),
            store,
        }
    }

    #[must_use]
    pub fn schema(&self) -> &FieldSchema {
        &self.schema
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Compile rule text against this segmenter's schema without querying
    /// the store.
    ///
    /// # Errors
    ///
    /// Returns the [`RuleError`] of the first invalid line.
    pub fn compile(&self, rules: &str) -> Result<Predicate, RuleError> {
        crate::compile::compile(rules, &self.schema).map_err(|err| {
            debug!(kind = %err.kind(), line = err.line(), "rejected segment rules");
            err
        })
    }

    /// Compile rule text and return the matching products.
    ///
    /// Empty rule text returns the whole catalog with
    /// [`MatchStatus::Unfiltered`](crate::MatchStatus::Unfiltered); rules that
    /// match nothing succeed with [`MatchStatus::NoMatches`](crate::MatchStatus::NoMatches).
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError::Rule`] for invalid rule text and
    /// [`SegmentError::StoreUnavailable`] when the store fails.
    pub fn evaluate(&self, rules: &str) -> Result<SegmentResult, SegmentError> {
        let predicate = self.compile(rules)?;
        self.evaluate_predicate(&predicate)
    }

    /// Run an already compiled predicate against the store.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError::StoreUnavailable`] when the store fails.
    pub fn evaluate_predicate(&self, predicate: &Predicate) -> Result<SegmentResult, SegmentError> {
        crate::evaluate::evaluate(&self.store, predicate)
    }
}

impl<S> fmt::Display for Segmenter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Segmenter({} fields)", self.schema.len())
    }
}
