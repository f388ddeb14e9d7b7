use std::io::Read;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::{Predicate, Product};

/// Failures of the product store. Never caused by the rule text.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("product store unavailable: {0}")]
    Unavailable(String),

    #[error("product store timed out after {0:?}")]
    Timeout(Duration),

    #[error("invalid product catalog: {0}")]
    Catalog(#[from] serde_json::Error),
}

/// Anything that can return the products matching a [`Predicate`].
///
/// Implementations translate the predicate into their native filter and must
/// not mutate shared state. Records come back in the store's native order.
pub trait ProductStore {
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend fails or times out.
    fn find(&self, predicate: &Predicate) -> Result<Vec<Product>, StoreError>;
}

impl<S: ProductStore + ?Sized> ProductStore for &S {
    fn find(&self, predicate: &Predicate) -> Result<Vec<Product>, StoreError> {
        (**self).find(predicate)
    }
}

impl<S: ProductStore + ?Sized> ProductStore for Arc<S> {
    fn find(&self, predicate: &Predicate) -> Result<Vec<Product>, StoreError> {
        (**self).find(predicate)
    }
}

impl<S: ProductStore + ?Sized> ProductStore for Box<S> {
    fn find(&self, predicate: &Predicate) -> Result<Vec<Product>, StoreError> {
        (**self).find(predicate)
    }
}

/// A product store backed by a `Vec`, scanned in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    products: Vec<Product>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Load a catalog from a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Catalog`] if the JSON does not describe products.
    pub fn from_json_str(input: &str) -> Result<Self, StoreError> {
        Ok(Self::new(serde_json::from_str(input)?))
    }

    /// Load a catalog from a reader yielding a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Catalog`] on I/O or decoding failure.
    pub fn from_json_reader(reader: impl Read) -> Result<Self, StoreError> {
        Ok(Self::new(serde_json::from_reader(reader)?))
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl FromIterator<Product> for InMemoryStore {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl ProductStore for InMemoryStore {
    fn find(&self, predicate: &Predicate) -> Result<Vec<Product>, StoreError> {
        Ok(self
            .products
            .iter()
            .filter(|product| predicate.matches(product))
            .cloned()
            .collect())
    }
}
