use std::fmt;

use serde::Serialize;

use super::product::Product;

/// How a successful segment evaluation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    /// No rules were given; the whole catalog is returned.
    Unfiltered,
    /// Rules were given and at least one product matched.
    Matched,
    /// Rules were given and nothing matched. Still a success.
    NoMatches,
}

/// The products selected by a segment, with the status that produced them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[must_use]
pub struct SegmentResult {
    status: MatchStatus,
    products: Vec<Product>,
}

impl SegmentResult {
    pub(crate) fn new(filtered: bool, products: Vec<Product>) -> Self {
        let status = match (filtered, products.is_empty()) {
            (false, _) => MatchStatus::Unfiltered,
            (true, false) => MatchStatus::Matched,
            (true, true) => MatchStatus::NoMatches,
        };
        Self { status, products }
    }

    #[must_use]
    pub fn status(&self) -> MatchStatus {
        self.status
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

    #[must_use]
    pub fn into_products(self) -> Vec<Product> {
        self.products
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchStatus::Unfiltered => write!(f, "unfiltered"),
            MatchStatus::Matched => write!(f, "matched"),
            MatchStatus::NoMatches => write!(f, "no matches"),
        }
    }
}

impl fmt::Display for SegmentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} products", self.status, self.products.len())
    }
}
