use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value::Scalar;

/// A catalog product as held by the product store.
///
/// Optional attributes mirror the upstream catalog, where price, stock
/// status, category and creation time may be unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub stock_status: Option<String>,
    #[serde(default)]
    pub stock_quantity: i64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub on_sale: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// The value of a named product attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Attribute<'a> {
    Missing,
    One(Scalar<'a>),
    Many(&'a [String]),
}

impl Product {
    /// Minimal product with every optional attribute unset.
    #[must_use]
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            price: None,
            stock_status: None,
            stock_quantity: 0,
            category: None,
            tags: Vec::new(),
            on_sale: false,
            created_at: None,
        }
    }

    #[must_use]
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn with_stock_status(mut self, status: impl Into<String>) -> Self {
        self.stock_status = Some(status.into());
        self
    }

    #[must_use]
    pub fn with_stock_quantity(mut self, quantity: i64) -> Self {
        self.stock_quantity = quantity;
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_on_sale(mut self, on_sale: bool) -> Self {
        self.on_sale = on_sale;
        self
    }

    /// Look up an attribute by field name. Unknown names are [`Attribute::Missing`].
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn attribute(&self, field: &str) -> Attribute<'_> {
        match field {
            "id" => Attribute::One(Scalar::Number(self.id as f64)),
            "title" => Attribute::One(Scalar::Str(&self.title)),
            "price" => self
                .price
                .map_or(Attribute::Missing, |p| Attribute::One(Scalar::Number(p))),
            "stock_status" => self
                .stock_status
                .as_deref()
                .map_or(Attribute::Missing, |s| Attribute::One(Scalar::Str(s))),
            "stock_quantity" => Attribute::One(Scalar::Number(self.stock_quantity as f64)),
            "category" => self
                .category
                .as_deref()
                .map_or(Attribute::Missing, |c| Attribute::One(Scalar::Str(c))),
            "tags" => Attribute::Many(&self.tags),
            "on_sale" => Attribute::One(Scalar::Bool(self.on_sale)),
            _ => Attribute::Missing,
        }
    }
}

impl Attribute<'_> {
    /// Whether any value of this attribute satisfies `pred`. A missing
    /// attribute has no values.
    pub fn any(&self, mut pred: impl FnMut(Scalar<'_>) -> bool) -> bool {
        match self {
            Attribute::Missing => false,
            Attribute::One(scalar) => pred(*scalar),
            Attribute::Many(items) => items.iter().any(|s| pred(Scalar::Str(s))),
        }
    }
}
