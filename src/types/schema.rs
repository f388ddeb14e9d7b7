use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Semantic type of a filterable field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Number,
    Boolean,
    /// Free text. Literals are taken as-is, without coercion.
    String,
    /// A closed set of allowed string values.
    Enum(BTreeSet<String>),
}

/// One filterable field and its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    name: String,
    kind: FieldKind,
}

/// The closed set of fields a segment rule may reference.
///
/// Built once at startup and never mutated afterwards; share it behind an
/// `Arc` across concurrent requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSchema {
    fields: BTreeMap<String, FieldSpec>,
}

/// Builder for a [`FieldSchema`]. Declaring a name twice keeps the later kind.
#[derive(Debug, Default)]
pub struct FieldSchemaBuilder {
    fields: BTreeMap<String, FieldSpec>,
}

/// Errors produced when loading a schema from configuration.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("invalid schema configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("enum field '{field}' declares no values")]
    EmptyEnum { field: String },

    #[error("field '{field}' is not an enum and cannot declare values")]
    UnexpectedValues { field: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl FieldSpec {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }
}

impl FieldSchema {
    #[must_use]
    pub fn builder() -> FieldSchemaBuilder {
        FieldSchemaBuilder::default()
    }

    /// The product catalog schema.
    #[must_use]
    pub fn catalog() -> Self {
        Self::builder()
            .number("price")
            .number("stock_quantity")
            .boolean("on_sale")
            .string("category")
            .string("title")
            .string("tags")
            .enumeration("stock_status", ["instock", "outofstock", "onbackorder"])
            .build()
    }

    /// Look up a field by its exact (case-sensitive) name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over all fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.values()
    }

    /// Parse a TOML schema document.
    ///
    /// ```
    /// use segrule::{FieldKind, FieldSchema};
    ///
    /// let schema = FieldSchema::from_toml(r#"
    /// [fields.price]
    /// kind = "number"
    ///
    /// [fields.stock_status]
    /// kind = "enum"
    /// values = ["instock", "outofstock"]
    /// "#).unwrap();
    ///
    /// assert_eq!(schema.get("price").unwrap().kind(), &FieldKind::Number);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] on malformed TOML, an enum without values, or
    /// `values` declared on a non-enum field.
    pub fn from_toml(input: &str) -> Result<Self, SchemaError> {
        let raw: SchemaFile = toml::from_str(input)?;
        let mut builder = Self::builder();
        for (name, spec) in raw.fields {
            let kind = spec.resolve(&name)?;
            builder = builder.field(&name, kind);
        }
        Ok(builder.build())
    }

    /// Read a TOML schema file.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] on I/O or configuration failure.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let input = std::fs::read_to_string(path)?;
        Self::from_toml(&input)
    }
}

impl FromStr for FieldSchema {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_toml(s)
    }
}

impl FieldSchemaBuilder {
    #[must_use]
    pub fn field(mut self, name: &str, kind: FieldKind) -> Self {
        self.fields.insert(
            name.to_owned(),
            FieldSpec {
                name: name.to_owned(),
                kind,
            },
        );
        self
    }

    #[must_use]
    pub fn number(self, name: &str) -> Self {
        self.field(name, FieldKind::Number)
    }

    #[must_use]
    pub fn boolean(self, name: &str) -> Self {
        self.field(name, FieldKind::Boolean)
    }

    #[must_use]
    pub fn string(self, name: &str) -> Self {
        self.field(name, FieldKind::String)
    }

    #[must_use]
    pub fn enumeration<I, S>(self, name: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let allowed = values.into_iter().map(Into::into).collect();
        self.field(name, FieldKind::Enum(allowed))
    }

    #[must_use]
    pub fn build(self) -> FieldSchema {
        FieldSchema {
            fields: self.fields,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Number => write!(f, "number"),
            FieldKind::Boolean => write!(f, "boolean"),
            FieldKind::String => write!(f, "string"),
            FieldKind::Enum(values) => {
                let values: Vec<&str> = values.iter().map(String::as_str).collect();
                write!(f, "enum({})", values.join(", "))
            }
        }
    }
}

// -- TOML shape --------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct SchemaFile {
    #[serde(default)]
    fields: BTreeMap<String, RawFieldSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFieldSpec {
    kind: RawKind,
    #[serde(default)]
    values: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum RawKind {
    Number,
    Boolean,
    String,
    Enum,
}

impl RawFieldSpec {
    fn resolve(self, name: &str) -> Result<FieldKind, SchemaError> {
        match (self.kind, self.values) {
            (RawKind::Enum, Some(values)) if !values.is_empty() => {
                Ok(FieldKind::Enum(values.into_iter().collect()))
            }
            (RawKind::Enum, _) => Err(SchemaError::EmptyEnum {
                field: name.to_owned(),
            }),
            (_, Some(_)) => Err(SchemaError::UnexpectedValues {
                field: name.to_owned(),
            }),
            (RawKind::Number, None) => Ok(FieldKind::Number),
            (RawKind::Boolean, None) => Ok(FieldKind::Boolean),
            (RawKind::String, None) => Ok(FieldKind::String),
        }
    }
}
