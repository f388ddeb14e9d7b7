mod coerce;
mod compile;
mod error;
mod evaluate;
pub mod parse;
pub mod query;
pub mod store;
mod types;
mod validate;

pub use coerce::coerce;
pub use compile::{compile, fold};
pub use error::{ErrorKind, SegmentError};
pub use store::{InMemoryStore, ProductStore, StoreError};
pub use types::{
    Attribute, Clause, Comparison, FieldKind, FieldSchema, FieldSchemaBuilder, FieldSpec,
    MatchStatus, Operator, Predicate, Product, RuleError, Scalar, SchemaError, SegmentResult,
    Segmenter, Value, ValueKind,
};
