mod error;
mod operator;
mod outcome;
mod predicate;
mod product;
mod schema;
mod segmenter;
mod value;

pub use error::RuleError;
pub use operator::Operator;
pub use outcome::{MatchStatus, SegmentResult};
pub use predicate::{Clause, Comparison, Predicate};
pub use product::{Attribute, Product};
pub use schema::{FieldKind, FieldSchema, FieldSchemaBuilder, FieldSpec, SchemaError};
pub use segmenter::Segmenter;
pub use value::{Scalar, Value, ValueKind};
