//! # optuple
//!
//! Runtime validation of positional, heterogeneous sequences ("tuples") whose
//! trailing positions may be optional and whose excess elements may be
//! validated by a single repeating rest schema.
//!
//! ## Inferred optional suffix
//!
//! Positions are never flagged optional explicitly. A position is optional
//! exactly when its schema accepts an absent value, which is what
//! [`optional()`](SchemaExt::optional) and [`default(..)`](SchemaExt::default)
//! produce. Short input is padded with [`Value::Undefined`], and the shortest
//! acceptable input is discovered from which padded positions were rejected.
//!
//! ## Quick Example
//!
//! ```rust
//! use optuple::prelude::*;
//!
//! let schema = tuple_with_optional([
//!     boolean().boxed(),
//!     number().boxed(),
//!     string().optional().boxed(),
//!     number().optional().boxed(),
//! ]);
//!
//! // Optional suffix may be omitted, and is not echoed back
//! assert_eq!(schema.parse(seq![true, 1]).unwrap(), seq![true, 1]);
//!
//! // Everything before the last required position must be present
//! let err = schema.parse(seq![true]).unwrap_err();
//! assert_eq!(err.codes(), vec!["too_small"]);
//!
//! // Excess elements without a rest schema are reported
//! let err = schema.parse(seq![true, 1, "hello", 2, "world"]).unwrap_err();
//! assert_eq!(err.codes(), vec!["too_big"]);
//!
//! // ... and with one, validated
//! let variadic = schema.rest(string().boxed());
//! assert!(variadic.parse(seq![true, 1, "hello", 2, "world"]).is_ok());
//! ```
//!
//! ## Features
//!
//! - `tracing`: debug events from the tuple engine
//! - `serde`: `Serialize`/`Deserialize` for [`Value`], `Serialize` for issues
//! - `proptest`: `Arbitrary` for [`Value`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod context;
mod fanout;
pub mod issue;
pub mod schema;
pub mod schemas;
pub mod semigroup;
pub mod status;
pub mod testing;
pub mod tuple;
pub mod validation;
pub mod value;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-exports
pub use context::{ParseContext, ParseMode};
pub use issue::{
    Issue, IssueCode, IssueKind, ParseError, PathSegment, SizeKind, ValidationError,
};
pub use schema::{Schema, SchemaExt, SchemaRef};
pub use semigroup::Semigroup;
pub use status::{merge_array, ParseOutcome, ParseStatus};
pub use tuple::{tuple, tuple_with_optional, Tuple, TupleWithOptional};
pub use validation::Validation;
pub use value::{ParsedType, Value};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::issue::{Issue, IssueCode, ParseError, PathSegment, ValidationError};
    pub use crate::schema::{Schema, SchemaExt, SchemaRef};
    pub use crate::schemas::{array, boolean, literal, null, number, string, unknown};
    pub use crate::seq;
    pub use crate::tuple::{tuple, tuple_with_optional, Tuple, TupleWithOptional};
    pub use crate::validation::Validation;
    pub use crate::value::Value;
}
