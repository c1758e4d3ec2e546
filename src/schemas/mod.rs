//! Element validators
//!
//! Leaf schemas for primitive values, the homogeneous [`array`] schema, and
//! the wrappers produced by [`SchemaExt`](crate::SchemaExt) combinators.
//! Tuple schemas live in [`crate::tuple`].

mod array;
mod primitive;
mod wrappers;

pub use array::{array, ArraySchema};
pub use primitive::{
    boolean, literal, null, number, string, unknown, BooleanSchema, LiteralSchema, NullSchema,
    NumberSchema, StringSchema, UnknownSchema,
};
pub use wrappers::{AsyncRefine, Optional, Refine, Transform, WithDefault};
