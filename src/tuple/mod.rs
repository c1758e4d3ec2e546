//! Positional tuple schemas
//!
//! [`TupleWithOptional`] is the main schema of this crate: a tuple whose
//! optional suffix is inferred from the element schemas themselves, with an
//! optional rest schema for excess elements. [`Tuple`] is the plain variant in
//! which every declared position is required; it is what
//! [`TupleWithOptional::to_tuple`] produces.
//!
//! Both validate in the same pipeline:
//!
//! 1. classify the input (must be a sequence),
//! 2. reconcile its length with the declared arity,
//! 3. run each position's schema under `path ++ [index]`,
//! 4. assemble the output from the per-position outcomes.
//!
//! They differ in step 2 and 4: only [`TupleWithOptional`] pads short input,
//! infers the required length from the padded positions, and collapses
//! trailing absent values.

mod fixed;
mod optional;

pub use fixed::{tuple, Tuple};
pub use optional::{tuple_with_optional, TupleWithOptional};
