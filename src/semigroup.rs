//! Semigroup trait for associative accumulation
//!
//! Validation results are built by folding many small pieces together: the
//! status of every tuple slot, the issues every nested validator reports, the
//! aggregate errors of separate parses. All of these are associative
//! combinations, so they share one trait.
//!
//! # Examples
//!
//! ```
//! use optuple::{ParseStatus, Semigroup};
//!
//! // Issue buffers concatenate
//! assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
//!
//! // Statuses keep the most severe state
//! assert_eq!(ParseStatus::Valid.combine(ParseStatus::Dirty), ParseStatus::Dirty);
//! assert_eq!(ParseStatus::Aborted.combine(ParseStatus::Dirty), ParseStatus::Aborted);
//! ```

/// A type that supports an associative binary operation
///
/// # Laws
///
/// Implementations must satisfy the associativity law:
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
///
/// `combine` takes both operands by value; clone first if the originals are
/// still needed.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}
