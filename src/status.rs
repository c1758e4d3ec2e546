//! Parse status and outcomes
//!
//! A schema run ends in one of three states:
//!
//! - **Valid**: a value was produced and nothing was wrong with it.
//! - **Dirty**: a value was produced, but an issue was recorded on the way
//!   (for example excess tuple elements were dropped). Parsing continues so
//!   that further issues can still be reported.
//! - **Aborted**: no value could be produced.
//!
//! Statuses form a [`Semigroup`] that keeps the most severe state, which is
//! what [`merge_array`] folds over when assembling a sequence from its parts.

use crate::value::Value;
use crate::Semigroup;

/// Severity of a parse, ordered `Valid < Dirty < Aborted`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParseStatus {
    /// No issues
    Valid,
    /// Value produced, issues recorded
    Dirty,
    /// No value
    Aborted,
}

impl Semigroup for ParseStatus {
    #[inline]
    fn combine(self, other: Self) -> Self {
        self.max(other)
    }
}

/// Result of running one schema on one value
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome<T = Value> {
    /// Value produced without issues
    Valid(T),
    /// Value produced with issues recorded
    Dirty(T),
    /// No value
    Aborted,
}

impl<T> ParseOutcome<T> {
    /// Pair a status with a value; `Aborted` drops the value.
    pub fn from_status(status: ParseStatus, value: T) -> Self {
        match status {
            ParseStatus::Valid => ParseOutcome::Valid(value),
            ParseStatus::Dirty => ParseOutcome::Dirty(value),
            ParseStatus::Aborted => ParseOutcome::Aborted,
        }
    }

    /// The status of this outcome.
    pub fn status(&self) -> ParseStatus {
        match self {
            ParseOutcome::Valid(_) => ParseStatus::Valid,
            ParseOutcome::Dirty(_) => ParseStatus::Dirty,
            ParseOutcome::Aborted => ParseStatus::Aborted,
        }
    }

    /// Returns `true` only for [`ParseOutcome::Valid`].
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, ParseOutcome::Valid(_))
    }

    /// Returns `true` for [`ParseOutcome::Aborted`].
    #[inline]
    pub fn is_aborted(&self) -> bool {
        matches!(self, ParseOutcome::Aborted)
    }

    /// Borrow the produced value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            ParseOutcome::Valid(value) | ParseOutcome::Dirty(value) => Some(value),
            ParseOutcome::Aborted => None,
        }
    }

    /// Take the produced value, if any.
    pub fn into_value(self) -> Option<T> {
        match self {
            ParseOutcome::Valid(value) | ParseOutcome::Dirty(value) => Some(value),
            ParseOutcome::Aborted => None,
        }
    }

    /// Transform the produced value, keeping the status.
    pub fn map<U, F>(self, f: F) -> ParseOutcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            ParseOutcome::Valid(value) => ParseOutcome::Valid(f(value)),
            ParseOutcome::Dirty(value) => ParseOutcome::Dirty(f(value)),
            ParseOutcome::Aborted => ParseOutcome::Aborted,
        }
    }

    /// Downgrade to at least `status`.
    pub fn with_status(self, status: ParseStatus) -> Self {
        let merged = self.status().combine(status);
        match self.into_value() {
            Some(value) => ParseOutcome::from_status(merged, value),
            None => ParseOutcome::Aborted,
        }
    }
}

/// Assemble per-element outcomes into one sequence outcome.
///
/// Any aborted element aborts the whole sequence. Otherwise the values are
/// collected in order and the status is the most severe of `status` and every
/// element status.
///
/// # Examples
///
/// ```
/// use optuple::{merge_array, ParseOutcome, ParseStatus, Value};
///
/// let merged = merge_array(
///     ParseStatus::Valid,
///     vec![ParseOutcome::Valid(Value::from(1)), ParseOutcome::Dirty(Value::from(2))],
/// );
/// assert_eq!(merged, ParseOutcome::Dirty(vec![Value::from(1), Value::from(2)]));
///
/// let aborted = merge_array(ParseStatus::Valid, vec![ParseOutcome::Aborted]);
/// assert!(aborted.is_aborted());
/// ```
pub fn merge_array<I>(mut status: ParseStatus, outcomes: I) -> ParseOutcome<Vec<Value>>
where
    I: IntoIterator<Item = ParseOutcome>,
{
    let mut values = Vec::new();

    for outcome in outcomes {
        status = status.combine(outcome.status());
        match outcome.into_value() {
            Some(value) => values.push(value),
            None => return ParseOutcome::Aborted,
        }
    }

    ParseOutcome::from_status(status, values)
}
