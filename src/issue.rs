//! Validation issues and the errors that carry them
//!
//! Every problem a schema finds is recorded as an [`Issue`]: a kind with its
//! details, plus the path of positions (and keys) leading to the offending
//! value. Issues accumulate in call-scoped buffers and are surfaced to callers
//! through [`ValidationError`], or through [`ParseError`] when the parse could
//! not run at all.
//!
//! # Examples
//!
//! ```
//! use optuple::prelude::*;
//!
//! let schema = tuple_with_optional([boolean().boxed(), number().boxed()]);
//! let err = schema.parse(seq![true, "one"]).unwrap_err();
//!
//! assert_eq!(err.codes(), vec!["invalid_type"]);
//! assert_eq!(err.issues()[0].path(), &[PathSegment::Index(1)]);
//! assert_eq!(err.to_string(), "[1]: Expected number, received string");
//! ```

use std::error::Error as StdError;
use std::fmt;

use crate::value::{ParsedType, Value};
use crate::Semigroup;

/// One step of an issue path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Position inside a sequence
    Index(usize),
    /// Key inside a record
    Key(String),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Index(idx) => write!(f, "[{}]", idx),
            PathSegment::Key(key) => write!(f, ".{}", key),
        }
    }
}

impl From<usize> for PathSegment {
    fn from(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

/// What a size bound applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeKind {
    /// Number of elements in a sequence
    Array,
    /// Number of characters in a string
    String,
}

impl SizeKind {
    /// Name used in the `type` field of size issues.
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeKind::Array => "array",
            SizeKind::String => "string",
        }
    }
}

/// Machine-readable issue code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueCode {
    /// `invalid_type`
    InvalidType,
    /// `invalid_literal`
    InvalidLiteral,
    /// `too_small`
    TooSmall,
    /// `too_big`
    TooBig,
    /// `custom`
    Custom,
}

impl IssueCode {
    /// The snake_case code string.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCode::InvalidType => "invalid_type",
            IssueCode::InvalidLiteral => "invalid_literal",
            IssueCode::TooSmall => "too_small",
            IssueCode::TooBig => "too_big",
            IssueCode::Custom => "custom",
        }
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of an issue together with its kind-specific details
#[derive(Debug, Clone, PartialEq)]
pub enum IssueKind {
    /// The value has the wrong kind
    InvalidType {
        /// Kind the schema accepts
        expected: ParsedType,
        /// Kind that was observed
        received: ParsedType,
    },
    /// The value differs from the required literal
    InvalidLiteral {
        /// Literal the schema accepts
        expected: Value,
        /// Value that was observed
        received: Value,
    },
    /// Fewer elements (or characters) than required
    TooSmall {
        /// Required minimum
        minimum: usize,
        /// Whether `minimum` itself is allowed
        inclusive: bool,
        /// Whether exactly `minimum` was required
        exact: bool,
        /// What was measured
        size: SizeKind,
    },
    /// More elements (or characters) than allowed
    TooBig {
        /// Allowed maximum
        maximum: usize,
        /// Whether `maximum` itself is allowed
        inclusive: bool,
        /// Whether exactly `maximum` was required
        exact: bool,
        /// What was measured
        size: SizeKind,
    },
    /// A refinement rejected the value
    Custom {
        /// Message supplied with the refinement
        message: String,
    },
}

impl IssueKind {
    /// `too_small` for a sequence with an inclusive, non-exact minimum.
    pub fn array_too_small(minimum: usize) -> Self {
        IssueKind::TooSmall {
            minimum,
            inclusive: true,
            exact: false,
            size: SizeKind::Array,
        }
    }

    /// `too_big` for a sequence with an inclusive, non-exact maximum.
    pub fn array_too_big(maximum: usize) -> Self {
        IssueKind::TooBig {
            maximum,
            inclusive: true,
            exact: false,
            size: SizeKind::Array,
        }
    }

    /// The code of this kind.
    pub fn code(&self) -> IssueCode {
        match self {
            IssueKind::InvalidType { .. } => IssueCode::InvalidType,
            IssueKind::InvalidLiteral { .. } => IssueCode::InvalidLiteral,
            IssueKind::TooSmall { .. } => IssueCode::TooSmall,
            IssueKind::TooBig { .. } => IssueCode::TooBig,
            IssueKind::Custom { .. } => IssueCode::Custom,
        }
    }
}

/// A single validation problem at a path
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    kind: IssueKind,
    path: Vec<PathSegment>,
}

impl Issue {
    /// Create an issue at `path`.
    pub fn new(kind: IssueKind, path: Vec<PathSegment>) -> Self {
        Issue { kind, path }
    }

    /// The kind and details.
    pub fn kind(&self) -> &IssueKind {
        &self.kind
    }

    /// The code of this issue.
    pub fn code(&self) -> IssueCode {
        self.kind.code()
    }

    /// Path from the root value to the offending value.
    pub fn path(&self) -> &[PathSegment] {
        &self.path
    }

    /// Default English message.
    pub fn message(&self) -> String {
        match &self.kind {
            IssueKind::InvalidType {
                received: ParsedType::Undefined,
                ..
            } => "Required".to_string(),
            IssueKind::InvalidType { expected, received } => {
                format!("Expected {}, received {}", expected, received)
            }
            IssueKind::InvalidLiteral { expected, .. } => {
                format!("Invalid literal value, expected {}", expected)
            }
            IssueKind::TooSmall {
                minimum,
                inclusive,
                exact,
                size,
            } => {
                let bound = if *exact {
                    "exactly"
                } else if *inclusive {
                    "at least"
                } else {
                    "more than"
                };
                format!("{} must contain {} {}", size_subject(*size), bound, units(*minimum, *size))
            }
            IssueKind::TooBig {
                maximum,
                inclusive,
                exact,
                size,
            } => {
                let bound = if *exact {
                    "exactly"
                } else if *inclusive {
                    "at most"
                } else {
                    "less than"
                };
                format!("{} must contain {} {}", size_subject(*size), bound, units(*maximum, *size))
            }
            IssueKind::Custom { message } => message.clone(),
        }
    }
}

fn size_subject(size: SizeKind) -> &'static str {
    match size {
        SizeKind::Array => "Array",
        SizeKind::String => "String",
    }
}

fn units(count: usize, size: SizeKind) -> String {
    match size {
        SizeKind::Array => format!("{} element(s)", count),
        SizeKind::String => format!("{} character(s)", count),
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            return write!(f, "{}", self.message());
        }
        for segment in &self.path {
            write!(f, "{}", segment)?;
        }
        write!(f, ": {}", self.message())
    }
}

/// Aggregate error carrying every issue found by a parse
///
/// # Examples
///
/// ```
/// use optuple::prelude::*;
///
/// let schema = tuple_with_optional([boolean().boxed(), number().boxed()]);
/// let err = schema.parse(seq![true]).unwrap_err();
///
/// assert_eq!(err.codes(), vec!["too_small"]);
/// assert_eq!(err.to_string(), "Array must contain at least 2 element(s)");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    issues: Vec<Issue>,
}

impl ValidationError {
    /// Wrap a list of issues.
    pub fn new(issues: Vec<Issue>) -> Self {
        ValidationError { issues }
    }

    /// All issues, in the order they were recorded.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Consume and return the issues.
    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }

    /// Code strings of all issues, in order.
    pub fn codes(&self) -> Vec<&'static str> {
        self.issues.iter().map(|issue| issue.code().as_str()).collect()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, issue) in self.issues.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", issue)?;
        }
        Ok(())
    }
}

impl StdError for ValidationError {}

impl Semigroup for ValidationError {
    fn combine(self, other: Self) -> Self {
        ValidationError::new(self.issues.combine(other.issues))
    }
}

/// Why a top-level parse did not produce a value
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The input failed validation
    Invalid(ValidationError),
    /// The schema contains asynchronous checks and was parsed synchronously
    AsyncRequired,
}

impl ParseError {
    /// Issues behind the failure; empty for [`ParseError::AsyncRequired`].
    pub fn issues(&self) -> &[Issue] {
        match self {
            ParseError::Invalid(err) => err.issues(),
            ParseError::AsyncRequired => &[],
        }
    }

    /// Code strings of all issues, in order.
    pub fn codes(&self) -> Vec<&'static str> {
        match self {
            ParseError::Invalid(err) => err.codes(),
            ParseError::AsyncRequired => Vec::new(),
        }
    }

    /// The validation error, if the input was actually validated.
    pub fn validation_error(&self) -> Option<&ValidationError> {
        match self {
            ParseError::Invalid(err) => Some(err),
            ParseError::AsyncRequired => None,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Invalid(err) => write!(f, "{}", err),
            ParseError::AsyncRequired => write!(
                f,
                "schema contains asynchronous checks; use parse_async instead"
            ),
        }
    }
}

impl StdError for ParseError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ParseError::Invalid(err) => Some(err),
            ParseError::AsyncRequired => None,
        }
    }
}

impl From<ValidationError> for ParseError {
    fn from(err: ValidationError) -> Self {
        ParseError::Invalid(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(kind: IssueKind, path: &[usize]) -> Issue {
        Issue::new(kind, path.iter().copied().map(PathSegment::Index).collect())
    }

    #[test]
    fn test_codes() {
        assert_eq!(IssueKind::array_too_small(2).code().as_str(), "too_small");
        assert_eq!(IssueKind::array_too_big(2).code().as_str(), "too_big");
        assert_eq!(
            IssueKind::Custom { message: "no".into() }.code(),
            IssueCode::Custom
        );
    }

    #[test]
    fn test_required_message_for_absent_value() {
        let issue = at(
            IssueKind::InvalidType {
                expected: ParsedType::Number,
                received: ParsedType::Undefined,
            },
            &[1],
        );
        assert_eq!(issue.message(), "Required");
        assert_eq!(issue.to_string(), "[1]: Required");
    }

    #[test]
    fn test_size_messages() {
        assert_eq!(
            at(IssueKind::array_too_big(4), &[]).message(),
            "Array must contain at most 4 element(s)"
        );
        let short = IssueKind::TooSmall {
            minimum: 3,
            inclusive: true,
            exact: false,
            size: SizeKind::String,
        };
        assert_eq!(at(short, &[]).message(), "String must contain at least 3 character(s)");
    }

    #[test]
    fn test_nested_path_display() {
        let issue = Issue::new(
            IssueKind::Custom { message: "bad".into() },
            vec![PathSegment::Index(2), PathSegment::from("name")],
        );
        assert_eq!(issue.to_string(), "[2].name: bad");
    }

    #[test]
    fn test_validation_error_display_joins_lines() {
        let err = ValidationError::new(vec![
            at(IssueKind::array_too_big(4), &[]),
            at(
                IssueKind::InvalidType {
                    expected: ParsedType::Number,
                    received: ParsedType::String,
                },
                &[3],
            ),
        ]);
        assert_eq!(
            err.to_string(),
            "Array must contain at most 4 element(s)\n[3]: Expected number, received string"
        );
        assert_eq!(err.codes(), vec!["too_big", "invalid_type"]);
    }

    #[test]
    fn test_validation_error_combine() {
        let a = ValidationError::new(vec![at(IssueKind::array_too_big(1), &[])]);
        let b = ValidationError::new(vec![at(IssueKind::array_too_small(3), &[])]);
        assert_eq!(a.combine(b).codes(), vec!["too_big", "too_small"]);
    }

    #[test]
    fn test_parse_error_source() {
        let err = ParseError::from(ValidationError::new(vec![]));
        assert!(err.source().is_some());
        assert!(ParseError::AsyncRequired.source().is_none());
        assert!(ParseError::AsyncRequired.issues().is_empty());
    }
}
