//! Leaf schemas for single values

use crate::context::ParseContext;
use crate::issue::{IssueKind, SizeKind};
use crate::schema::Schema;
use crate::status::{ParseOutcome, ParseStatus};
use crate::value::{ParsedType, Value};

fn reject(ctx: &mut ParseContext, expected: ParsedType, input: &Value) -> ParseOutcome {
    ctx.add_issue(IssueKind::InvalidType {
        expected,
        received: input.parsed_type(),
    });
    ParseOutcome::Aborted
}

/// Accepts booleans
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanSchema;

impl Schema for BooleanSchema {
    fn run(&self, input: Value, ctx: &mut ParseContext) -> ParseOutcome {
        match input {
            Value::Bool(_) => ParseOutcome::Valid(input),
            other => reject(ctx, ParsedType::Boolean, &other),
        }
    }
}

/// Accepts numbers other than `NaN`
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberSchema;

impl Schema for NumberSchema {
    fn run(&self, input: Value, ctx: &mut ParseContext) -> ParseOutcome {
        match input {
            Value::Number(n) if !n.is_nan() => ParseOutcome::Valid(input),
            other => reject(ctx, ParsedType::Number, &other),
        }
    }
}

/// Accepts strings, optionally bounded in length (counted in characters)
#[derive(Debug, Clone, Copy, Default)]
pub struct StringSchema {
    min: Option<usize>,
    max: Option<usize>,
}

impl StringSchema {
    /// Require at least `len` characters.
    pub fn min(mut self, len: usize) -> Self {
        self.min = Some(len);
        self
    }

    /// Allow at most `len` characters.
    pub fn max(mut self, len: usize) -> Self {
        self.max = Some(len);
        self
    }
}

impl Schema for StringSchema {
    fn run(&self, input: Value, ctx: &mut ParseContext) -> ParseOutcome {
        let len = match &input {
            Value::String(s) => s.chars().count(),
            other => return reject(ctx, ParsedType::String, other),
        };

        let mut status = ParseStatus::Valid;
        if let Some(minimum) = self.min.filter(|min| len < *min) {
            ctx.add_issue(IssueKind::TooSmall {
                minimum,
                inclusive: true,
                exact: false,
                size: SizeKind::String,
            });
            status = ParseStatus::Dirty;
        }
        if let Some(maximum) = self.max.filter(|max| len > *max) {
            ctx.add_issue(IssueKind::TooBig {
                maximum,
                inclusive: true,
                exact: false,
                size: SizeKind::String,
            });
            status = ParseStatus::Dirty;
        }
        ParseOutcome::from_status(status, input)
    }
}

/// Accepts only `null`
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSchema;

impl Schema for NullSchema {
    fn run(&self, input: Value, ctx: &mut ParseContext) -> ParseOutcome {
        match input {
            Value::Null => ParseOutcome::Valid(input),
            other => reject(ctx, ParsedType::Null, &other),
        }
    }
}

/// Accepts anything, including an absent value
///
/// Because it accepts [`Value::Undefined`], an `unknown()` slot in a tuple is
/// always treated as optional.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnknownSchema;

impl Schema for UnknownSchema {
    fn run(&self, input: Value, _ctx: &mut ParseContext) -> ParseOutcome {
        ParseOutcome::Valid(input)
    }
}

/// Accepts exactly one value
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralSchema {
    expected: Value,
}

impl LiteralSchema {
    /// The accepted value.
    pub fn value(&self) -> &Value {
        &self.expected
    }
}

impl Schema for LiteralSchema {
    fn run(&self, input: Value, ctx: &mut ParseContext) -> ParseOutcome {
        if input == self.expected {
            return ParseOutcome::Valid(input);
        }
        ctx.add_issue(IssueKind::InvalidLiteral {
            expected: self.expected.clone(),
            received: input,
        });
        ParseOutcome::Aborted
    }
}

/// Schema accepting booleans.
pub fn boolean() -> BooleanSchema {
    BooleanSchema
}

/// Schema accepting numbers (not `NaN`).
pub fn number() -> NumberSchema {
    NumberSchema
}

/// Schema accepting strings.
pub fn string() -> StringSchema {
    StringSchema::default()
}

/// Schema accepting only `null`.
pub fn null() -> NullSchema {
    NullSchema
}

/// Schema accepting any value.
pub fn unknown() -> UnknownSchema {
    UnknownSchema
}

/// Schema accepting exactly `value`.
pub fn literal(value: impl Into<Value>) -> LiteralSchema {
    LiteralSchema {
        expected: value.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ParseMode;
    use crate::issue::IssueCode;

    fn run(schema: &dyn Schema, input: impl Into<Value>) -> (ParseOutcome, ParseContext) {
        let mut ctx = ParseContext::new(ParseMode::Sync);
        let outcome = schema.run(input.into(), &mut ctx);
        (outcome, ctx)
    }

    #[test]
    fn test_boolean_rejects_absent_value() {
        let (outcome, ctx) = run(&boolean(), Value::Undefined);
        assert!(outcome.is_aborted());
        assert_eq!(
            ctx.issues()[0].kind(),
            &IssueKind::InvalidType {
                expected: ParsedType::Boolean,
                received: ParsedType::Undefined,
            }
        );
    }

    #[test]
    fn test_number_rejects_nan() {
        let (outcome, ctx) = run(&number(), f64::NAN);
        assert!(outcome.is_aborted());
        assert_eq!(
            ctx.issues()[0].kind(),
            &IssueKind::InvalidType {
                expected: ParsedType::Number,
                received: ParsedType::Nan,
            }
        );
    }

    #[test]
    fn test_string_length_bounds_are_dirty() {
        let schema = string().min(3).max(5);
        let (outcome, ctx) = run(&schema, "ab");
        assert_eq!(outcome, ParseOutcome::Dirty(Value::from("ab")));
        assert_eq!(ctx.issues()[0].code(), IssueCode::TooSmall);

        let (outcome, ctx) = run(&schema, "abcdef");
        assert_eq!(outcome.status(), ParseStatus::Dirty);
        assert_eq!(ctx.issues()[0].code(), IssueCode::TooBig);

        let (outcome, ctx) = run(&schema, "héllo");
        assert!(outcome.is_valid());
        assert!(ctx.issues().is_empty());
    }

    #[test]
    fn test_literal() {
        let (outcome, _) = run(&literal("blue"), "blue");
        assert!(outcome.is_valid());

        let (outcome, ctx) = run(&literal("blue"), "red");
        assert!(outcome.is_aborted());
        assert_eq!(ctx.issues()[0].code(), IssueCode::InvalidLiteral);
        assert_eq!(ctx.issues()[0].message(), r#"Invalid literal value, expected "blue""#);
    }

    #[test]
    fn test_unknown_accepts_absence() {
        let (outcome, ctx) = run(&unknown(), Value::Undefined);
        assert_eq!(outcome, ParseOutcome::Valid(Value::Undefined));
        assert!(ctx.issues().is_empty());
    }

    #[test]
    fn test_null() {
        assert!(run(&null(), Value::Null).0.is_valid());
        assert!(run(&null(), Value::Undefined).0.is_aborted());
    }
}
