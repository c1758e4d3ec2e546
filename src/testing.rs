//! Testing utilities
//!
//! Assertion macros for schema tests and, behind the `proptest` feature, an
//! `Arbitrary` implementation for [`Value`](crate::Value).
//!
//! # Examples
//!
//! ```rust
//! use optuple::prelude::*;
//! use optuple::{assert_invalid, assert_issue_codes, assert_valid};
//!
//! let schema = tuple_with_optional([boolean().boxed(), number().optional().boxed()]);
//!
//! assert_valid!(schema, seq![true], seq![true]);
//! assert_invalid!(schema, seq![]);
//! assert_issue_codes!(schema, seq![true, "1"], ["invalid_type"]);
//! ```

/// Assert that a schema accepts an input.
///
/// With two arguments, evaluates to the parsed value. With a third argument,
/// also asserts the parsed value equals it.
///
/// # Example
///
/// ```rust
/// use optuple::prelude::*;
/// use optuple::assert_valid;
///
/// let value = assert_valid!(number(), 3);
/// assert_eq!(value, Value::from(3));
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($schema:expr, $input:expr) => {
        match $crate::SchemaExt::safe_parse(&$schema, $input) {
            $crate::Validation::Success(value) => value,
            $crate::Validation::Failure(e) => {
                panic!("Expected valid input, got: {}", e);
            }
        }
    };
    ($schema:expr, $input:expr, $expected:expr) => {
        assert_eq!(
            $crate::assert_valid!($schema, $input),
            $crate::Value::from($expected)
        );
    };
}

/// Assert that a schema rejects an input, evaluating to the [`ParseError`](crate::ParseError).
///
/// # Example
///
/// ```rust
/// use optuple::prelude::*;
/// use optuple::assert_invalid;
///
/// let err = assert_invalid!(boolean(), "yes");
/// assert_eq!(err.issues().len(), 1);
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($schema:expr, $input:expr) => {
        match $crate::SchemaExt::safe_parse(&$schema, $input) {
            $crate::Validation::Failure(e) => e,
            $crate::Validation::Success(value) => {
                panic!("Expected invalid input, got: {}", value);
            }
        }
    };
}

/// Assert that a schema rejects an input with exactly these issue codes, in order.
///
/// # Example
///
/// ```rust
/// use optuple::prelude::*;
/// use optuple::assert_issue_codes;
///
/// let schema = tuple_with_optional([boolean().boxed()]);
/// assert_issue_codes!(schema, seq![true, 1], ["too_big"]);
/// ```
#[macro_export]
macro_rules! assert_issue_codes {
    ($schema:expr, $input:expr, $expected:expr) => {
        let error = $crate::assert_invalid!($schema, $input);
        assert_eq!(error.codes(), $expected, "issues: {}", error);
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::Value;

#[cfg(feature = "proptest")]
impl Arbitrary for Value {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        let leaf = prop_oneof![
            Just(Value::Undefined),
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            (-1.0e6f64..1.0e6).prop_map(Value::Number),
            "[a-z]{0,8}".prop_map(Value::String),
        ];
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::btree_map("[a-z]{1,4}", inner, 0..3).prop_map(Value::Object),
            ]
        })
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn assert_valid_macro() {
        let schema = tuple_with_optional([boolean().boxed(), number().optional().boxed()]);
        let value = assert_valid!(schema, seq![true, 1]);
        assert_eq!(value, seq![true, 1]);
        assert_valid!(schema, seq![true], seq![true]);
    }

    #[test]
    fn assert_invalid_macro() {
        let err = assert_invalid!(number(), "1");
        assert_eq!(err.codes(), vec!["invalid_type"]);
    }

    #[test]
    fn assert_issue_codes_macro() {
        let schema = tuple_with_optional([boolean().boxed(), number().boxed()]);
        assert_issue_codes!(schema, seq![true], ["too_small"]);
        assert_issue_codes!(schema, seq![true, 1, 2], vec!["too_big"]);
    }

    #[test]
    #[should_panic(expected = "Expected valid input")]
    fn assert_valid_panics_on_invalid() {
        assert_valid!(boolean(), 1);
    }

    #[test]
    #[should_panic(expected = "Expected invalid input")]
    fn assert_invalid_panics_on_valid() {
        assert_invalid!(boolean(), true);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use crate::prelude::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn unknown_accepts_arbitrary_values(value in any::<Value>()) {
                prop_assert_eq!(unknown().parse(value.clone()).ok(), Some(value));
            }

            #[test]
            fn boolean_accepts_only_booleans(value in any::<Value>()) {
                let is_bool = matches!(value, Value::Bool(_));
                prop_assert_eq!(boolean().parse(value).is_ok(), is_bool);
            }
        }
    }
}
