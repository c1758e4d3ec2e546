//! Tuple behavior shared with plain fixed-arity tuples

use std::collections::BTreeMap;

use optuple::prelude::*;
use optuple::{assert_issue_codes, assert_valid, IssueKind};

fn record(name: &str) -> Value {
    let mut fields = BTreeMap::new();
    fields.insert("name".to_string(), Value::from(name));
    Value::from(fields)
}

fn test_tuple() -> TupleWithOptional {
    tuple_with_optional([
        string().boxed(),
        literal(record("Rudy")).boxed(),
        array(literal("blue")).boxed(),
    ])
}

fn test_data() -> Value {
    seq!["asdf", record("Rudy"), seq!["blue"]]
}

fn bad_data() -> Value {
    seq![123, record("Rudy2"), seq!["blue", "red"]]
}

#[test]
fn test_successful_validation() {
    assert_valid!(test_tuple(), test_data(), test_data());
}

#[tokio::test]
async fn test_successful_async_validation() {
    let value = test_tuple().parse_async(test_data()).await.unwrap();
    assert_eq!(value, test_data());
}

#[test]
fn test_failed_validation() {
    let err = test_tuple().parse(bad_data()).unwrap_err();
    assert_eq!(err.issues().len(), 3);
    assert_eq!(err.codes(), vec!["invalid_type", "invalid_literal", "invalid_literal"]);
    let paths: Vec<_> = err.issues().iter().map(|i| i.path().to_vec()).collect();
    assert_eq!(
        paths,
        vec![
            vec![PathSegment::Index(0)],
            vec![PathSegment::Index(1)],
            vec![PathSegment::Index(2), PathSegment::Index(1)],
        ]
    );
}

#[tokio::test]
async fn test_failed_async_validation() {
    let result = test_tuple().safe_parse_async(bad_data()).await;
    assert!(result.is_failure());
    assert_eq!(result.error().map(|e| e.issues().len()), Some(3));
}

#[test]
fn test_tuple_with_transformers() {
    let string_to_length =
        string().transform(|v| Value::from(v.as_str().map_or(0, |s| s.chars().count())));
    let schema = tuple_with_optional([string_to_length.boxed()]);
    assert_valid!(schema, seq!["1234"], seq![4]);
}

#[test]
fn test_tuple_with_rest_schema() {
    let schema = tuple_with_optional([string().boxed(), number().boxed()]).rest(boolean().boxed());
    assert_valid!(
        schema,
        seq!["asdf", 1234, true, false, true],
        seq!["asdf", 1234, true, false, true]
    );
    assert_valid!(schema, seq!["asdf", 1234], seq!["asdf", 1234]);
    assert!(schema.parse(seq!["asdf", 1234, "asdf"]).is_err());
}

#[test]
fn test_sparse_array_fails() {
    assert!(test_tuple().parse(Value::holes(3)).is_err());
}

#[test]
fn test_tuple_with_optional_elements() {
    let schema = tuple_with_optional([string().boxed(), number().optional().boxed()]);
    assert_valid!(schema, seq!["asdf"], seq!["asdf"]);
}

#[test]
fn test_to_tuple_requires_every_position() {
    let schema = tuple_with_optional([string().boxed(), number().optional().boxed()]);
    let plain = schema.to_tuple();

    let err = plain.parse(seq!["asdf"]).unwrap_err();
    assert_eq!(err.issues()[0].kind(), &IssueKind::array_too_small(2));
    assert_valid!(plain, seq!["asdf", 1], seq!["asdf", 1]);
}

#[test]
fn test_to_tuple_keeps_rest_and_explicit_undefined() {
    let schema = tuple_with_optional([string().boxed(), number().optional().boxed()])
        .rest(boolean().boxed());
    let plain = schema.to_tuple();

    assert!(plain.rest_schema().is_some());
    assert_valid!(plain, seq!["a", 1, true], seq!["a", 1, true]);
    assert_valid!(
        plain,
        seq!["a", Value::Undefined],
        seq!["a", Value::Undefined]
    );
    assert_issue_codes!(plain, seq!["a", 1, "x"], ["invalid_type"]);
}
