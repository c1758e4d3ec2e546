//! Dynamic values under validation
//!
//! Schemas validate [`Value`]s: a small JSON-like model with one extra
//! variant, [`Value::Undefined`], which stands for "no value here". It fills
//! the holes of sparse sequences and pads tuple input that is shorter than the
//! declared arity. A schema is optional at a position precisely when it
//! accepts `Undefined`.
//!
//! # Examples
//!
//! ```
//! use optuple::{seq, ParsedType, Value};
//!
//! let input = seq![true, 1, "hello"];
//! assert_eq!(input.parsed_type(), ParsedType::Array);
//! assert_eq!(input.as_array().map(|items| items.len()), Some(3));
//!
//! // Holes are materialized as `Undefined`
//! assert_eq!(Value::holes(2), seq![Value::Undefined, Value::Undefined]);
//! ```

use std::collections::BTreeMap;
use std::fmt;

/// A dynamically typed value
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent value: a hole, a missing trailing slot, or an unset optional
    #[default]
    Undefined,
    /// Explicit null
    Null,
    /// Boolean
    Bool(bool),
    /// Number (always `f64`, `NaN` included)
    Number(f64),
    /// String
    String(String),
    /// Ordered sequence
    Array(Vec<Value>),
    /// Keyed record
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// Build a sequence of `len` holes.
    ///
    /// Holes carry no value, so they read back as [`Value::Undefined`] and are
    /// validated like any other absent slot.
    pub fn holes(len: usize) -> Self {
        Value::Array(vec![Value::Undefined; len])
    }

    /// Classify this value.
    pub fn parsed_type(&self) -> ParsedType {
        match self {
            Value::Undefined => ParsedType::Undefined,
            Value::Null => ParsedType::Null,
            Value::Bool(_) => ParsedType::Boolean,
            Value::Number(n) if n.is_nan() => ParsedType::Nan,
            Value::Number(_) => ParsedType::Number,
            Value::String(_) => ParsedType::String,
            Value::Array(_) => ParsedType::Array,
            Value::Object(_) => ParsedType::Object,
        }
    }

    /// Returns `true` for [`Value::Undefined`].
    #[inline]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Borrow the elements if this is a sequence.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow the string contents if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Read the number if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{:?}", s),
            Value::Array(items) => {
                write!(f, "[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Object(fields) => {
                write!(f, "{{")?;
                for (idx, (key, value)) in fields.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{:?}:{}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(value as f64)
                }
            }
        )+
    };
}

impl_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Undefined, Into::into)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(fields: BTreeMap<String, Value>) -> Self {
        Value::Object(fields)
    }
}

/// Build a [`Value::Array`] from a list of anything convertible into [`Value`].
///
/// ```
/// use optuple::{seq, Value};
///
/// let nested = seq!["a", seq![1, 2], Value::Null];
/// assert_eq!(nested.as_array().map(|items| items.len()), Some(3));
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::Value::Array(::std::vec::Vec::new())
    };
    ($($item:expr),+ $(,)?) => {
        $crate::Value::Array(::std::vec![$($crate::Value::from($item)),+])
    };
}

/// The observed kind of a value, as reported in `invalid_type` issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParsedType {
    /// `undefined`
    Undefined,
    /// `null`
    Null,
    /// `boolean`
    Boolean,
    /// `number`
    Number,
    /// `nan`
    Nan,
    /// `string`
    String,
    /// `array`
    Array,
    /// `object`
    Object,
}

impl ParsedType {
    /// The lowercase name used in issues.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParsedType::Undefined => "undefined",
            ParsedType::Null => "null",
            ParsedType::Boolean => "boolean",
            ParsedType::Number => "number",
            ParsedType::Nan => "nan",
            ParsedType::String => "string",
            ParsedType::Array => "array",
            ParsedType::Object => "object",
        }
    }
}

impl fmt::Display for ParsedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsed_type_classification() {
        assert_eq!(Value::Undefined.parsed_type(), ParsedType::Undefined);
        assert_eq!(Value::Null.parsed_type(), ParsedType::Null);
        assert_eq!(Value::from(true).parsed_type(), ParsedType::Boolean);
        assert_eq!(Value::from(1.5).parsed_type(), ParsedType::Number);
        assert_eq!(Value::Number(f64::NAN).parsed_type(), ParsedType::Nan);
        assert_eq!(Value::from("x").parsed_type(), ParsedType::String);
        assert_eq!(seq![].parsed_type(), ParsedType::Array);
        assert_eq!(Value::Object(BTreeMap::new()).parsed_type(), ParsedType::Object);
    }

    #[test]
    fn test_holes_are_undefined() {
        let sparse = Value::holes(3);
        let items = sparse.as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert!(items.iter().all(Value::is_undefined));
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<i32>), Value::Undefined);
        assert_eq!(Value::from(Some("a")), Value::from("a"));
    }

    #[test]
    fn test_seq_macro_nests() {
        let value = seq![true, seq!["blue"], 2];
        assert_eq!(
            value,
            Value::Array(vec![
                Value::Bool(true),
                Value::Array(vec![Value::String("blue".into())]),
                Value::Number(2.0),
            ])
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(seq![true, 1, "a", Value::Undefined].to_string(), r#"[true,1,"a",undefined]"#);
        assert_eq!(Value::from(1.5).to_string(), "1.5");
    }
}
