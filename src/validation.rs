//! Tagged result of a safe parse
//!
//! [`Validation`] is the `{ success, data | error }` shape returned by
//! [`SchemaExt::safe_parse`](crate::SchemaExt::safe_parse): either the parsed
//! value or the error describing every issue found. It never panics and can be
//! converted into a plain `Result` when `?` is more convenient.
//!
//! # Examples
//!
//! ```
//! use optuple::prelude::*;
//!
//! let schema = tuple_with_optional([string().boxed(), number().optional().boxed()]);
//!
//! match schema.safe_parse(seq!["asdf"]) {
//!     Validation::Success(data) => assert_eq!(data, seq!["asdf"]),
//!     Validation::Failure(error) => panic!("unexpected: {}", error),
//! }
//!
//! let failed = schema.safe_parse(seq![1]);
//! assert!(failed.is_failure());
//! assert_eq!(failed.error().map(|e| e.codes()), Some(vec!["invalid_type"]));
//! ```

/// Either the parsed data or the error explaining why parsing failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// Parsing succeeded
    Success(T),
    /// Parsing failed
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Create a validation from a Result
    ///
    /// ```
    /// use optuple::Validation;
    ///
    /// let v = Validation::from_result(Ok::<_, String>(42));
    /// assert_eq!(v, Validation::Success(42));
    /// ```
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Validation::Success(value),
            Err(error) => Validation::Failure(error),
        }
    }

    /// Convert this validation to a Result
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }

    /// `true` when parsing succeeded
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// `true` when parsing failed
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// Borrow the parsed data, if any
    pub fn data(&self) -> Option<&T> {
        match self {
            Validation::Success(value) => Some(value),
            Validation::Failure(_) => None,
        }
    }

    /// Borrow the error, if any
    pub fn error(&self) -> Option<&E> {
        match self {
            Validation::Success(_) => None,
            Validation::Failure(error) => Some(error),
        }
    }

    /// Transform the success value if present
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Transform the error value if present
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Validation<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => Validation::Failure(f(error)),
        }
    }
}

impl<T, E> From<Validation<T, E>> for Result<T, E> {
    fn from(validation: Validation<T, E>) -> Self {
        validation.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_accessors() {
        let v = Validation::<_, &str>::success(42);
        assert!(v.is_success());
        assert!(!v.is_failure());
        assert_eq!(v.data(), Some(&42));
        assert_eq!(v.error(), None);
    }

    #[test]
    fn test_failure_accessors() {
        let v = Validation::<i32, _>::failure("too_small");
        assert!(v.is_failure());
        assert_eq!(v.data(), None);
        assert_eq!(v.error(), Some(&"too_small"));
    }

    #[test]
    fn test_result_round_trip() {
        assert_eq!(Validation::<_, String>::success(1).into_result(), Ok(1));
        let err: Result<i32, _> = Validation::failure("bad").into();
        assert_eq!(err, Err("bad"));
        assert_eq!(
            Validation::from_result(Err::<i32, _>("bad")),
            Validation::Failure("bad")
        );
    }

    #[test]
    fn test_map_and_map_err() {
        assert_eq!(
            Validation::<_, String>::success(5).map(|x| x * 2),
            Validation::Success(10)
        );
        assert_eq!(
            Validation::<i32, _>::failure(vec!["a", "b"]).map_err(|e| e.len()),
            Validation::Failure(2)
        );
    }
}
