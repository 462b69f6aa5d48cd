//! The tagged-union result shape and its adapter.

use std::fmt;

use crate::{Tag, TryPair};

/// Outcome of a computation as a tagged union.
///
/// Unlike [`TryPair`], exactly one payload exists by construction.
#[must_use = "the outcome may be an error and must be inspected"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TryWrap<T, E> {
    /// The computation returned normally
    Value(T),

    /// The computation failed
    Error(E),
}

impl<T, E> TryWrap<T, E> {
    /// Get the tag of this outcome.
    pub fn tag(&self) -> Tag {
        match self {
            TryWrap::Value(_) => Tag::Value,
            TryWrap::Error(_) => Tag::Error,
        }
    }

    /// Tagged [`Tag::Value`]
    pub fn is_value(&self) -> bool {
        matches!(self, TryWrap::Value(_))
    }

    /// Tagged [`Tag::Error`]
    pub fn is_error(&self) -> bool {
        matches!(self, TryWrap::Error(_))
    }

    /// The value payload, if tagged [`Tag::Value`]
    pub fn value(&self) -> Option<&T> {
        match self {
            TryWrap::Value(value) => Some(value),
            TryWrap::Error(_) => None,
        }
    }

    /// The error payload, if tagged [`Tag::Error`]
    pub fn error(&self) -> Option<&E> {
        match self {
            TryWrap::Value(_) => None,
            TryWrap::Error(error) => Some(error),
        }
    }

    /// Take the value payload, dropping an error.
    pub fn into_value(self) -> Option<T> {
        match self {
            TryWrap::Value(value) => Some(value),
            TryWrap::Error(_) => None,
        }
    }

    /// Take the error payload, dropping a value.
    pub fn into_error(self) -> Option<E> {
        match self {
            TryWrap::Value(_) => None,
            TryWrap::Error(error) => Some(error),
        }
    }

    /// Borrow both payloads without consuming the outcome.
    pub fn as_ref(&self) -> TryWrap<&T, &E> {
        match self {
            TryWrap::Value(value) => TryWrap::Value(value),
            TryWrap::Error(error) => TryWrap::Error(error),
        }
    }

    /// Transform the value payload, leaving an error untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> TryWrap<U, E> {
        match self {
            TryWrap::Value(value) => TryWrap::Value(f(value)),
            TryWrap::Error(error) => TryWrap::Error(error),
        }
    }

    /// Transform the error payload, leaving a value untouched.
    pub fn map_err<G>(self, f: impl FnOnce(E) -> G) -> TryWrap<T, G> {
        match self {
            TryWrap::Value(value) => TryWrap::Value(value),
            TryWrap::Error(error) => TryWrap::Error(f(error)),
        }
    }

    /// Hand the outcome back to `?`-based code.
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }

    /// Project onto the two-slot shape. The pair is always well formed.
    pub fn into_pair(self) -> TryPair<T, E> {
        self.into_result().into()
    }
}

impl<T, E> From<Result<T, E>> for TryWrap<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => TryWrap::Value(value),
            Err(error) => TryWrap::Error(error),
        }
    }
}

impl<T, E> From<TryWrap<T, E>> for Result<T, E> {
    fn from(wrap: TryWrap<T, E>) -> Self {
        match wrap {
            TryWrap::Value(value) => Ok(value),
            TryWrap::Error(error) => Err(error),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for TryWrap<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TryWrap::Value(value) => write!(f, "{} => {}", self.tag(), value),
            TryWrap::Error(error) => write!(f, "{} => {}", self.tag(), error),
        }
    }
}

/// Run `computation` once and report its outcome as a [`TryWrap`].
///
/// ```rust
/// use tryy::{tryy_wrap, Tag};
///
/// let wrap = tryy_wrap(|| "42".parse::<i32>());
/// assert_eq!(wrap.tag(), Tag::Value);
/// assert_eq!(wrap.value(), Some(&42));
/// assert!(wrap.error().is_none());
/// ```
pub fn tryy_wrap<T, E, F>(computation: F) -> TryWrap<T, E>
where
    F: FnOnce() -> Result<T, E>,
{
    let result = computation();
    tracing::trace!(outcome = %Tag::of(&result), "tryy_wrap finished");
    TryWrap::from(result)
}

/// Short alias of [`tryy_wrap`].
#[inline]
pub fn __<T, E, F>(computation: F) -> TryWrap<T, E>
where
    F: FnOnce() -> Result<T, E>,
{
    tryy_wrap(computation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, PartialEq)]
    enum RangeError {
        OutOfRange,
    }

    impl fmt::Display for RangeError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "out of range")
        }
    }

    fn checked(n: i64) -> Result<u8, RangeError> {
        u8::try_from(n).map_err(|_| RangeError::OutOfRange)
    }

    #[test]
    fn test_success_is_tagged_value() {
        let wrap = tryy_wrap(|| checked(42));
        assert_eq!(wrap, TryWrap::Value(42));
        assert_eq!(wrap.value(), Some(&42));
        assert_eq!(wrap.error(), None);
    }

    #[test]
    fn test_failure_is_tagged_error() {
        let wrap = tryy_wrap(|| checked(256));
        assert_eq!(wrap.tag(), Tag::Error);
        assert_eq!(wrap.error(), Some(&RangeError::OutOfRange));
        assert_eq!(wrap.value(), None);
    }

    #[test]
    fn test_exactly_one_accessor_is_present() {
        for n in [-5, 0, 255, 256] {
            let wrap = tryy_wrap(|| checked(n));
            assert!(wrap.value().is_some() != wrap.error().is_some());
            assert_eq!(wrap.is_value(), wrap.tag() == Tag::Value);
        }
    }

    #[test]
    fn test_alias_matches() {
        assert_eq!(__(|| checked(3)), tryy_wrap(|| checked(3)));
        assert_eq!(__(|| checked(300)), tryy_wrap(|| checked(300)));
    }

    #[test]
    fn test_map_and_map_err() {
        let doubled = tryy_wrap(|| checked(21)).map(|v| u32::from(v) * 2);
        assert_eq!(doubled.into_value(), Some(42));

        let described = tryy_wrap(|| checked(-1)).map_err(|e| e.to_string());
        assert_eq!(described.into_error(), Some("out of range".to_string()));
    }

    #[test]
    fn test_into_pair_is_well_formed() {
        let pair = tryy_wrap(|| checked(1000)).into_pair();
        assert!(pair.is_well_formed());
        assert_eq!(pair.into_tuple(), (Some(RangeError::OutOfRange), None));
    }

    #[test]
    fn test_display() {
        assert_eq!(tryy_wrap(|| checked(9)).to_string(), "Value => 9");
        assert_eq!(
            tryy_wrap(|| checked(-9)).to_string(),
            "Error => out of range"
        );
    }

    #[test]
    fn test_back_into_result() {
        fn double(n: i64) -> Result<u8, RangeError> {
            let v = tryy_wrap(|| checked(n)).into_result()?;
            checked(i64::from(v) * 2)
        }

        assert_eq!(double(4), Ok(8));
        assert_eq!(double(200), Err(RangeError::OutOfRange));
    }
}
