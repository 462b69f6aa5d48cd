//! The two-slot result shape and its adapter.

use crate::Tag;

/// Outcome of a computation as a pair of optional slots.
///
/// [`tryy`] always fills exactly one slot. The fields are public, so
/// nothing stops other code from building a pair with both slots or with
/// neither. Use [`TryPair::is_well_formed`] to check, or convert into a
/// [`TryWrap`](crate::TryWrap) when exclusivity has to be guaranteed.
#[must_use = "the error slot may be populated and must be inspected"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TryPair<T, E> {
    /// Present iff the computation failed
    pub error: Option<E>,
    /// Present iff the computation succeeded
    pub value: Option<T>,
}

impl<T, E> TryPair<T, E> {
    /// Pair holding only a value.
    pub fn from_value(value: T) -> Self {
        Self {
            error: None,
            value: Some(value),
        }
    }

    /// Pair holding only an error.
    pub fn from_error(error: E) -> Self {
        Self {
            error: Some(error),
            value: None,
        }
    }

    /// The tag of the populated slot, or `None` when both or neither slot is
    /// populated.
    pub fn tag(&self) -> Option<Tag> {
        match (&self.error, &self.value) {
            (None, Some(_)) => Some(Tag::Value),
            (Some(_), None) => Some(Tag::Error),
            _ => None,
        }
    }

    /// Exactly one slot is populated
    pub fn is_well_formed(&self) -> bool {
        self.tag().is_some()
    }

    /// Error slot first, value slot second.
    pub fn into_tuple(self) -> (Option<E>, Option<T>) {
        (self.error, self.value)
    }
}

impl<T, E> From<Result<T, E>> for TryPair<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::from_value(value),
            Err(error) => Self::from_error(error),
        }
    }
}

impl<T, E> From<(Option<E>, Option<T>)> for TryPair<T, E> {
    fn from((error, value): (Option<E>, Option<T>)) -> Self {
        Self { error, value }
    }
}

impl<T, E> From<TryPair<T, E>> for (Option<E>, Option<T>) {
    fn from(pair: TryPair<T, E>) -> Self {
        pair.into_tuple()
    }
}

/// Run `computation` once and report its outcome as a [`TryPair`].
///
/// The failure is captured in the error slot and never propagated. A panic
/// inside `computation` is not a failure in this sense and unwinds as usual.
///
/// ```rust
/// use tryy::tryy;
///
/// let pair = tryy(|| "42".parse::<i32>());
/// assert_eq!(pair.into_tuple(), (None, Some(42)));
///
/// let pair = tryy(|| "forty-two".parse::<i32>());
/// assert!(pair.error.is_some() && pair.value.is_none());
/// ```
pub fn tryy<T, E, F>(computation: F) -> TryPair<T, E>
where
    F: FnOnce() -> Result<T, E>,
{
    let result = computation();
    tracing::trace!(outcome = %Tag::of(&result), "tryy finished");
    TryPair::from(result)
}

/// Short alias of [`tryy`].
#[inline]
pub fn ___<T, E, F>(computation: F) -> TryPair<T, E>
where
    F: FnOnce() -> Result<T, E>,
{
    tryy(computation)
}
