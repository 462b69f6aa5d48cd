//! Prefix-operator forms of the two adapters.
//!
//! Closures cannot carry operator impls directly, so the computation is
//! wrapped in [`Attempt`] first:
//!
//! ```rust
//! use tryy::{Attempt, Tag};
//!
//! let pair = !Attempt(|| "7".parse::<u8>());
//! assert_eq!(pair.value, Some(7));
//!
//! let wrap = -Attempt(|| "seven".parse::<u8>());
//! assert_eq!(wrap.tag(), Tag::Error);
//! ```
//!
//! `!` yields a [`TryPair`] and `-` yields a [`TryWrap`].

use std::ops::{Neg, Not};

use crate::{TryPair, TryWrap, tryy, tryy_wrap};

/// A fallible computation waiting to be run by one of the prefix operators.
#[derive(Clone, Copy)]
pub struct Attempt<F>(pub F);

impl<F, T, E> Attempt<F>
where
    F: FnOnce() -> Result<T, E>,
{
    /// Same as `!attempt`.
    pub fn run_pair(self) -> TryPair<T, E> {
        tryy(self.0)
    }

    /// Same as `-attempt`.
    pub fn run_wrap(self) -> TryWrap<T, E> {
        tryy_wrap(self.0)
    }
}

impl<F, T, E> Not for Attempt<F>
where
    F: FnOnce() -> Result<T, E>,
{
    type Output = TryPair<T, E>;

    fn not(self) -> Self::Output {
        self.run_pair()
    }
}

impl<F, T, E> Neg for Attempt<F>
where
    F: FnOnce() -> Result<T, E>,
{
    type Output = TryWrap<T, E>;

    fn neg(self) -> Self::Output {
        self.run_wrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn halve(n: u32) -> Result<u32, String> {
        if n.is_multiple_of(2) {
            Ok(n / 2)
        } else {
            Err(format!("{} is odd", n))
        }
    }

    #[test]
    fn test_not_is_pair_adapter() {
        assert_eq!(!Attempt(|| halve(8)), tryy(|| halve(8)));
        assert_eq!(!Attempt(|| halve(3)), tryy(|| halve(3)));
    }

    #[test]
    fn test_neg_is_wrap_adapter() {
        assert_eq!(-Attempt(|| halve(8)), tryy_wrap(|| halve(8)));
        assert_eq!(-Attempt(|| halve(3)), tryy_wrap(|| halve(3)));
    }

    #[test]
    fn test_named_runs() {
        assert_eq!(Attempt(|| halve(4)).run_pair().value, Some(2));
        assert_eq!(
            Attempt(|| halve(5)).run_wrap().into_error(),
            Some("5 is odd".to_string())
        );
    }

    #[test]
    fn test_move_closure() {
        let owned = vec![1u8, 2, 3];
        let wrap = -Attempt(move || owned.into_iter().max().ok_or("empty"));
        assert_eq!(wrap, TryWrap::Value(3));
    }
}
