//! Checked conversion from the two-slot shape to the tagged union.
//!
//! [`tryy`](crate::tryy) never produces an ill-formed pair, but a
//! [`TryPair`] built by hand can hold both slots or neither. Converting such
//! a pair into a [`TryWrap`] fails with a [`ShapeError`] that hands the pair
//! back untouched.

use std::fmt;

use strum_macros::{Display, IntoStaticStr};

use crate::{TryPair, TryWrap};

/// Why a pair could not become a union.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
pub enum ShapeErrorKind {
    /// Both the error and the value slot are populated
    BothPresent,

    /// Neither slot is populated
    NeitherPresent,
}

impl ShapeErrorKind {
    /// Returns the kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

/// An ill-formed [`TryPair`] that was offered for conversion.
pub struct ShapeError<T, E> {
    kind: ShapeErrorKind,
    pair: TryPair<T, E>,
}

impl<T, E> ShapeError<T, E> {
    /// Get the error kind.
    pub fn kind(&self) -> ShapeErrorKind {
        self.kind
    }

    /// Borrow the rejected pair
    pub fn pair(&self) -> &TryPair<T, E> {
        &self.pair
    }

    /// Recover the rejected pair.
    pub fn into_pair(self) -> TryPair<T, E> {
        self.pair
    }
}

impl<T, E> fmt::Display for ShapeError<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let detail = match self.kind {
            ShapeErrorKind::BothPresent => "both an error and a value",
            ShapeErrorKind::NeitherPresent => "neither an error nor a value",
        };
        write!(f, "{} => pair holds {}", self.kind, detail)
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for ShapeError<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.kind)?;
        writeln!(f)?;
        writeln!(f, "    Error slot: {:?}", self.pair.error)?;
        writeln!(f, "    Value slot: {:?}", self.pair.value)?;
        Ok(())
    }
}

impl<T: fmt::Debug, E: fmt::Debug> std::error::Error for ShapeError<T, E> {}

impl<T, E> TryFrom<TryPair<T, E>> for TryWrap<T, E> {
    type Error = ShapeError<T, E>;

    fn try_from(pair: TryPair<T, E>) -> Result<Self, ShapeError<T, E>> {
        match pair.into_tuple() {
            (Some(error), None) => Ok(TryWrap::Error(error)),
            (None, Some(value)) => Ok(TryWrap::Value(value)),
            (error @ Some(_), value @ Some(_)) => Err(ShapeError {
                kind: ShapeErrorKind::BothPresent,
                pair: TryPair { error, value },
            }),
            (None, None) => Err(ShapeError {
                kind: ShapeErrorKind::NeitherPresent,
                pair: TryPair {
                    error: None,
                    value: None,
                },
            }),
        }
    }
}
