//! Outcome tags shared by both result shapes

use strum_macros::{Display, IntoStaticStr, VariantArray};

/// Which of the two outcomes a computation produced.
///
/// [`TryWrap`](crate::TryWrap) always has exactly one tag. A
/// [`TryPair`](crate::TryPair) only has one when it is well formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display, VariantArray)]
pub enum Tag {
    /// The computation returned normally
    Value,

    /// The computation failed
    Error,
}

impl Tag {
    /// Returns the tag as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Tag for a native `Result`
    pub fn of<T, E>(result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => Tag::Value,
            Err(_) => Tag::Error,
        }
    }
}
