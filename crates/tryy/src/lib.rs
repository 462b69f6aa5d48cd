//! # tryy
//!
//! Run a fallible closure and get its outcome back as a plain value instead
//! of propagating the error.
//!
//! ## Shapes
//!
//! - [`TryPair`]: two optional slots, `error` and `value`. The adapter fills
//!   exactly one, but the type itself does not enforce it.
//! - [`TryWrap`]: a tagged union holding exactly one of a value or an error.
//!
//! ## Adapters
//!
//! | shape       | name          | alias     | operator          |
//! |-------------|---------------|-----------|-------------------|
//! | [`TryPair`] | [`tryy`]      | [`___`]   | `!Attempt(f)`     |
//! | [`TryWrap`] | [`tryy_wrap`] | [`__`]    | `-Attempt(f)`     |
//!
//! Every spelling runs the closure exactly once on the calling thread and
//! always returns. The error type is whatever the closure returns.
//!
//! ## Usage
//!
//! ```rust
//! use tryy::{tryy, tryy_wrap, TryWrap};
//!
//! #[derive(Debug, PartialEq)]
//! struct OutOfRange;
//!
//! fn byte(n: i32) -> Result<u8, OutOfRange> {
//!     u8::try_from(n).map_err(|_| OutOfRange)
//! }
//!
//! let (error, value) = tryy(|| byte(42)).into_tuple();
//! assert_eq!((error, value), (None, Some(42)));
//!
//! match tryy_wrap(|| byte(512)) {
//!     TryWrap::Value(v) => println!("got {v}"),
//!     TryWrap::Error(e) => assert_eq!(e, OutOfRange),
//! }
//! ```
//!
//! Panics are not caught. Each adapter emits a single `trace` event through
//! [`tracing`] with the outcome tag.

mod ops;
mod pair;
mod shape;
mod tag;
mod wrap;

pub use ops::Attempt;
pub use pair::{___, TryPair, tryy};
pub use shape::{ShapeError, ShapeErrorKind};
pub use tag::Tag;
pub use wrap::{__, TryWrap, tryy_wrap};
