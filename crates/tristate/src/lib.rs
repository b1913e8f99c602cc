//! Total value algebra for optional and three-state sum values.
//!
//! [`Maybe<T>`] holds a value or nothing; [`Either<L, R>`] holds a left
//! value, a right value, or neither. Both are immutable, comparable and
//! hashable, and every construction path collapses absent input (anything
//! that converts to `Option::None`) into the empty state.
//!
//! ```
//! use tristate::{Either, Maybe};
//!
//! let doubled = Maybe::<i32>::new(5).map(|x| x * 2).some_or_default(0);
//! assert_eq!(doubled, 10);
//!
//! let missing = Either::<i32, String>::from_right(None);
//! assert!(missing.is_neither());
//! assert_eq!(missing.right_or_default("bar".to_string()), "bar");
//! ```
//!
//! The [`future`] module mirrors every combinator for futures and
//! asynchronous functions; [`query`] holds the comprehension bindings.

mod convert;
pub mod either;
pub mod future;
pub mod maybe;
pub mod query;
pub mod unit;

pub use either::Either;
pub use maybe::Maybe;
pub use unit::Unit;

pub use future::{EitherFutureExt, MaybeFutureExt};
pub use query::{EitherIterExt, EitherSeqFutureExt, MaybeIterExt, MaybeSeqFutureExt};
#[cfg(feature = "stream")]
pub use query::{EitherStreamExt, MaybeStreamExt};

pub use tristate_error::{codes, ErrorCode, MonadError, Result};

/// Glob-importable set of the types and extension traits.
pub mod prelude {
    pub use crate::future::{EitherFutureExt, MaybeFutureExt};
    pub use crate::query::{EitherIterExt, EitherSeqFutureExt, MaybeIterExt, MaybeSeqFutureExt};
    #[cfg(feature = "stream")]
    pub use crate::query::{EitherStreamExt, MaybeStreamExt};
    pub use crate::{either, maybe, Either, Maybe, MonadError, Unit};
}
