//! Comprehension bindings.
//!
//! `select` maps, `select_many` binds with a projection, and the `where`
//! binding filters (spelled `where_some` / `where_right` here, `where` being
//! a Rust keyword). They are provided element-wise over iterators, over a
//! future of a sequence, and over streams. The [`maybe!`](crate::maybe) and
//! [`either!`](crate::either) macros give the query-expression form.

mod iter;
mod macros;
mod seq;
#[cfg(feature = "stream")]
mod stream;

pub use iter::{EitherIterExt, MaybeIterExt};
pub use seq::{EitherSeqFutureExt, MaybeSeqFutureExt};
#[cfg(feature = "stream")]
pub use stream::{EitherStreamExt, MaybeStreamExt};
