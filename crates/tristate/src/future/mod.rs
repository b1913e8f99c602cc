//! Deferred counterparts of the synchronous combinators.
//!
//! Three shapes are covered for each operation:
//!
//! - a plain container with an async function: inherent `*_async` methods on
//!   [`Maybe`](crate::Maybe) and [`Either`](crate::Either);
//! - a future of a container with a plain function, and
//! - a future of a container with an async function: [`MaybeFutureExt`] and
//!   [`EitherFutureExt`], implemented for every matching `Future`.
//!
//! No operation evaluates branches concurrently. The container is awaited
//! first, then at most one branch function runs.

mod either;
mod maybe;

pub use either::EitherFutureExt;
pub use maybe::MaybeFutureExt;
