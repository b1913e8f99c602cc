// Comprehension bindings over a future of a sequence
// Await the whole sequence, then apply the iterator bindings element-wise

use std::future::Future;

use tristate_error::Result;

use crate::either::Either;
use crate::maybe::Maybe;
use crate::query::iter::{EitherIterExt, MaybeIterExt};

/// Bindings for a future resolving to a sequence of `Maybe`.
pub trait MaybeSeqFutureExt<S, T>: Future<Output = S> + Sized
where
    S: IntoIterator<Item = Maybe<T>>,
{
    fn select_each<U, X, F>(self, f: F) -> impl Future<Output = Vec<Maybe<U>>>
    where
        F: FnMut(T) -> X,
        X: Into<Option<U>>,
    {
        async move { self.await.into_iter().select(f).collect() }
    }

    /// Fails on the first projection that produces no value.
    fn select_many_each<I, V, X, B, P>(self, bind: B, project: P) -> impl Future<Output = Result<Vec<Maybe<V>>>>
    where
        B: FnMut(&T) -> Maybe<I>,
        P: FnMut(T, I) -> X,
        X: Into<Option<V>>,
    {
        async move { self.await.into_iter().select_many(bind, project).collect() }
    }

    fn where_each<P>(self, predicate: P) -> impl Future<Output = Vec<Maybe<T>>>
    where
        P: FnMut(&T) -> bool,
    {
        async move { self.await.into_iter().where_some(predicate).collect() }
    }
}

impl<S, T, F> MaybeSeqFutureExt<S, T> for F
where
    F: Future<Output = S>,
    S: IntoIterator<Item = Maybe<T>>,
{
}

/// Bindings for a future resolving to a sequence of `Either`.
pub trait EitherSeqFutureExt<S, L, R>: Future<Output = S> + Sized
where
    S: IntoIterator<Item = Either<L, R>>,
{
    fn select_each<U, X, F>(self, f: F) -> impl Future<Output = Vec<Either<L, U>>>
    where
        F: FnMut(R) -> X,
        X: Into<Option<U>>,
    {
        async move { self.await.into_iter().select(f).collect() }
    }

    /// Fails on the first projection that produces no value.
    fn select_many_each<I, V, X, B, P>(
        self,
        bind: B,
        project: P,
    ) -> impl Future<Output = Result<Vec<Either<L, V>>>>
    where
        B: FnMut(&R) -> Either<L, I>,
        P: FnMut(R, I) -> X,
        X: Into<Option<V>>,
    {
        async move { self.await.into_iter().select_many(bind, project).collect() }
    }

    fn where_each<P>(self, predicate: P) -> impl Future<Output = Vec<Either<L, R>>>
    where
        P: FnMut(&R) -> bool,
    {
        async move { self.await.into_iter().where_right(predicate).collect() }
    }
}

impl<S, L, R, F> EitherSeqFutureExt<S, L, R> for F
where
    F: Future<Output = S>,
    S: IntoIterator<Item = Either<L, R>>,
{
}
