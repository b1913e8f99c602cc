// Deferred combinators for Either
// Sync container with async functions, and futures resolving to an Either

use std::future::Future;

use tracing::trace;
use tristate_error::Result;

use crate::either::Either;
use crate::maybe::Maybe;
use crate::unit::Unit;

impl<L, R> Either<L, R> {
    /// Await a left value; an absent result collapses to `Neither`.
    pub async fn from_left_async<X, Fut>(left: Fut) -> Self
    where
        Fut: Future<Output = X>,
        X: Into<Option<L>>,
    {
        Either::from_left(left.await)
    }

    /// Await a right value; an absent result collapses to `Neither`.
    pub async fn from_right_async<X, Fut>(right: Fut) -> Self
    where
        Fut: Future<Output = X>,
        X: Into<Option<R>>,
    {
        Either::from_right(right.await)
    }

    /// Await a right value, falling back to `left` when it turns out absent.
    pub async fn from_right_async_or<X, Fut>(right: Fut, left: impl Into<Option<L>>) -> Self
    where
        Fut: Future<Output = X>,
        X: Into<Option<R>>,
    {
        match right.await.into() {
            Some(value) => Either::Right(value),
            None => {
                trace!(target: "tristate", "awaited right value absent, using left fallback");
                Either::from_left(left)
            }
        }
    }

    /// Match with a deferred `left` branch.
    pub async fn match_left_async<U, LF, LFut, RF>(self, left: LF, right: RF, neither: U) -> U
    where
        LF: FnOnce(L) -> LFut,
        LFut: Future<Output = U>,
        RF: FnOnce(R) -> U,
    {
        match self {
            Either::Left(value) => left(value).await,
            Either::Right(value) => right(value),
            Either::Neither => neither,
        }
    }

    /// Match with a deferred `right` branch.
    pub async fn match_right_async<U, LF, RF, RFut>(self, left: LF, right: RF, neither: U) -> U
    where
        LF: FnOnce(L) -> U,
        RF: FnOnce(R) -> RFut,
        RFut: Future<Output = U>,
    {
        match self {
            Either::Left(value) => left(value),
            Either::Right(value) => right(value).await,
            Either::Neither => neither,
        }
    }

    /// Match with both branches deferred.
    pub async fn match_async<U, LF, LFut, RF, RFut>(self, left: LF, right: RF, neither: U) -> U
    where
        LF: FnOnce(L) -> LFut,
        LFut: Future<Output = U>,
        RF: FnOnce(R) -> RFut,
        RFut: Future<Output = U>,
    {
        match self {
            Either::Left(value) => left(value).await,
            Either::Right(value) => right(value).await,
            Either::Neither => neither,
        }
    }

    pub async fn map_async<U, X, F, Fut>(self, f: F) -> Either<L, U>
    where
        F: FnOnce(R) -> Fut,
        Fut: Future<Output = X>,
        X: Into<Option<U>>,
    {
        match self {
            Either::Right(value) => Either::from_right(f(value).await),
            Either::Left(value) => Either::Left(value),
            Either::Neither => Either::Neither,
        }
    }

    pub async fn map_left_async<U, X, F, Fut>(self, f: F) -> Either<U, R>
    where
        F: FnOnce(L) -> Fut,
        Fut: Future<Output = X>,
        X: Into<Option<U>>,
    {
        match self {
            Either::Left(value) => Either::from_left(f(value).await),
            Either::Right(value) => Either::Right(value),
            Either::Neither => Either::Neither,
        }
    }

    pub async fn bind_async<U, F, Fut>(self, f: F) -> Either<L, U>
    where
        F: FnOnce(R) -> Fut,
        Fut: Future<Output = Either<L, U>>,
    {
        match self {
            Either::Right(value) => f(value).await,
            Either::Left(value) => Either::Left(value),
            Either::Neither => Either::Neither,
        }
    }

    pub async fn bind_left_async<U, F, Fut>(self, f: F) -> Either<U, R>
    where
        F: FnOnce(L) -> Fut,
        Fut: Future<Output = Either<U, R>>,
    {
        match self {
            Either::Left(value) => f(value).await,
            Either::Right(value) => Either::Right(value),
            Either::Neither => Either::Neither,
        }
    }

    pub async fn filter_async<P, Fut>(self, predicate: P) -> Self
    where
        P: FnOnce(&R) -> Fut,
        Fut: Future<Output = bool>,
    {
        match self {
            Either::Right(value) => {
                if predicate(&value).await {
                    Either::Right(value)
                } else {
                    Either::Neither
                }
            }
            other => other,
        }
    }

    pub async fn do_right_async<F, Fut>(&self, f: F) -> Unit
    where
        F: FnOnce(&R) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Either::Right(value) = self {
            f(value).await;
        }
        Unit
    }

    /// Await `f` unless this is `Right`.
    pub async fn do_left_or_neither_async<F, Fut>(&self, f: F) -> Unit
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        if !self.is_right() {
            f().await;
        }
        Unit
    }

    /// Await `left` on `Left`, `neither` on `Neither`.
    pub async fn do_left_or_neither_with_async<LF, LFut, N, NFut>(&self, left: LF, neither: N) -> Unit
    where
        LF: FnOnce(&L) -> LFut,
        LFut: Future<Output = ()>,
        N: FnOnce() -> NFut,
        NFut: Future<Output = ()>,
    {
        match self {
            Either::Left(value) => left(value).await,
            Either::Neither => neither().await,
            Either::Right(_) => {}
        }
        Unit
    }

    pub async fn inspect_right_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(&R) -> Fut,
        Fut: Future<Output = ()>,
    {
        self.do_right_async(f).await;
        self
    }

    pub async fn inspect_left_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(&L) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Either::Left(value) = &self {
            f(value).await;
        }
        self
    }

    pub async fn inspect_neither_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        if self.is_neither() {
            f().await;
        }
        self
    }
}

/// Combinators for a future that resolves to an `Either`.
///
/// The receiver is always awaited before any branch function runs or any
/// branch future is created.
pub trait EitherFutureExt<L, R>: Future<Output = Either<L, R>> + Sized {
    fn match_or<U, LF, RF>(self, left: LF, right: RF, neither: U) -> impl Future<Output = U>
    where
        LF: FnOnce(L) -> U,
        RF: FnOnce(R) -> U,
    {
        async move { self.await.match_or(left, right, neither) }
    }

    fn match_with<U, LF, RF, N>(self, left: LF, right: RF, neither: N) -> impl Future<Output = U>
    where
        LF: FnOnce(L) -> U,
        RF: FnOnce(R) -> U,
        N: FnOnce() -> U,
    {
        async move { self.await.match_with(left, right, neither) }
    }

    fn match_right_or<U, RF>(self, left_or_neither: U, right: RF) -> impl Future<Output = U>
    where
        RF: FnOnce(R) -> U,
    {
        async move { self.await.match_right_or(left_or_neither, right) }
    }

    fn match_left_async<U, LF, LFut, RF>(self, left: LF, right: RF, neither: U) -> impl Future<Output = U>
    where
        LF: FnOnce(L) -> LFut,
        LFut: Future<Output = U>,
        RF: FnOnce(R) -> U,
    {
        async move { self.await.match_left_async(left, right, neither).await }
    }

    fn match_right_async<U, LF, RF, RFut>(self, left: LF, right: RF, neither: U) -> impl Future<Output = U>
    where
        LF: FnOnce(L) -> U,
        RF: FnOnce(R) -> RFut,
        RFut: Future<Output = U>,
    {
        async move { self.await.match_right_async(left, right, neither).await }
    }

    fn match_async<U, LF, LFut, RF, RFut>(self, left: LF, right: RF, neither: U) -> impl Future<Output = U>
    where
        LF: FnOnce(L) -> LFut,
        LFut: Future<Output = U>,
        RF: FnOnce(R) -> RFut,
        RFut: Future<Output = U>,
    {
        async move { self.await.match_async(left, right, neither).await }
    }

    fn do_right<F>(self, f: F) -> impl Future<Output = Unit>
    where
        F: FnOnce(&R),
    {
        async move { self.await.do_right(f) }
    }

    fn do_right_async<F, Fut>(self, f: F) -> impl Future<Output = Unit>
    where
        F: FnOnce(&R) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move {
            let either = self.await;
            either.do_right_async(f).await
        }
    }

    fn do_left_or_neither<F>(self, f: F) -> impl Future<Output = Unit>
    where
        F: FnOnce(),
    {
        async move { self.await.do_left_or_neither(f) }
    }

    fn do_left_or_neither_async<F, Fut>(self, f: F) -> impl Future<Output = Unit>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        async move {
            let either = self.await;
            either.do_left_or_neither_async(f).await
        }
    }

    fn do_left_or_neither_with<LF, N>(self, left: LF, neither: N) -> impl Future<Output = Unit>
    where
        LF: FnOnce(&L),
        N: FnOnce(),
    {
        async move { self.await.do_left_or_neither_with(left, neither) }
    }

    fn do_left_or_neither_with_async<LF, LFut, N, NFut>(self, left: LF, neither: N) -> impl Future<Output = Unit>
    where
        LF: FnOnce(&L) -> LFut,
        LFut: Future<Output = ()>,
        N: FnOnce() -> NFut,
        NFut: Future<Output = ()>,
    {
        async move {
            let either = self.await;
            either.do_left_or_neither_with_async(left, neither).await
        }
    }

    fn inspect_right<F>(self, f: F) -> impl Future<Output = Either<L, R>>
    where
        F: FnOnce(&R),
    {
        async move { self.await.inspect_right(f) }
    }

    fn inspect_right_async<F, Fut>(self, f: F) -> impl Future<Output = Either<L, R>>
    where
        F: FnOnce(&R) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move { self.await.inspect_right_async(f).await }
    }

    fn inspect_left<F>(self, f: F) -> impl Future<Output = Either<L, R>>
    where
        F: FnOnce(&L),
    {
        async move { self.await.inspect_left(f) }
    }

    fn inspect_left_async<F, Fut>(self, f: F) -> impl Future<Output = Either<L, R>>
    where
        F: FnOnce(&L) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move { self.await.inspect_left_async(f).await }
    }

    fn inspect_neither<F>(self, f: F) -> impl Future<Output = Either<L, R>>
    where
        F: FnOnce(),
    {
        async move { self.await.inspect_neither(f) }
    }

    fn inspect_neither_async<F, Fut>(self, f: F) -> impl Future<Output = Either<L, R>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        async move { self.await.inspect_neither_async(f).await }
    }

    fn left_or_default(self, default: L) -> impl Future<Output = L> {
        async move { self.await.left_or_default(default) }
    }

    fn right_or_default(self, default: R) -> impl Future<Output = R> {
        async move { self.await.right_or_default(default) }
    }

    /// Deferred [`Either::map`]. Named apart from `futures::FutureExt::map`.
    fn map_right<U, X, F>(self, f: F) -> impl Future<Output = Either<L, U>>
    where
        F: FnOnce(R) -> X,
        X: Into<Option<U>>,
    {
        async move { self.await.map(f) }
    }

    fn map_right_async<U, X, F, Fut>(self, f: F) -> impl Future<Output = Either<L, U>>
    where
        F: FnOnce(R) -> Fut,
        Fut: Future<Output = X>,
        X: Into<Option<U>>,
    {
        async move { self.await.map_async(f).await }
    }

    fn map_left<U, X, F>(self, f: F) -> impl Future<Output = Either<U, R>>
    where
        F: FnOnce(L) -> X,
        X: Into<Option<U>>,
    {
        async move { self.await.map_left(f) }
    }

    fn map_left_async<U, X, F, Fut>(self, f: F) -> impl Future<Output = Either<U, R>>
    where
        F: FnOnce(L) -> Fut,
        Fut: Future<Output = X>,
        X: Into<Option<U>>,
    {
        async move { self.await.map_left_async(f).await }
    }

    fn bind<U, F>(self, f: F) -> impl Future<Output = Either<L, U>>
    where
        F: FnOnce(R) -> Either<L, U>,
    {
        async move { self.await.bind(f) }
    }

    fn bind_async<U, F, Fut>(self, f: F) -> impl Future<Output = Either<L, U>>
    where
        F: FnOnce(R) -> Fut,
        Fut: Future<Output = Either<L, U>>,
    {
        async move { self.await.bind_async(f).await }
    }

    fn bind_left<U, F>(self, f: F) -> impl Future<Output = Either<U, R>>
    where
        F: FnOnce(L) -> Either<U, R>,
    {
        async move { self.await.bind_left(f) }
    }

    fn bind_left_async<U, F, Fut>(self, f: F) -> impl Future<Output = Either<U, R>>
    where
        F: FnOnce(L) -> Fut,
        Fut: Future<Output = Either<U, R>>,
    {
        async move { self.await.bind_left_async(f).await }
    }

    fn filter<P>(self, predicate: P) -> impl Future<Output = Either<L, R>>
    where
        P: FnOnce(&R) -> bool,
    {
        async move { self.await.filter(predicate) }
    }

    fn filter_async<P, Fut>(self, predicate: P) -> impl Future<Output = Either<L, R>>
    where
        P: FnOnce(&R) -> Fut,
        Fut: Future<Output = bool>,
    {
        async move { self.await.filter_async(predicate).await }
    }

    fn to_maybe(self) -> impl Future<Output = Maybe<R>> {
        async move { self.await.to_maybe() }
    }

    fn to_left_maybe(self) -> impl Future<Output = Maybe<L>> {
        async move { self.await.to_left_maybe() }
    }

    fn select<U, X, F>(self, f: F) -> impl Future<Output = Either<L, U>>
    where
        F: FnOnce(R) -> X,
        X: Into<Option<U>>,
    {
        async move { self.await.select(f) }
    }

    /// Deferred comprehension bind: `bind` is itself asynchronous and is
    /// only started once the receiver resolved to `Right`.
    fn select_many<I, V, X, B, BFut, P>(self, bind: B, project: P) -> impl Future<Output = Result<Either<L, V>>>
    where
        B: FnOnce(&R) -> BFut,
        BFut: Future<Output = Either<L, I>>,
        P: FnOnce(R, I) -> X,
        X: Into<Option<V>>,
    {
        async move {
            let value = match self.await {
                Either::Right(value) => value,
                Either::Left(left) => return Ok(Either::Left(left)),
                Either::Neither => return Ok(Either::Neither),
            };
            let intermediate = bind(&value).await;
            Either::Right(value).select_many(move |_| intermediate, project)
        }
    }
}

impl<L, R, F> EitherFutureExt<L, R> for F where F: Future<Output = Either<L, R>> {}
