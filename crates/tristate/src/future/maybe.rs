// Deferred combinators for Maybe
// Sync container with async functions, and futures resolving to a Maybe

use std::future::Future;

use tristate_error::Result;

use crate::either::Either;
use crate::maybe::Maybe;
use crate::unit::Unit;

impl<T> Maybe<T> {
    /// Await `value` and wrap it; an absent result collapses to `None`.
    pub async fn from_async<X, Fut>(value: Fut) -> Self
    where
        Fut: Future<Output = X>,
        X: Into<Option<T>>,
    {
        Maybe::new(value.await)
    }

    /// Match with a deferred `some` branch.
    pub async fn match_some_async<U, N, S, SFut>(self, none: N, some: S) -> U
    where
        N: FnOnce() -> U,
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = U>,
    {
        match self {
            Maybe::Some(value) => some(value).await,
            Maybe::None => none(),
        }
    }

    /// Match with a deferred `none` branch.
    pub async fn match_none_async<U, N, NFut, S>(self, none: N, some: S) -> U
    where
        N: FnOnce() -> NFut,
        NFut: Future<Output = U>,
        S: FnOnce(T) -> U,
    {
        match self {
            Maybe::Some(value) => some(value),
            Maybe::None => none().await,
        }
    }

    /// Match with both branches deferred. Only the active branch's future
    /// is created.
    pub async fn match_async<U, N, NFut, S, SFut>(self, none: N, some: S) -> U
    where
        N: FnOnce() -> NFut,
        NFut: Future<Output = U>,
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = U>,
    {
        match self {
            Maybe::Some(value) => some(value).await,
            Maybe::None => none().await,
        }
    }

    pub async fn map_async<U, X, F, Fut>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = X>,
        X: Into<Option<U>>,
    {
        match self {
            Maybe::Some(value) => Maybe::new(f(value).await),
            Maybe::None => Maybe::None,
        }
    }

    pub async fn bind_async<U, F, Fut>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Maybe<U>>,
    {
        match self {
            Maybe::Some(value) => f(value).await,
            Maybe::None => Maybe::None,
        }
    }

    pub async fn filter_async<P, Fut>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>,
    {
        match self {
            Maybe::Some(value) => {
                if predicate(&value).await {
                    Maybe::Some(value)
                } else {
                    Maybe::None
                }
            }
            Maybe::None => Maybe::None,
        }
    }

    /// Await `f` on the payload if present; returns `self` for chaining.
    pub async fn if_some_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Maybe::Some(value) = &self {
            f(value).await;
        }
        self
    }

    /// Await `f` if empty; returns `self` for chaining.
    pub async fn if_none_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        if self.is_none() {
            f().await;
        }
        self
    }
}

/// Combinators for a future that resolves to a `Maybe`.
///
/// Every method awaits the receiver first, then applies the synchronous
/// combinator of the same name. In the `_async` methods the function's
/// future is created only after the receiver resolves.
pub trait MaybeFutureExt<T>: Future<Output = Maybe<T>> + Sized {
    fn match_or<U, S>(self, none: U, some: S) -> impl Future<Output = U>
    where
        S: FnOnce(T) -> U,
    {
        async move { self.await.match_or(none, some) }
    }

    fn match_with<U, N, S>(self, none: N, some: S) -> impl Future<Output = U>
    where
        N: FnOnce() -> U,
        S: FnOnce(T) -> U,
    {
        async move { self.await.match_with(none, some) }
    }

    fn match_some_async<U, N, S, SFut>(self, none: N, some: S) -> impl Future<Output = U>
    where
        N: FnOnce() -> U,
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = U>,
    {
        async move { self.await.match_some_async(none, some).await }
    }

    fn match_none_async<U, N, NFut, S>(self, none: N, some: S) -> impl Future<Output = U>
    where
        N: FnOnce() -> NFut,
        NFut: Future<Output = U>,
        S: FnOnce(T) -> U,
    {
        async move { self.await.match_none_async(none, some).await }
    }

    fn match_async<U, N, NFut, S, SFut>(self, none: N, some: S) -> impl Future<Output = U>
    where
        N: FnOnce() -> NFut,
        NFut: Future<Output = U>,
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = U>,
    {
        async move { self.await.match_async(none, some).await }
    }

    fn if_some<F>(self, f: F) -> impl Future<Output = Maybe<T>>
    where
        F: FnOnce(&T),
    {
        async move { self.await.if_some(f) }
    }

    fn if_some_async<F, Fut>(self, f: F) -> impl Future<Output = Maybe<T>>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move { self.await.if_some_async(f).await }
    }

    fn if_none<F>(self, f: F) -> impl Future<Output = Maybe<T>>
    where
        F: FnOnce(),
    {
        async move { self.await.if_none(f) }
    }

    fn if_none_async<F, Fut>(self, f: F) -> impl Future<Output = Maybe<T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        async move { self.await.if_none_async(f).await }
    }

    fn some_or_default(self, default: T) -> impl Future<Output = T> {
        async move { self.await.some_or_default(default) }
    }

    fn some_or_else<F>(self, default: F) -> impl Future<Output = T>
    where
        F: FnOnce() -> T,
    {
        async move { self.await.some_or_else(default) }
    }

    /// Deferred [`Maybe::map`]. Named apart from `futures::FutureExt::map`.
    fn map_some<U, X, F>(self, f: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> X,
        X: Into<Option<U>>,
    {
        async move { self.await.map(f) }
    }

    fn map_some_async<U, X, F, Fut>(self, f: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = X>,
        X: Into<Option<U>>,
    {
        async move { self.await.map_async(f).await }
    }

    fn bind<U, F>(self, f: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        async move { self.await.bind(f) }
    }

    fn bind_async<U, F, Fut>(self, f: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Maybe<U>>,
    {
        async move { self.await.bind_async(f).await }
    }

    fn filter<P>(self, predicate: P) -> impl Future<Output = Maybe<T>>
    where
        P: FnOnce(&T) -> bool,
    {
        async move { self.await.filter(predicate) }
    }

    fn filter_async<P, Fut>(self, predicate: P) -> impl Future<Output = Maybe<T>>
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>,
    {
        async move { self.await.filter_async(predicate).await }
    }

    fn to_either<L>(self, left: impl Into<Option<L>>) -> impl Future<Output = Either<L, T>> {
        async move { self.await.to_either(left) }
    }

    fn to_left_either<R>(self, right: impl Into<Option<R>>) -> impl Future<Output = Either<T, R>> {
        async move { self.await.to_left_either(right) }
    }

    fn to_left_either_unit(self) -> impl Future<Output = Either<T, Unit>> {
        async move { self.await.to_left_either_unit() }
    }

    fn select<U, X, F>(self, f: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> X,
        X: Into<Option<U>>,
    {
        async move { self.await.select(f) }
    }

    fn select_many<I, V, X, B, P>(self, bind: B, project: P) -> impl Future<Output = Result<Maybe<V>>>
    where
        B: FnOnce(&T) -> Maybe<I>,
        P: FnOnce(T, I) -> X,
        X: Into<Option<V>>,
    {
        async move { self.await.select_many(bind, project) }
    }
}

impl<T, F> MaybeFutureExt<T> for F where F: Future<Output = Maybe<T>> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::ready;

    #[tokio::test]
    async fn test_from_async_collapses() {
        let present = Maybe::<i32>::from_async(ready(3)).await;
        let absent = Maybe::<i32>::from_async(ready(None)).await;

        assert_eq!(present, Maybe::Some(3));
        assert_eq!(absent, Maybe::None);
    }

    #[tokio::test]
    async fn test_sync_container_async_function() {
        let doubled: Maybe<i32> = Maybe::some(4).map_async(|x| async move { x * 2 }).await;
        assert_eq!(doubled, Maybe::Some(8));

        let text = Maybe::<i32>::none()
            .match_some_async(|| "none".to_string(), |x| async move { x.to_string() })
            .await;
        assert_eq!(text, "none");

        let kept = Maybe::some(4).filter_async(|x| ready(*x > 3)).await;
        assert_eq!(kept, Maybe::Some(4));
    }

    #[tokio::test]
    async fn test_future_container() {
        let mapped: Maybe<i32> = ready(Maybe::some(5)).map_some(|x| x + 1).await;
        assert_eq!(mapped, Maybe::Some(6));

        let value = ready(Maybe::<i32>::none()).some_or_default(7).await;
        assert_eq!(value, 7);

        let bound: Maybe<i32> = ready(Maybe::some(5))
            .bind_async(|x| async move { Maybe::some(x * 3) })
            .await;
        assert_eq!(bound, Maybe::Some(15));
    }
}
