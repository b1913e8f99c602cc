// Comprehension bindings over iterators
// select / select_many / where applied element-wise to sequences of Maybe or Either

use tristate_error::Result;

use crate::either::Either;
use crate::maybe::Maybe;

/// Element-wise combinators for an iterator of `Maybe`.
///
/// The sequence keeps its length: an element that fails `where_some` becomes
/// `None` rather than being dropped. Use [`MaybeIterExt::somes`] to keep
/// present values only.
pub trait MaybeIterExt<T>: Iterator<Item = Maybe<T>> + Sized {
    fn select<U, X, F>(self, f: F) -> impl Iterator<Item = Maybe<U>>
    where
        F: FnMut(T) -> X,
        X: Into<Option<U>>,
    {
        let mut f = f;
        self.map(move |maybe| maybe.map(&mut f))
    }

    fn select_many<I, V, X, B, P>(self, bind: B, project: P) -> impl Iterator<Item = Result<Maybe<V>>>
    where
        B: FnMut(&T) -> Maybe<I>,
        P: FnMut(T, I) -> X,
        X: Into<Option<V>>,
    {
        let (mut bind, mut project) = (bind, project);
        self.map(move |maybe| maybe.select_many(&mut bind, &mut project))
    }

    fn where_some<P>(self, predicate: P) -> impl Iterator<Item = Maybe<T>>
    where
        P: FnMut(&T) -> bool,
    {
        let mut predicate = predicate;
        self.map(move |maybe| maybe.filter(&mut predicate))
    }

    /// Present payloads only.
    fn somes(self) -> impl Iterator<Item = T> {
        self.filter_map(Maybe::into_option)
    }
}

impl<T, I> MaybeIterExt<T> for I where I: Iterator<Item = Maybe<T>> {}

/// Element-wise combinators for an iterator of `Either`, acting on the right
/// arm.
pub trait EitherIterExt<L, R>: Iterator<Item = Either<L, R>> + Sized {
    fn select<U, X, F>(self, f: F) -> impl Iterator<Item = Either<L, U>>
    where
        F: FnMut(R) -> X,
        X: Into<Option<U>>,
    {
        let mut f = f;
        self.map(move |either| either.map(&mut f))
    }

    fn select_many<I, V, X, B, P>(self, bind: B, project: P) -> impl Iterator<Item = Result<Either<L, V>>>
    where
        B: FnMut(&R) -> Either<L, I>,
        P: FnMut(R, I) -> X,
        X: Into<Option<V>>,
    {
        let (mut bind, mut project) = (bind, project);
        self.map(move |either| either.select_many(&mut bind, &mut project))
    }

    fn where_right<P>(self, predicate: P) -> impl Iterator<Item = Either<L, R>>
    where
        P: FnMut(&R) -> bool,
    {
        let mut predicate = predicate;
        self.map(move |either| either.filter(&mut predicate))
    }

    fn rights(self) -> impl Iterator<Item = R> {
        self.filter_map(|either| either.to_maybe().into_option())
    }

    fn lefts(self) -> impl Iterator<Item = L> {
        self.filter_map(|either| either.to_left_maybe().into_option())
    }
}

impl<L, R, I> EitherIterExt<L, R> for I where I: Iterator<Item = Either<L, R>> {}
