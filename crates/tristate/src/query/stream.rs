// Comprehension bindings over asynchronous streams
// Lazy, element-wise select / select_many / where for Stream<Item = Maybe | Either>

use std::future::ready;

use futures::stream::{Stream, StreamExt};
use tristate_error::Result;

use crate::either::Either;
use crate::maybe::Maybe;

pub trait MaybeStreamExt<T>: Stream<Item = Maybe<T>> + Sized {
    fn select<U, X, F>(self, f: F) -> impl Stream<Item = Maybe<U>>
    where
        F: FnMut(T) -> X,
        X: Into<Option<U>>,
    {
        let mut f = f;
        self.map(move |maybe| maybe.map(&mut f))
    }

    fn select_many<I, V, X, B, P>(self, bind: B, project: P) -> impl Stream<Item = Result<Maybe<V>>>
    where
        B: FnMut(&T) -> Maybe<I>,
        P: FnMut(T, I) -> X,
        X: Into<Option<V>>,
    {
        let (mut bind, mut project) = (bind, project);
        self.map(move |maybe| maybe.select_many(&mut bind, &mut project))
    }

    fn where_some<P>(self, predicate: P) -> impl Stream<Item = Maybe<T>>
    where
        P: FnMut(&T) -> bool,
    {
        let mut predicate = predicate;
        self.map(move |maybe| maybe.filter(&mut predicate))
    }

    fn somes(self) -> impl Stream<Item = T> {
        self.filter_map(|maybe| ready(maybe.into_option()))
    }
}

impl<T, S> MaybeStreamExt<T> for S where S: Stream<Item = Maybe<T>> {}

pub trait EitherStreamExt<L, R>: Stream<Item = Either<L, R>> + Sized {
    fn select<U, X, F>(self, f: F) -> impl Stream<Item = Either<L, U>>
    where
        F: FnMut(R) -> X,
        X: Into<Option<U>>,
    {
        let mut f = f;
        self.map(move |either| either.map(&mut f))
    }

    fn select_many<I, V, X, B, P>(self, bind: B, project: P) -> impl Stream<Item = Result<Either<L, V>>>
    where
        B: FnMut(&R) -> Either<L, I>,
        P: FnMut(R, I) -> X,
        X: Into<Option<V>>,
    {
        let (mut bind, mut project) = (bind, project);
        self.map(move |either| either.select_many(&mut bind, &mut project))
    }

    fn where_right<P>(self, predicate: P) -> impl Stream<Item = Either<L, R>>
    where
        P: FnMut(&R) -> bool,
    {
        let mut predicate = predicate;
        self.map(move |either| either.filter(&mut predicate))
    }

    fn rights(self) -> impl Stream<Item = R> {
        self.filter_map(|either| ready(either.to_maybe().into_option()))
    }
}

impl<L, R, S> EitherStreamExt<L, R> for S where S: Stream<Item = Either<L, R>> {}
