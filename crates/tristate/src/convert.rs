//! Conversions between `Maybe`, `Either` and the standard library types.

use crate::either::Either;
use crate::maybe::Maybe;
use crate::unit::Unit;

impl<T> Maybe<T> {
    /// Lift into the right arm, using `left` when empty.
    ///
    /// An absent `left` collapses to `Neither`.
    pub fn to_either<L>(self, left: impl Into<Option<L>>) -> Either<L, T> {
        match self {
            Maybe::Some(value) => Either::Right(value),
            Maybe::None => Either::from_left(left),
        }
    }

    /// Lift into the left arm, using `right` when empty.
    pub fn to_left_either<R>(self, right: impl Into<Option<R>>) -> Either<T, R> {
        match self {
            Maybe::Some(value) => Either::Left(value),
            Maybe::None => Either::from_right(right),
        }
    }

    /// Lift into the left arm, with `Unit` on the right when empty.
    pub fn to_left_either_unit(self) -> Either<T, Unit> {
        self.to_left_either(Unit)
    }
}

impl<L, R> Either<L, R> {
    /// `Right` becomes `Some`; `Left` and `Neither` become `None`.
    pub fn to_maybe(self) -> Maybe<R> {
        match self {
            Either::Right(value) => Maybe::Some(value),
            _ => Maybe::None,
        }
    }

    /// `Left` becomes `Some`; `Right` and `Neither` become `None`.
    pub fn to_left_maybe(self) -> Maybe<L> {
        match self {
            Either::Left(value) => Maybe::Some(value),
            _ => Maybe::None,
        }
    }

    /// `None` for `Neither`, otherwise the matching `Result` arm.
    pub fn into_result(self) -> Option<Result<R, L>> {
        match self {
            Either::Right(value) => Some(Ok(value)),
            Either::Left(value) => Some(Err(value)),
            Either::Neither => None,
        }
    }
}
