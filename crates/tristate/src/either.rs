//! `Either<L, R>`: a left value, a right value, or neither.
//!
//! By convention the left arm carries failure or absence and the right arm
//! carries success. `Neither` is only ever reached by constructing from an
//! absent input (or explicitly through [`Either::neither`]), never by a
//! runtime failure.

use std::fmt;

use tracing::trace;
use tristate_error::{bail_operation, ensure_present, Result};

use crate::unit::Unit;

/// Three-state sum type.
///
/// The zero value (`Either::default()`) is `Neither`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// A value from the left domain
    Left(L),
    /// A value from the right domain
    Right(R),
    /// Neither arm is populated
    Neither,
}

impl<L, R> Default for Either<L, R> {
    fn default() -> Self {
        Either::Neither
    }
}

impl<L, R> Either<L, R> {
    /// Build a left instance. An absent input collapses to `Neither`.
    ///
    /// As with [`Maybe::new`](crate::Maybe::new), only the outer `Option`
    /// is inspected: a `Some(None)` payload is kept.
    pub fn from_left(value: impl Into<Option<L>>) -> Self {
        match value.into() {
            Some(value) => Either::Left(value),
            None => {
                trace!(target: "tristate", "absent left value collapsed to Either::Neither");
                Either::Neither
            }
        }
    }

    /// Build a right instance. An absent input collapses to `Neither`.
    /// A `Some(None)` payload is kept.
    pub fn from_right(value: impl Into<Option<R>>) -> Self {
        match value.into() {
            Some(value) => Either::Right(value),
            None => {
                trace!(target: "tristate", "absent right value collapsed to Either::Neither");
                Either::Neither
            }
        }
    }

    /// Build a left instance, failing with `MonadError::InvalidArgument`
    /// on absent input.
    pub fn try_left(value: impl Into<Option<L>>) -> Result<Self> {
        let value = ensure_present!(value.into(), "left");
        Ok(Either::Left(value))
    }

    /// Build a right instance, failing with `MonadError::InvalidArgument`
    /// on absent input.
    pub fn try_right(value: impl Into<Option<R>>) -> Result<Self> {
        let value = ensure_present!(value.into(), "right");
        Ok(Either::Right(value))
    }

    /// The empty instance.
    pub fn neither() -> Self {
        Either::Neither
    }

    pub const fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    pub const fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    pub const fn is_neither(&self) -> bool {
        matches!(self, Either::Neither)
    }

    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(left) => Either::Left(left),
            Either::Right(right) => Either::Right(right),
            Either::Neither => Either::Neither,
        }
    }

    pub fn left_or_default(self, default: L) -> L {
        match self {
            Either::Left(left) => left,
            _ => default,
        }
    }

    pub fn right_or_default(self, default: R) -> R {
        match self {
            Either::Right(right) => right,
            _ => default,
        }
    }

    /// Exhaustive match with a plain value for `Neither`.
    pub fn match_or<U>(self, left: impl FnOnce(L) -> U, right: impl FnOnce(R) -> U, neither: U) -> U {
        match self {
            Either::Left(value) => left(value),
            Either::Right(value) => right(value),
            Either::Neither => neither,
        }
    }

    /// Exhaustive match with a lazily computed value for `Neither`.
    pub fn match_with<U>(
        self,
        left: impl FnOnce(L) -> U,
        right: impl FnOnce(R) -> U,
        neither: impl FnOnce() -> U,
    ) -> U {
        match self {
            Either::Left(value) => left(value),
            Either::Right(value) => right(value),
            Either::Neither => neither(),
        }
    }

    /// Two-armed match: `right` on `Right`, otherwise the fallback value.
    pub fn match_right_or<U>(self, left_or_neither: U, right: impl FnOnce(R) -> U) -> U {
        match self {
            Either::Right(value) => right(value),
            _ => left_or_neither,
        }
    }

    /// Transform the right payload. A result that converts to
    /// `Option::None` degrades to `Neither`.
    pub fn map<U, X, F>(self, f: F) -> Either<L, U>
    where
        F: FnOnce(R) -> X,
        X: Into<Option<U>>,
    {
        match self {
            Either::Right(value) => Either::from_right(f(value)),
            Either::Left(value) => Either::Left(value),
            Either::Neither => Either::Neither,
        }
    }

    /// Transform the left payload. A result that converts to
    /// `Option::None` degrades to `Neither`.
    pub fn map_left<U, X, F>(self, f: F) -> Either<U, R>
    where
        F: FnOnce(L) -> X,
        X: Into<Option<U>>,
    {
        match self {
            Either::Left(value) => Either::from_left(f(value)),
            Either::Right(value) => Either::Right(value),
            Either::Neither => Either::Neither,
        }
    }

    pub fn bind<U, F>(self, f: F) -> Either<L, U>
    where
        F: FnOnce(R) -> Either<L, U>,
    {
        match self {
            Either::Right(value) => f(value),
            Either::Left(value) => Either::Left(value),
            Either::Neither => Either::Neither,
        }
    }

    pub fn bind_left<U, F>(self, f: F) -> Either<U, R>
    where
        F: FnOnce(L) -> Either<U, R>,
    {
        match self {
            Either::Left(value) => f(value),
            Either::Right(value) => Either::Right(value),
            Either::Neither => Either::Neither,
        }
    }

    /// Run `f` if this is `Right`.
    pub fn do_right(&self, f: impl FnOnce(&R)) -> Unit {
        if let Either::Right(value) = self {
            f(value);
        }
        Unit
    }

    /// Run `f` unless this is `Right`.
    pub fn do_left_or_neither(&self, f: impl FnOnce()) -> Unit {
        if !self.is_right() {
            f();
        }
        Unit
    }

    /// Run `left` on `Left`, `neither` on `Neither`.
    pub fn do_left_or_neither_with(&self, left: impl FnOnce(&L), neither: impl FnOnce()) -> Unit {
        match self {
            Either::Left(value) => left(value),
            Either::Neither => neither(),
            Either::Right(_) => {}
        }
        Unit
    }

    /// Chaining form of [`Either::do_right`].
    pub fn inspect_right(self, f: impl FnOnce(&R)) -> Self {
        self.do_right(f);
        self
    }

    pub fn inspect_left(self, f: impl FnOnce(&L)) -> Self {
        if let Either::Left(value) = &self {
            f(value);
        }
        self
    }

    pub fn inspect_neither(self, f: impl FnOnce()) -> Self {
        if self.is_neither() {
            f();
        }
        self
    }

    /// Keep a `Right` only if `predicate` holds, otherwise `Neither`.
    ///
    /// The predicate only runs on `Right`; a `Left` passes through
    /// unchanged.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&R) -> bool,
    {
        match self {
            Either::Right(value) if predicate(&value) => Either::Right(value),
            Either::Right(_) => Either::Neither,
            other => other,
        }
    }

    /// Comprehension name for [`Either::map`].
    pub fn select<U, X, F>(self, f: F) -> Either<L, U>
    where
        F: FnOnce(R) -> X,
        X: Into<Option<U>>,
    {
        self.map(f)
    }

    /// Comprehension bind with projection over the right arm.
    ///
    /// A `Left` from the source or from `bind` short-circuits, as does
    /// `Neither`. A projection that produces no value fails with
    /// `MonadError::InvalidOperation`.
    pub fn select_many<I, V, X, B, P>(self, bind: B, project: P) -> Result<Either<L, V>>
    where
        B: FnOnce(&R) -> Either<L, I>,
        P: FnOnce(R, I) -> X,
        X: Into<Option<V>>,
    {
        let value = match self {
            Either::Right(value) => value,
            Either::Left(left) => return Ok(Either::Left(left)),
            Either::Neither => return Ok(Either::Neither),
        };
        let intermediate = match bind(&value) {
            Either::Right(intermediate) => intermediate,
            Either::Left(left) => return Ok(Either::Left(left)),
            Either::Neither => return Ok(Either::Neither),
        };
        match project(value, intermediate).into() {
            Some(result) => Ok(Either::Right(result)),
            None => bail_operation!("select_many projection produced no value"),
        }
    }
}

impl<L, R> From<std::result::Result<R, L>> for Either<L, R> {
    fn from(result: std::result::Result<R, L>) -> Self {
        match result {
            Ok(right) => Either::Right(right),
            Err(left) => Either::Left(left),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Either::Left(value) => write!(f, "Left({})", value),
            Either::Right(value) => write!(f, "Right({})", value),
            Either::Neither => write!(f, "Neither"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use tristate_error::MonadError;

    #[test]
    fn test_absent_inputs_collapse_to_neither() {
        let right = Either::<i32, String>::from_right(None);
        assert!(right.is_neither());
        assert_eq!(right.right_or_default("bar".to_string()), "bar");

        let left = Either::<i32, String>::from_left(None);
        assert!(left.is_neither());
        assert!(!left.is_left() && !left.is_right());
    }

    #[test]
    fn test_nested_option_payload_is_kept() {
        let right = Either::<i32, Option<i32>>::from_right(Some(None));
        assert_eq!(right, Either::Right(None));

        let left = Either::<Option<i32>, i32>::from_left(Some(None));
        assert_eq!(left, Either::Left(None));
    }

    #[test]
    fn test_default_is_neither() {
        assert_eq!(Either::<u8, u8>::default(), Either::Neither);
    }

    #[test]
    fn test_strict_constructors() {
        assert_eq!(Either::<i32, i32>::try_left(1), Ok(Either::Left(1)));
        assert_eq!(Either::<i32, i32>::try_right(2), Ok(Either::Right(2)));
        assert!(matches!(
            Either::<i32, i32>::try_right(None),
            Err(MonadError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_match_overloads() {
        let left = Either::<i32, String>::from_left(4);
        assert_eq!(left.clone().match_or(|_| "left", |_| "right", "neither"), "left");
        assert_eq!(left.match_right_or("other", |_| "right"), "other");

        let neither = Either::<i32, String>::neither();
        let lazy = Cell::new(false);
        let result = neither.match_with(
            |_| 0,
            |_| 1,
            || {
                lazy.set(true);
                2
            },
        );
        assert_eq!(result, 2);
        assert!(lazy.get());
    }

    #[test]
    fn test_map_leaves_other_arms() {
        let right: Either<&str, i32> = Either::Right(2);
        let left: Either<&str, i32> = Either::Left("bad");

        assert_eq!(right.map(|x| x + 1), Either::<&str, i32>::Right(3));
        assert_eq!(left.map(|x| x + 1), Either::<&str, i32>::Left("bad"));
        assert_eq!(left.map_left(|s| s.len()), Either::<usize, i32>::Left(3));
        assert_eq!(right.map_left(|s| s.len()), Either::<usize, i32>::Right(2));

        let degraded: Either<&str, i32> = right.map(|_| None);
        assert!(degraded.is_neither());
    }

    #[test]
    fn test_bind_flattens() {
        let parse = |s: &str| -> Either<String, i32> {
            s.parse::<i32>().map_err(|e| e.to_string()).into()
        };

        let ok: Either<String, &str> = Either::Right("12");
        let bad: Either<String, &str> = Either::Right("x");
        assert_eq!(ok.bind(parse), Either::Right(12));
        assert!(bad.bind(parse).is_left());

        let recovered: Either<String, i32> =
            Either::<&str, i32>::Left("fallback").bind_left(|_| Either::Right(0));
        assert_eq!(recovered, Either::Right(0));
    }

    #[test]
    fn test_do_effects() {
        let log = RefCell::new(Vec::new());

        Either::<i32, i32>::Right(1).do_right(|r| log.borrow_mut().push(format!("right {}", r)));
        Either::<i32, i32>::Left(2).do_right(|r| log.borrow_mut().push(format!("right {}", r)));
        Either::<i32, i32>::Left(2).do_left_or_neither(|| log.borrow_mut().push("left or neither".into()));
        Either::<i32, i32>::Neither.do_left_or_neither_with(
            |l| log.borrow_mut().push(format!("left {}", l)),
            || log.borrow_mut().push("neither".into()),
        );

        assert_eq!(*log.borrow(), vec!["right 1", "left or neither", "neither"]);
    }

    #[test]
    fn test_inspect_returns_self() {
        let seen = Cell::new(0);
        let value = Either::<i32, i32>::Right(5)
            .inspect_right(|r| seen.set(*r))
            .inspect_left(|_| seen.set(-1))
            .inspect_neither(|| seen.set(-2));
        assert_eq!(value, Either::Right(5));
        assert_eq!(seen.get(), 5);
    }

    #[test]
    fn test_filter_passes_left_through() {
        let called = Cell::new(false);
        let left = Either::<i32, i32>::Left(1).filter(|_| {
            called.set(true);
            false
        });
        assert_eq!(left, Either::Left(1));
        assert!(!called.get());

        assert_eq!(Either::<i32, i32>::Right(4).filter(|r| *r > 3), Either::Right(4));
        assert_eq!(Either::<i32, i32>::Right(2).filter(|r| *r > 3), Either::Neither);
        assert_eq!(Either::<i32, i32>::Neither.filter(|_| true), Either::Neither);
    }

    #[test]
    fn test_select_many() {
        let joined: Result<Either<String, String>> = Either::<String, &str>::Right("a")
            .select_many(|_| Either::Right("b"), |a, b| format!("{}{}", a, b));
        assert_eq!(joined, Ok(Either::Right("ab".to_string())));

        let short: Result<Either<String, String>> = Either::<String, &str>::Right("a")
            .select_many(|_| Either::<String, &str>::Left("stop".into()), |a, b| format!("{}{}", a, b));
        assert_eq!(short, Ok(Either::Left("stop".to_string())));

        let invalid: Result<Either<String, String>> =
            Either::<String, &str>::Right("a").select_many(|_| Either::Right("b"), |_, _| None);
        assert!(matches!(invalid, Err(MonadError::InvalidOperation(_))));
    }

    #[test]
    fn test_from_result_and_display() {
        let ok: Either<String, i32> = Ok(1).into();
        let err: Either<String, i32> = Err("no".to_string()).into();

        assert_eq!(ok.to_string(), "Right(1)");
        assert_eq!(err.to_string(), "Left(no)");
        assert_eq!(Either::<i32, i32>::Neither.to_string(), "Neither");
    }
}
