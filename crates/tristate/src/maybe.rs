//! `Maybe<T>`: a value, or nothing.
//!
//! Every construction path funnels through the same presence test: an input
//! that converts to `Option::None` yields `Maybe::None`, never a `Some`
//! holding absence. Mapping functions may return either a bare value or an
//! `Option`, and an absent result collapses the same way.

use std::fmt;

use tracing::trace;
use tristate_error::{bail_operation, ensure_present, Result};

/// Optional value with a total combinator surface.
///
/// The zero value (`Maybe::default()`) is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// No value
    None,
    /// A present value
    Some(T),
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::None
    }
}

impl<T> Maybe<T> {
    /// Build from a value that may be absent. `None` collapses to
    /// `Maybe::None`; anything else is wrapped.
    ///
    /// Only the outer `Option` is inspected. When `T` is itself an
    /// `Option`, `Some(None)` is a present value and yields
    /// `Maybe::Some(None)`; flatten first to collapse it.
    pub fn new(value: impl Into<Option<T>>) -> Self {
        match value.into() {
            Some(value) => Maybe::Some(value),
            None => {
                trace!(target: "tristate", "absent value collapsed to Maybe::None");
                Maybe::None
            }
        }
    }

    /// Wrap a value that is known to be present.
    pub fn some(value: T) -> Self {
        Maybe::Some(value)
    }

    /// The empty instance.
    pub fn none() -> Self {
        Maybe::None
    }

    /// Build from a value the caller asserts is present.
    ///
    /// Fails with `MonadError::InvalidArgument` instead of collapsing.
    pub fn try_some(value: impl Into<Option<T>>) -> Result<Self> {
        let value = ensure_present!(value.into(), "value");
        Ok(Maybe::Some(value))
    }

    pub const fn is_some(&self) -> bool {
        matches!(self, Maybe::Some(_))
    }

    pub const fn is_none(&self) -> bool {
        matches!(self, Maybe::None)
    }

    /// Borrow the payload.
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Some(value) => Maybe::Some(value),
            Maybe::None => Maybe::None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Some(value) => Some(value),
            Maybe::None => None,
        }
    }

    /// The payload, or `default` when empty.
    pub fn some_or_default(self, default: T) -> T {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => default,
        }
    }

    /// The payload, or the result of `default` when empty.
    pub fn some_or_else(self, default: impl FnOnce() -> T) -> T {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => default(),
        }
    }

    /// Exhaustive match with a plain fallback for the empty state.
    pub fn match_or<U>(self, none: U, some: impl FnOnce(T) -> U) -> U {
        match self {
            Maybe::Some(value) => some(value),
            Maybe::None => none,
        }
    }

    /// Exhaustive match with a lazily computed fallback.
    pub fn match_with<U>(self, none: impl FnOnce() -> U, some: impl FnOnce(T) -> U) -> U {
        match self {
            Maybe::Some(value) => some(value),
            Maybe::None => none(),
        }
    }

    /// Run `f` on the payload if present; returns `self` for chaining.
    pub fn if_some(self, f: impl FnOnce(&T)) -> Self {
        if let Maybe::Some(value) = &self {
            f(value);
        }
        self
    }

    /// Run `f` if empty; returns `self` for chaining.
    pub fn if_none(self, f: impl FnOnce()) -> Self {
        if self.is_none() {
            f();
        }
        self
    }

    /// Transform the payload. A result that converts to `Option::None`
    /// collapses to `Maybe::None`.
    pub fn map<U, R, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> R,
        R: Into<Option<U>>,
    {
        match self {
            Maybe::Some(value) => Maybe::new(f(value)),
            Maybe::None => Maybe::None,
        }
    }

    /// Chain a computation that itself may produce nothing.
    pub fn bind<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Some(value) => f(value),
            Maybe::None => Maybe::None,
        }
    }

    /// Keep the payload only if `predicate` holds.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Some(value) if predicate(&value) => Maybe::Some(value),
            _ => Maybe::None,
        }
    }

    /// Comprehension name for [`Maybe::map`].
    pub fn select<U, R, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> R,
        R: Into<Option<U>>,
    {
        self.map(f)
    }

    /// Comprehension bind with projection.
    ///
    /// `bind` sees the payload by reference so `project` can receive it
    /// together with the intermediate value. An empty source or an empty
    /// intermediate yields `Ok(Maybe::None)`; a projection that produces no
    /// value is a logic error and fails with `MonadError::InvalidOperation`.
    pub fn select_many<I, V, X, B, P>(self, bind: B, project: P) -> Result<Maybe<V>>
    where
        B: FnOnce(&T) -> Maybe<I>,
        P: FnOnce(T, I) -> X,
        X: Into<Option<V>>,
    {
        let value = match self {
            Maybe::Some(value) => value,
            Maybe::None => return Ok(Maybe::None),
        };
        let intermediate = match bind(&value) {
            Maybe::Some(intermediate) => intermediate,
            Maybe::None => return Ok(Maybe::None),
        };
        match project(value, intermediate).into() {
            Some(result) => Ok(Maybe::Some(result)),
            None => bail_operation!("select_many projection produced no value"),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Maybe::new(value)
    }
}

impl<T> From<T> for Maybe<T> {
    fn from(value: T) -> Self {
        Maybe::Some(value)
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Maybe::Some(value) => write!(f, "Some({})", value),
            Maybe::None => write!(f, "None"),
        }
    }
}
