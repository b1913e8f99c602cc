//! The unit value: a placeholder carrying no information.

use std::fmt;

/// Single-valued type used to fill an `Either` arm that carries no
/// information, and as the return marker of side-effecting combinators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit;

impl Unit {
    /// The canonical instance
    pub const DEFAULT: Unit = Unit;
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "()")
    }
}

impl From<()> for Unit {
    fn from(_: ()) -> Self {
        Unit
    }
}

impl From<Unit> for () {
    fn from(_: Unit) -> Self {}
}
