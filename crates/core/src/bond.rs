use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A pair of values whose sum is the target.
///
/// `number` is the value drawn first in scan order and `complement` is the
/// value it was paired with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bond<T> {
    /// The value drawn first.
    pub number: T,

    /// The value that completes the sum.
    pub complement: T,
}

impl<T> Bond<T> {
    /// Creates a bond from a drawn number and its complement.
    #[must_use]
    pub const fn new(number: T, complement: T) -> Self {
        Self { number, complement }
    }
}

impl<T> From<(T, T)> for Bond<T> {
    fn from((number, complement): (T, T)) -> Self {
        Self { number, complement }
    }
}

impl<T> From<Bond<T>> for (T, T) {
    fn from(bond: Bond<T>) -> Self {
        (bond.number, bond.complement)
    }
}

impl<T: fmt::Display> fmt::Display for Bond<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.number, self.complement)
    }
}
