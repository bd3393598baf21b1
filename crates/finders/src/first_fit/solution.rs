use bondkit_core::Bond;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Indicates whether the scan consumed the whole input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    /// Every position was drawn or consumed as a complement.
    Exhausted,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a first-fit scan.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solution<T> {
    /// Final scan status.
    pub status: Status,

    /// Bonds in the order their numbers were drawn.
    pub bonds: Vec<Bond<T>>,

    /// Drawn values that were discarded without a bond, in draw order.
    pub unmatched: Vec<T>,
}

impl<T> Solution<T> {
    pub(super) fn new(status: Status, bonds: Vec<Bond<T>>, unmatched: Vec<T>) -> Self {
        Self {
            status,
            bonds,
            unmatched,
        }
    }

    /// Consumes the solution and returns its bonds as `(number, complement)` pairs.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(T, T)> {
        self.bonds.into_iter().map(Into::into).collect()
    }
}
