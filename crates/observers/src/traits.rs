//! Capability traits for cross-finder observers.
//!
//! These traits abstract over finder-specific event and action types, enabling
//! observers to work generically across different finders.
//!
//! # Event traits
//!
//! - [`HasBond`]: events that may carry a candidate bond
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//! - [`CanReject`]: actions that can decline a candidate bond
//!
//! # Example
//!
//! ```rust
//! use bondkit_core::Observer;
//! use bondkit_observers::traits::{CanReject, HasBond};
//!
//! /// Declines every bond that uses a value from a blocklist.
//! struct Blocklist(Vec<i32>);
//!
//! impl<E: HasBond<Value = i32>, A: CanReject> Observer<E, A> for Blocklist {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         let bond = event.bond()?;
//!         let blocked = self.0.contains(&bond.number) || self.0.contains(&bond.complement);
//!         blocked.then(A::reject)
//!     }
//! }
//! ```

use bondkit_core::{Addend, Bond};

use bondkit_finders::first_fit;

/// An event that may carry a candidate bond.
pub trait HasBond {
    /// The integer type being paired.
    type Value;

    /// Returns the candidate bond for this event.
    ///
    /// Returns `None` when the event represents a draw with no complement.
    fn bond(&self) -> Option<Bond<Self::Value>>;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the finder early.
    fn stop_early() -> Self;
}

/// An action type that can decline a candidate bond.
pub trait CanReject {
    /// Returns the action that leaves the candidate bond uncommitted.
    fn reject() -> Self;
}

// --- HasBond for first_fit::Event ---

impl<T: Addend> HasBond for first_fit::Event<T> {
    type Value = T;

    fn bond(&self) -> Option<Bond<T>> {
        first_fit::Event::bond(self)
    }
}

// --- Action impls ---

impl CanStopEarly for first_fit::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanReject for first_fit::Action {
    fn reject() -> Self {
        Self::Reject
    }
}
