use std::num::NonZeroUsize;

use bondkit_core::Observer;

use crate::traits::{CanStopEarly, HasBond};

/// Stops a scan once it has seen a given number of bonds.
///
/// Events without a bond are ignored. Every bond seen is counted as if it
/// will be committed, including the one that reaches the limit. When nothing
/// after this observer in a [`Chain`](crate::Chain) can reject, the scan ends
/// with exactly `limit` bonds if enough are available. A later rejection
/// still counts toward the limit, so put rejecting observers first.
///
/// ```
/// use std::num::NonZeroUsize;
///
/// use bondkit_finders::first_fit::{self, Status};
/// use bondkit_observers::StopAfter;
///
/// let limit = NonZeroUsize::new(1).expect("non-zero");
/// let solution = first_fit::find(4, &[3, 4, 1, 0, 4], StopAfter::new(limit));
///
/// assert_eq!(solution.status, Status::StoppedByObserver);
/// assert_eq!(solution.bonds.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopAfter {
    limit: NonZeroUsize,
    seen: usize,
}

impl StopAfter {
    /// Creates an observer that stops after `limit` bonds.
    #[must_use]
    pub fn new(limit: NonZeroUsize) -> Self {
        Self { limit, seen: 0 }
    }

    /// Returns the number of bonds seen so far.
    #[must_use]
    pub fn seen(&self) -> usize {
        self.seen
    }
}

impl<E: HasBond, A: CanStopEarly> Observer<E, A> for StopAfter {
    fn observe(&mut self, event: &E) -> Option<A> {
        event.bond()?;
        self.seen += 1;
        (self.seen >= self.limit.get()).then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use bondkit_core::Bond;
    use bondkit_finders::first_fit::{self, Action, Event, Status};

    use crate::Chain;

    fn limit(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).expect("limit should be non-zero")
    }

    #[test]
    fn stops_at_the_limit() {
        let solution = first_fit::find(6, &[1, 5, 2, 4, 3, 3], StopAfter::new(limit(2)));

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.bonds, vec![Bond::new(1, 5), Bond::new(2, 4)]);
    }

    #[test]
    fn counts_only_bond_events() {
        let mut observer = StopAfter::new(limit(2));
        let matched = Event::Matched {
            number: 1,
            complement: 5,
            position: 0,
            complement_position: 1,
        };
        let unmatched = Event::Unmatched {
            number: 9,
            position: 2,
        };

        let action: Option<Action> = observer.observe(&unmatched);
        assert_eq!(action, None);
        assert_eq!(observer.seen(), 0);

        let action: Option<Action> = observer.observe(&matched);
        assert_eq!(action, None);
        assert_eq!(observer.seen(), 1);

        let action: Option<Action> = observer.observe(&matched);
        assert_eq!(action, Some(Action::StopEarly));
        assert_eq!(observer.seen(), 2);
    }

    #[test]
    fn runs_to_exhaustion_below_the_limit() {
        let solution = first_fit::find(6, &[1, 5, 9], StopAfter::new(limit(2)));

        assert_eq!(solution.status, Status::Exhausted);
        assert_eq!(solution.bonds, vec![Bond::new(1, 5)]);
        assert_eq!(solution.unmatched, vec![9]);
    }

    #[test]
    fn ignores_unmatched_draws() {
        let solution = first_fit::find(6, &[7, 8, 9, 1, 5], StopAfter::new(limit(1)));

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.bonds, vec![Bond::new(1, 5)]);
        assert_eq!(solution.unmatched, vec![7, 8, 9]);
    }

    #[test]
    fn later_rejection_still_counts() {
        let reject_ones = |event: &Event<i32>| match event.bond() {
            Some(bond) if bond.number == 1 => Some(Action::Reject),
            _ => None,
        };

        let solution = first_fit::find(
            6,
            &[1, 5, 2, 4, 3, 3],
            Chain(StopAfter::new(limit(2)), reject_ones),
        );

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.bonds, vec![Bond::new(2, 4)]);
        assert_eq!(solution.unmatched, vec![1, 5]);
    }
}
