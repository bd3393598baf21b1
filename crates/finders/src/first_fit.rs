//! Greedy first-fit bond finding.
//!
//! # Algorithm
//!
//! The finder walks the input in order. Each position not yet consumed is
//! drawn as `number`, and the finder looks for `target - number` among the
//! positions that remain. If the complement is present, the first remaining
//! occurrence is consumed and the pair is recorded. Otherwise `number` is
//! discarded. A value can only pair with itself when a second occurrence
//! remains.
//!
//! # Limitations
//!
//! - **Order-dependent**: earlier draws claim complements first, with no
//!   backtracking. `[1, 3, 3, 5]` with target `6` yields `(1, 5), (3, 3)`,
//!   while `[5, 3, 1, 3]` yields `(5, 1), (3, 3)`.
//! - **Checked arithmetic**: a complement that does not fit in `T` is treated
//!   as absent. This deliberately differs from wrapping arithmetic, where
//!   `i32::MIN - 1` wraps to `i32::MAX` and `[1, i32::MAX]` would pair for
//!   target `i32::MIN`.
//!
//! # Observer Events
//!
//! The finder emits one [`Event`] per drawn position:
//!
//! - [`Event::Matched`]: a complement is available; the bond is committed
//!   after the observer returns
//! - [`Event::Unmatched`]: no complement remains; `number` is discarded
//!
//! Observers can return [`Action::StopEarly`] to halt after the current
//! event, or [`Action::Reject`] to decline a matched bond. A rejected bond
//! leaves its complement in the pool and discards `number`.

mod action;
mod event;
mod pool;
mod solution;


pub use action::Action;
pub use event::Event;
pub use solution::{Solution, Status};

use bondkit_core::{Addend, Bond, Observer};

use pool::Pool;

/// Finds disjoint number bonds using greedy first-fit.
///
/// The observer receives an [`Event`] for each drawn position.
/// See the [module docs](self) for details on event timing and observer actions.
pub fn find<T, Obs>(target: T, numbers: &[T], mut observer: Obs) -> Solution<T>
where
    T: Addend,
    Obs: Observer<Event<T>, Action>,
{
    let mut pool = Pool::new(numbers);
    let mut bonds = Vec::new();
    let mut unmatched = Vec::new();

    while let Some((position, number)) = pool.draw() {
        let candidate = target
            .complement_of(number)
            .and_then(|complement| pool.peek(complement).map(|at| (complement, at)));

        let Some((complement, complement_position)) = candidate else {
            unmatched.push(number);

            let event = Event::Unmatched { number, position };
            if let Some(Action::StopEarly) = observer.observe(&event) {
                return Solution::new(Status::StoppedByObserver, bonds, unmatched);
            }
            continue;
        };

        let event = Event::Matched {
            number,
            complement,
            position,
            complement_position,
        };

        match observer.observe(&event) {
            Some(Action::Reject) => unmatched.push(number),
            action => {
                let taken = pool.take(complement);
                debug_assert_eq!(taken, Some(complement_position));
                bonds.push(Bond::new(number, complement));

                if let Some(Action::StopEarly) = action {
                    return Solution::new(Status::StoppedByObserver, bonds, unmatched);
                }
            }
        }
    }

    Solution::new(Status::Exhausted, bonds, unmatched)
}

/// Finds disjoint number bonds without observer support.
///
/// This is a convenience wrapper around [`find`] that uses a no-op observer.
///
/// # Example
///
/// ```
/// use bondkit_core::Bond;
/// use bondkit_finders::first_fit::{Status, find_unobserved};
///
/// let solution = find_unobserved(2, &[1, 2, 1]);
///
/// assert_eq!(solution.status, Status::Exhausted);
/// assert_eq!(solution.bonds, vec![Bond::new(1, 1)]);
/// assert_eq!(solution.unmatched, vec![2]);
/// ```
pub fn find_unobserved<T: Addend>(target: T, numbers: &[T]) -> Solution<T> {
    find(target, numbers, ())
}
