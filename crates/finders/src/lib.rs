//! Bond finders for the bondkit framework.
//!
//! A number bond is a pair of values from an input sequence whose sum equals
//! a target. Finders in this crate pair up disjoint positions of the input,
//! so each element contributes to at most one bond.
//!
//! # Finders
//!
//! - [`first_fit`]: greedy scan in input order; each drawn value is paired
//!   with the first remaining occurrence of its complement
//!
//! # Verification
//!
//! - [`verify`]: checks a list of bonds against the target and the input

pub mod first_fit;
pub mod verify;

use bondkit_core::Addend;

/// Finds disjoint number bonds using greedy first-fit.
///
/// Returns the bonds as `(number, complement)` pairs in the order each
/// `number` was drawn from `numbers`.
///
/// # Example
///
/// ```
/// use bondkit_finders::find;
///
/// assert_eq!(find(4, &[3, 4, 1, 0, 4]), vec![(3, 1), (4, 0)]);
/// assert!(find(2, &[1, 2]).is_empty());
/// ```
#[must_use]
pub fn find<T: Addend>(target: T, numbers: &[T]) -> Vec<(T, T)> {
    first_fit::find_unobserved(target, numbers).into_pairs()
}
