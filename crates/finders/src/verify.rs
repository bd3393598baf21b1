//! Verification of bond lists.
//!
//! [`verify`] checks that a list of bonds could have been produced from an
//! input sequence: every bond sums to the target, and no bond uses a value
//! more times than the input provides. Any finder in this crate produces
//! lists that pass; bonds from other sources can be checked the same way.

mod error;

pub use error::Error;

use std::collections::HashMap;

use bondkit_core::{Addend, Bond};

/// Checks `bonds` against `target` and the values in `numbers`.
///
/// Bonds are checked in order and the first failure is returned. Values are
/// matched by multiplicity, so two bonds that each use a `3` need two `3`s in
/// the input.
///
/// # Errors
///
/// Returns [`Error::WrongSum`] if a bond does not sum to `target` (including
/// sums that overflow `T`), or [`Error::NotAvailable`] if a bond uses a value
/// that the input has already run out of.
///
/// # Example
///
/// ```
/// use bondkit_core::Bond;
/// use bondkit_finders::verify::{Error, verify};
///
/// let numbers = [3, 4, 1, 0, 4];
/// assert!(verify(4, &numbers, &[Bond::new(3, 1), Bond::new(4, 0)]).is_ok());
///
/// let reused = verify(4, &numbers, &[Bond::new(3, 1), Bond::new(0, 4), Bond::new(4, 0)]);
/// assert_eq!(reused, Err(Error::NotAvailable { index: 2, value: 0 }));
/// ```
pub fn verify<T: Addend>(target: T, numbers: &[T], bonds: &[Bond<T>]) -> Result<(), Error<T>> {
    let mut available: HashMap<T, usize> = HashMap::new();
    for &value in numbers {
        *available.entry(value).or_default() += 1;
    }

    for (index, bond) in bonds.iter().enumerate() {
        if bond.number.checked_add(bond.complement) != Some(target) {
            return Err(Error::WrongSum {
                index,
                number: bond.number,
                complement: bond.complement,
                target,
            });
        }

        for value in [bond.number, bond.complement] {
            let count = available
                .get_mut(&value)
                .filter(|count| **count > 0)
                .ok_or(Error::NotAvailable { index, value })?;
            *count -= 1;
        }
    }

    Ok(())
}
