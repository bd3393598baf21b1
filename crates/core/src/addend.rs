use std::{fmt, hash::Hash};

/// An integer type whose values can be paired by sum.
///
/// Finders only need to compute a complement (`target - number`) and, when
/// verifying, a sum. Both are checked: a result that does not fit in the
/// type means the pair cannot exist, so no finder ever overflows.
///
/// Implemented for every primitive integer type.
pub trait Addend: Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Returns `self - rhs`, or `None` if the result is not representable.
    fn checked_sub(self, rhs: Self) -> Option<Self>;

    /// Returns `self + rhs`, or `None` if the result is not representable.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Returns the complement of `number` with respect to `self` as a target.
    ///
    /// ```
    /// use bondkit_core::Addend;
    ///
    /// assert_eq!(10_i32.complement_of(3), Some(7));
    /// assert_eq!(3_u8.complement_of(5), None);
    /// ```
    fn complement_of(self, number: Self) -> Option<Self> {
        self.checked_sub(number)
    }
}

macro_rules! impl_addend {
    ($($t:ty),* $(,)?) => {
        $(
            impl Addend for $t {
                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_sub(self, rhs)
                }

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }
            }
        )*
    };
}

impl_addend!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
