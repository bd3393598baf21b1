use bondkit_core::Bond;

/// Events emitted by the first-fit finder, one per drawn position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event<T> {
    /// A complement is available for the drawn number.
    Matched {
        /// The drawn value.
        number: T,

        /// The value that completes the sum.
        complement: T,

        /// Input position of the drawn value.
        position: usize,

        /// Input position of the complement that would be consumed.
        complement_position: usize,
    },

    /// No complement remains for the drawn number.
    Unmatched {
        /// The drawn value.
        number: T,

        /// Input position of the drawn value.
        position: usize,
    },
}

impl<T: Copy> Event<T> {
    /// Returns the drawn value.
    #[must_use]
    pub fn number(&self) -> T {
        match self {
            Self::Matched { number, .. } | Self::Unmatched { number, .. } => *number,
        }
    }

    /// Returns the input position of the drawn value.
    #[must_use]
    pub fn position(&self) -> usize {
        match self {
            Self::Matched { position, .. } | Self::Unmatched { position, .. } => *position,
        }
    }

    /// Returns the candidate bond, if a complement was found.
    #[must_use]
    pub fn bond(&self) -> Option<Bond<T>> {
        match self {
            Self::Matched {
                number, complement, ..
            } => Some(Bond::new(*number, *complement)),
            Self::Unmatched { .. } => None,
        }
    }
}
