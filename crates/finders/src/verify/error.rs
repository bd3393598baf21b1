use bondkit_core::Addend;

/// Errors reported when a bond list does not match its input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error<T: Addend> {
    #[error("bond {index} ({number}, {complement}) does not sum to {target}")]
    WrongSum {
        index: usize,
        number: T,
        complement: T,
        target: T,
    },

    #[error("bond {index} uses {value} more times than the input provides")]
    NotAvailable { index: usize, value: T },
}
