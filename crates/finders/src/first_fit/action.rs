/// Actions an observer can take during a first-fit scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the scan after the current event and return the bonds found so far.
    ///
    /// When returned for [`Event::Matched`](super::Event::Matched), the
    /// matched bond is committed before stopping.
    StopEarly,

    /// Decline the matched bond.
    ///
    /// The complement stays in the pool for later draws and the drawn number
    /// is discarded as unmatched. Has no effect on
    /// [`Event::Unmatched`](super::Event::Unmatched).
    Reject,
}
