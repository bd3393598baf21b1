/// A hook called by a finder once per scan step.
///
/// `E` is the finder's event type and `A` its action type. Returning `None`
/// leaves the scan alone; returning `Some(action)` asks the finder to change
/// course, for example to stop or to decline a pairing. Which actions are
/// honored for which events is documented by each finder.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is the
/// observer that never acts.
pub trait Observer<E, A> {
    /// Inspects `event` and returns the action the finder should take, if any.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _: &E) -> Option<A> {
        None
    }
}
