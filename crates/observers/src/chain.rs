use bondkit_core::Observer;

/// Runs two observers in order.
///
/// The first observer sees every event. The second observer only sees events
/// for which the first returned `None`, and the first action returned wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Chain<First, Second>(pub First, pub Second);

impl<E, A, First, Second> Observer<E, A> for Chain<First, Second>
where
    First: Observer<E, A>,
    Second: Observer<E, A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.0.observe(event).or_else(|| self.1.observe(event))
    }
}
