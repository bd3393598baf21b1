use std::collections::{HashMap, VecDeque};

use bondkit_core::Addend;

/// The positions of an input sequence that have not been consumed.
///
/// Positions are drawn in input order. Each value maps to the queue of its
/// remaining positions, so taking a complement always consumes its first
/// remaining occurrence.
pub(super) struct Pool<'a, T> {
    numbers: &'a [T],
    cursor: usize,
    consumed: Vec<bool>,
    remaining: HashMap<T, VecDeque<usize>>,
}

impl<'a, T: Addend> Pool<'a, T> {
    pub(super) fn new(numbers: &'a [T]) -> Self {
        let mut remaining: HashMap<T, VecDeque<usize>> = HashMap::new();
        for (position, &value) in numbers.iter().enumerate() {
            remaining.entry(value).or_default().push_back(position);
        }

        Self {
            numbers,
            cursor: 0,
            consumed: vec![false; numbers.len()],
            remaining,
        }
    }

    /// Removes and returns the first remaining position and its value.
    pub(super) fn draw(&mut self) -> Option<(usize, T)> {
        while self.cursor < self.numbers.len() {
            let position = self.cursor;
            self.cursor += 1;

            if self.consumed[position] {
                continue;
            }

            let value = self.numbers[position];
            let taken = self.take(value);
            debug_assert_eq!(taken, Some(position));

            return Some((position, value));
        }
        None
    }

    /// Returns the first remaining position holding `value`.
    pub(super) fn peek(&self, value: T) -> Option<usize> {
        self.remaining
            .get(&value)
            .and_then(|positions| positions.front().copied())
    }

    /// Consumes the first remaining position holding `value`.
    pub(super) fn take(&mut self, value: T) -> Option<usize> {
        let position = self.remaining.get_mut(&value)?.pop_front()?;
        self.consumed[position] = true;
        Some(position)
    }
}
