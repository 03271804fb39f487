//! `BoardingQueue` — the final order plus an admission cursor.

use ab_core::PassengerId;

/// Passengers not yet admitted through the door, in boarding order.
#[derive(Clone, Debug)]
pub struct BoardingQueue {
    order:     Vec<PassengerId>,
    /// `positions[id]` = index of `id` in `order`.
    positions: Vec<usize>,
    cursor:    usize,
}

impl BoardingQueue {
    /// Wrap a final order.  Every id must appear at most once.
    pub fn new(order: Vec<PassengerId>) -> Self {
        let len = order.iter().map(|p| p.index() + 1).max().unwrap_or(0);
        let mut positions = vec![usize::MAX; len];
        for (i, p) in order.iter().enumerate() {
            positions[p.index()] = i;
        }
        Self { order, positions, cursor: 0 }
    }

    /// The next passenger to admit, if any.
    #[inline]
    pub fn peek(&self) -> Option<PassengerId> {
        self.order.get(self.cursor).copied()
    }

    /// Pop the head of the queue.
    pub fn advance(&mut self) -> Option<PassengerId> {
        let head = self.peek()?;
        self.cursor += 1;
        Some(head)
    }

    /// Passengers still waiting to be admitted.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.order.len() - self.cursor
    }

    /// Passengers already admitted.
    #[inline]
    pub fn admitted(&self) -> usize {
        self.cursor
    }

    /// Index of `passenger` in the full order.
    pub fn position_of(&self, passenger: PassengerId) -> Option<usize> {
        self.positions
            .get(passenger.index())
            .copied()
            .filter(|&i| i != usize::MAX)
    }

    /// The full order, admitted passengers included.
    pub fn order(&self) -> &[PassengerId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
