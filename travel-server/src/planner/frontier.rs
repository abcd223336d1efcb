//! Best-first frontier with stable tie-breaking.
//!
//! Entries pop in ascending score order. Entries with equal scores pop in
//! the order they were pushed, which keeps searches deterministic.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Ordering key: score first, then insertion sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierKey {
    score: i64,
    seq: u64,
}

#[derive(Debug)]
struct FrontierEntry<T> {
    key: FrontierKey,
    item: T,
}

impl<T> PartialEq for FrontierEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T> Eq for FrontierEntry<T> {}

impl<T> PartialOrd for FrontierEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for FrontierEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Min-priority queue of pending search states.
///
/// `BinaryHeap` is a max-heap, so entries are wrapped in `Reverse`.
#[derive(Debug)]
pub(crate) struct Frontier<T> {
    heap: BinaryHeap<Reverse<FrontierEntry<T>>>,
    next_seq: u64,
    high_water: usize,
}

impl<T> Frontier<T> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
            high_water: 0,
        }
    }

    /// Add an item with the given score.
    pub(crate) fn push(&mut self, score: i64, item: T) {
        let key = FrontierKey {
            score,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.heap.push(Reverse(FrontierEntry { key, item }));
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Remove the lowest-scoring item, earliest pushed first on ties.
    pub(crate) fn pop(&mut self) -> Option<(i64, T)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.key.score, entry.item))
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    /// Largest size the frontier has reached.
    pub(crate) fn high_water(&self) -> usize {
        self.high_water
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_lowest_score_first() {
        let mut frontier = Frontier::new();
        frontier.push(10, "b");
        frontier.push(-5, "a");
        frontier.push(30, "c");

        assert_eq!(frontier.pop(), Some((-5, "a")));
        assert_eq!(frontier.pop(), Some((10, "b")));
        assert_eq!(frontier.pop(), Some((30, "c")));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn ties_pop_in_insertion_order() {
        let mut frontier = Frontier::new();
        for name in ["first", "second", "third", "fourth"] {
            frontier.push(7, name);
        }
        frontier.push(3, "low");

        assert_eq!(frontier.pop(), Some((3, "low")));
        assert_eq!(frontier.pop(), Some((7, "first")));
        assert_eq!(frontier.pop(), Some((7, "second")));
        assert_eq!(frontier.pop(), Some((7, "third")));
        assert_eq!(frontier.pop(), Some((7, "fourth")));
    }

    #[test]
    fn tie_order_survives_interleaving() {
        let mut frontier = Frontier::new();
        frontier.push(1, "a");
        frontier.push(0, "x");
        assert_eq!(frontier.pop(), Some((0, "x")));
        frontier.push(1, "b");
        assert_eq!(frontier.pop(), Some((1, "a")));
        assert_eq!(frontier.pop(), Some((1, "b")));
    }

    #[test]
    fn tracks_len_and_high_water() {
        let mut frontier = Frontier::new();
        assert_eq!(frontier.len(), 0);
        frontier.push(1, ());
        frontier.push(2, ());
        frontier.push(3, ());
        assert_eq!(frontier.len(), 3);
        let _ = frontier.pop();
        let _ = frontier.pop();
        assert_eq!(frontier.len(), 1);
        assert_eq!(frontier.high_water(), 3);
    }
}
