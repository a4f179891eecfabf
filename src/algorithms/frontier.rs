//! Priority queue entries shared by the solvers.
//!
//! [`BinaryHeap`](std::collections::BinaryHeap) is a max-heap and offers no
//! decrease-key, so solvers push a fresh entry whenever a node improves and
//! the ordering below is reversed to pop the smallest key first. Entries
//! with an equal key come out in whatever order the heap yields them.

use std::cmp::Ordering;

use ordered_float::OrderedFloat;

/// A node waiting in the frontier, keyed by `dist` (Dijkstra) or `f` (A*).
#[derive(Debug, Clone)]
pub(crate) struct FrontierEntry<N> {
    pub key: OrderedFloat<f64>,
    pub node: N,
}

impl<N> FrontierEntry<N> {
    pub fn new(key: f64, node: N) -> Self {
        FrontierEntry {
            key: OrderedFloat(key),
            node,
        }
    }
}

impl<N> PartialEq for FrontierEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<N> Eq for FrontierEntry<N> {}

impl<N> Ord for FrontierEntry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by key.
        other.key.cmp(&self.key)
    }
}

impl<N> PartialOrd for FrontierEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
