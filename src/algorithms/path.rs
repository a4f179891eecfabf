//! Turns a predecessor map into an ordered route.

use std::collections::HashMap;
use std::hash::Hash;

/// Follows predecessor links back from `terminal` until a node without a
/// predecessor is reached, then returns the nodes in travel order.
///
/// A node recorded as `None`, or missing from `parents` entirely, ends the
/// walk. The result always contains at least `terminal`, so a query whose
/// start equals its goal yields a single-element path.
///
/// The solvers never record a cyclic chain. If `parents` holds one anyway,
/// the walk stops after `parents.len()` links instead of looping.
pub fn reconstruct_path<N>(parents: &HashMap<N, Option<N>>, terminal: &N) -> Vec<N>
where
    N: Clone + Eq + Hash,
{
    let mut path = vec![terminal.clone()];
    let mut current = terminal;
    while path.len() <= parents.len() {
        match parents.get(current) {
            Some(Some(previous)) => {
                path.push(previous.clone());
                current = previous;
            }
            _ => break,
        }
    }
    path.reverse();
    path
}

/// Whether `target` is `node` itself or one of its recorded predecessors.
///
/// Relaxing an edge into such a `target` would close a cycle in `parents`,
/// which only a negative cycle in the graph can cause. `parents` must be
/// acyclic.
pub(crate) fn on_parent_chain<N>(parents: &HashMap<N, Option<N>>, node: &N, target: &N) -> bool
where
    N: Eq + Hash,
{
    let mut current = node;
    loop {
        if current == target {
            return true;
        }
        match parents.get(current) {
            Some(Some(previous)) => current = previous,
            _ => return false,
        }
    }
}
