//! Uniform-cost search over a [`Graph`].

use std::collections::{BinaryHeap, HashMap};
use std::fmt::Debug;
use std::hash::Hash;

use crate::{
    algorithms::{
        frontier::FrontierEntry,
        path::{on_parent_chain, reconstruct_path},
    },
    error::{Error, Result},
    graph::Graph,
    route::Route,
};

/// Searches `graph` using [Dijkstra's Algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm)
/// for the cheapest route from `start` to `goal`.
///
/// The frontier is a binary heap without decrease-key: an improved node is
/// pushed again and the outdated entry is discarded when it surfaces. The
/// search stops as soon as `goal` is extracted, which is exact because keys
/// come out in non-decreasing order when every weight is non-negative.
///
/// # Returns
/// The route and its cost, or [`Route::unreachable`] if the frontier runs
/// dry first.
///
/// # Errors
/// [`Error::UnknownNode`] if `start` or `goal` is not in the graph.
/// [`Error::NegativeCycle`] if the graph allows negative weights and the
/// search runs into a cycle of negative total weight before reaching `goal`.
///
/// # Time Complexity
/// *O*((*V* + *E*) log *V*) for non-negative weights. With
/// [`RouterConfig::allow_negative_weights`](crate::config::RouterConfig::allow_negative_weights)
/// every improvement also walks the predecessor chain, and nodes may be
/// expanded more than once.
pub fn dijkstra<N>(graph: &Graph<N>, start: &N, goal: &N) -> Result<Route<N>>
where
    N: Clone + Eq + Hash + Debug,
{
    for node in [start, goal] {
        if !graph.contains_node(node) {
            return Err(Error::unknown_node(node));
        }
    }
    let check_cycles = graph.config().allow_negative_weights;
    debug!("Dijkstra from {:?} to {:?}", start, goal);

    let mut distances: HashMap<N, f64> = HashMap::new();
    let mut parents: HashMap<N, Option<N>> = HashMap::new();
    let mut frontier = BinaryHeap::new();
    let mut expanded = 0;

    distances.insert(start.clone(), 0.0);
    parents.insert(start.clone(), None);
    frontier.push(FrontierEntry::new(0.0, start.clone()));

    while let Some(FrontierEntry { key, node }) = frontier.pop() {
        let distance = key.into_inner();
        if distance > distances.get(&node).copied().unwrap_or(f64::INFINITY) {
            trace!("Skipping stale entry {:?} at {}", node, distance);
            continue;
        }

        if node == *goal {
            let path = reconstruct_path(&parents, &node);
            debug!("Dijkstra reached {:?}: cost {}, {} expanded", goal, distance, expanded);
            return Ok(Route::new(path, distance, expanded));
        }
        expanded += 1;

        for (neighbor, weight) in graph.neighbors(&node) {
            let candidate = distance + weight;
            if candidate < distances.get(neighbor).copied().unwrap_or(f64::INFINITY) {
                if check_cycles && on_parent_chain(&parents, &node, neighbor) {
                    warn!("Negative cycle through {:?}", neighbor);
                    return Err(Error::negative_cycle(neighbor));
                }
                distances.insert(neighbor.clone(), candidate);
                parents.insert(neighbor.clone(), Some(node.clone()));
                frontier.push(FrontierEntry::new(candidate, neighbor.clone()));
            }
        }
    }

    debug!("No route from {:?} to {:?} ({} expanded)", start, goal, expanded);
    Ok(Route::unreachable(expanded))
}
