//! Helper functons for building edge lists.

use ordered_float::OrderedFloat;

use crate::location::Location;

/// Duplicates every road into its two directed edges.
///
/// A road network usually lists each street once. The graph stores
/// directions independently, so both halves start with the same weight
/// and may diverge after a [`Direction::Forward`](crate::direction::Direction::Forward)
/// update.
///
/// # Returns
/// A vector of edges in the format of (from_node, to_node, weight), with
/// every input edge followed by its reverse.
pub fn mirror_edges<N: Clone>(roads: impl IntoIterator<Item = (N, N, f64)>) -> Vec<(N, N, f64)> {
    roads
        .into_iter()
        .flat_map(|(from, to, weight)| [(from.clone(), to.clone(), weight), (to, from, weight)])
        .collect()
}

/// Build edges among located nodes.
///
/// The function will try to connect every node to every other node.
/// However, a constraint prevents nodes that are too far apart from being
/// connected.
///
/// # Arguments
/// * `nodes` - Node identifiers with their locations.
/// * `constraint` - Only nodes whose straight-line distance is within the
///   constraint are connected.
/// * `cost_function` - A function that computes the "weight" between
///   two locations.
///
/// # Returns
/// A vector of edges in the format of (from_node, to_node, weight).
///
/// # Time Complexity
/// *O*(*n^2*).
pub fn build_edges<N: Clone + PartialEq>(
    nodes: &[(N, Location)],
    constraint: f64,
    cost_function: fn(&Location, &Location) -> f64,
) -> Vec<(N, N, OrderedFloat<f64>)> {
    let mut edges = Vec::new();
    for (from, from_location) in nodes {
        for (to, to_location) in nodes {
            if from != to && from_location.distance_to(to_location) <= constraint {
                let cost = cost_function(from_location, to_location);
                edges.push((from.clone(), to.clone(), OrderedFloat(cost)));
            }
        }
    }
    edges
}
