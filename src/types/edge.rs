//! Definition of the `Edge` type.
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// An edge is a directed connection between two nodes.
/// The cost represents the "weight" of the edge, e.g. the current travel
/// time on a road.
#[derive(Debug, Clone, PartialEq, Hash, Eq, Serialize, Deserialize)]
pub struct Edge<N> {
    /// Where the edge starts.
    pub from: N,

    /// Where the edge leads.
    pub to: N,

    /// The weight of the edge.
    pub cost: OrderedFloat<f64>,
}

impl<N> Edge<N> {
    /// Creates an edge `from -> to` with the given weight.
    pub fn new(from: N, to: N, cost: f64) -> Self {
        Edge {
            from,
            to,
            cost: OrderedFloat(cost),
        }
    }
}
