//! The query entry point of the router library.
//!
//! Both path finding algorithms share one signature, so callers pick one
//! with [`engine::Algorithm`] and run it through
//! [`engine::find_shortest_path`].

/// The router engine module.
pub mod engine {
    use std::fmt::Debug;
    use std::hash::Hash;

    use serde::{Deserialize, Serialize};

    use crate::{a_star::a_star, dijkstra::dijkstra, error::Result, graph::Graph, route::Route};

    /// Path finding algorithms.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub enum Algorithm {
        /// The Dikstra algorithm.
        #[default]
        Dijkstra,
        /// The A Star algorithm, guided by node locations.
        AStar,
    }

    /// Find the shortest path between two nodes.
    ///
    /// The graph is only read. Weight updates made afterwards are not
    /// reflected in the returned route; query again to pick them up.
    ///
    /// # Arguments
    /// * `graph` - The road network.
    /// * `from` - The node to start from.
    /// * `to` - The node to end at.
    /// * `algorithm` - The algorithm to use.
    ///
    /// # Returns
    /// The route with its total cost. An unreachable `to` yields an empty
    /// path with an infinite cost.
    ///
    /// # Errors
    /// [`Error::UnknownNode`](crate::Error::UnknownNode) if either node is
    /// not in the graph.
    pub fn find_shortest_path<N>(
        graph: &Graph<N>,
        from: &N,
        to: &N,
        algorithm: Algorithm,
    ) -> Result<Route<N>>
    where
        N: Clone + Eq + Hash + Debug,
    {
        match algorithm {
            Algorithm::Dijkstra => dijkstra(graph, from, to),
            Algorithm::AStar => a_star(graph, from, to),
        }
    }
}
