//! Traffic Routing Library.
//! Keeps a road network whose travel costs change over time and finds
//! shortest routes through it.
//!
//! A [`Graph`] is built once from intersections, directed roads and
//! optional intersection locations. Road weights can then be changed with
//! [`Graph::update_weight`] to model congestion, and routes are found with
//! [`dijkstra`] or [`a_star`] (or [`find_shortest_path`] to pick one at
//! runtime). Nothing is recomputed automatically after an update: callers
//! query again.
//!
//! Searches are synchronous and hold no state past a single call. The
//! graph has no internal locking, so mutation and queries must be
//! serialized by the caller.

#[macro_use]
extern crate log;

pub mod config;
pub mod error;

pub mod types {
    pub mod direction;
    pub mod edge;
    pub mod location;
    pub mod route;
    pub mod router;
}

pub mod algorithms {
    pub mod a_star;
    pub mod dijkstra;
    pub(crate) mod frontier;
    pub mod graph;
    pub mod path;
}

pub mod utils {
    pub mod euclidean;
    #[cfg(test)]
    pub mod generator;
    pub mod graph;
}

pub use algorithms::{a_star, dijkstra, graph, path};
pub use types::{direction, edge, location, route, router};

pub use algorithms::a_star::{a_star, a_star_with};
pub use algorithms::dijkstra::dijkstra;
pub use algorithms::graph::Graph;
pub use algorithms::path::reconstruct_path;
pub use config::RouterConfig;
pub use error::{Error, Result};
pub use types::direction::Direction;
pub use types::edge::Edge;
pub use types::location::Location;
pub use types::route::Route;
pub use types::router::engine::{find_shortest_path, Algorithm};
