//! Straight-line distance between two [`Location`]s.
//!
//! This is the metric behind the A* heuristic. It never overestimates the
//! cost of a route as long as every edge weight is at least the distance
//! between its endpoints.

use crate::location::Location;

/// Returns the Euclidean distance between `from` and `to`.
pub fn distance(from: &Location, to: &Location) -> f64 {
    (to.x - from.x).hypot(to.y - from.y)
}
