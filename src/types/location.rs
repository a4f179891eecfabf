//! Struct definitions and implementations for [`Location`].

use serde::{Deserialize, Serialize};

use crate::utils::euclidean;

/// A [`Location`] is the planar position of an intersection. Typically,
/// this type is attached to a node of a [`Graph`](crate::graph::Graph) and
/// only consulted by the A* heuristic.
///
/// Units are arbitrary but must be commensurate with edge weights for the
/// straight-line distance to stay an underestimate of travel cost.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    pub x: f64,
    pub y: f64,
}

impl Location {
    /// Creates a location from its two coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Location { x, y }
    }

    /// Whether both coordinates are neither NaN nor infinite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Straight-line distance to `other`.
    pub fn distance_to(&self, other: &Location) -> f64 {
        euclidean::distance(self, other)
    }
}

impl From<(f64, f64)> for Location {
    fn from((x, y): (f64, f64)) -> Self {
        Location { x, y }
    }
}
