//! The result of a shortest path query.

use std::fmt;

/// A route found by one of the solvers.
///
/// Stores the sequence of nodes in `path` and the total cost of traversing
/// them in `cost`. An unreachable goal is not an error: it is represented by
/// an empty `path` and a `cost` of [`f64::INFINITY`].
#[derive(Debug, Clone, PartialEq)]
pub struct Route<N> {
    /// Nodes from the start to the goal, both included.
    pub path: Vec<N>,
    /// Sum of the edge weights along `path`.
    pub cost: f64,
    /// Number of nodes the solver expanded before it stopped.
    pub expanded: usize,
}

impl<N> Route<N> {
    /// Creates a route with the given sequence of nodes and total cost.
    pub fn new(path: Vec<N>, cost: f64, expanded: usize) -> Route<N> {
        Route {
            path,
            cost,
            expanded,
        }
    }

    /// The result of a search whose frontier ran dry before the goal.
    pub fn unreachable(expanded: usize) -> Route<N> {
        Route::new(Vec::new(), f64::INFINITY, expanded)
    }

    /// `true` if the goal was reached.
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges travelled.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

impl<N: fmt::Display> fmt::Display for Route<N> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Route[cost = {}]: ", self.cost)?;
        match self.path.split_first() {
            None => write!(fmt, "<unreachable>"),
            Some((first, rest)) => {
                write!(fmt, "{}", first)?;
                for node in rest {
                    write!(fmt, " -> {}", node)?;
                }
                Ok(())
            }
        }
    }
}
