//! Error type shared by the graph store and the solvers.
//!
//! Node identifiers are generic, so errors carry their `Debug` rendering
//! instead of the identifier itself. That keeps [`Error`] free of type
//! parameters and lets callers bubble it up with `?` regardless of the node
//! type they route over.

use thiserror::Error;

/// Convenient result alias for the router library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An operation referenced a node that is not part of the graph.
    #[error("unknown node: {node}")]
    UnknownNode { node: String },

    /// A weight update or removal targeted a directed edge that does not
    /// exist. Updates never create edges.
    #[error("no edge from {from} to {to}")]
    EdgeNotFound { from: String, to: String },

    /// Raised when a negative weight is supplied and the graph is not
    /// configured to accept them.
    #[error("negative weight {weight} for edge {from} -> {to}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: f64,
    },

    /// Raised for weights that cannot be ordered (NaN).
    #[error("invalid weight {weight} for edge {from} -> {to}")]
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },

    /// Raised for a node location with a NaN or infinite coordinate.
    #[error("invalid location ({x}, {y}) for node {node}")]
    InvalidLocation { node: String, x: f64, y: f64 },

    /// A search with negative weights enabled found a cycle of negative
    /// total weight, so no cheapest route exists.
    #[error("negative cycle through {node}")]
    NegativeCycle { node: String },

    /// Raised when a direction string is neither `forward` nor `both`.
    #[error("unknown direction '{value}', expected 'forward' or 'both'")]
    InvalidDirection { value: String },
}

impl Error {
    pub(crate) fn unknown_node(node: &impl std::fmt::Debug) -> Self {
        Error::UnknownNode {
            node: format!("{:?}", node),
        }
    }

    pub(crate) fn edge_not_found(from: &impl std::fmt::Debug, to: &impl std::fmt::Debug) -> Self {
        Error::EdgeNotFound {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }

    pub(crate) fn negative_cycle(node: &impl std::fmt::Debug) -> Self {
        Error::NegativeCycle {
            node: format!("{:?}", node),
        }
    }
}
