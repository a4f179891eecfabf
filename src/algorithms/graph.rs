//! Defines the road-network graph and its mutation functions.
//!
//! Connectivity lives in a [`StableDiGraph`] whose edge weights are the
//! current travel costs. A [`HashMap`] maps every node identifier to its
//! [`NodeIndex`] for fast lookup, and a second map holds the optional
//! [`Location`] of each node for the A* heuristic.
//!
//! Weights are the only thing that changes after construction. Queries read
//! the graph through a shared reference, so a caller that needs concurrent
//! access has to put the whole graph behind a lock.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use ordered_float::OrderedFloat;
use petgraph::{graph::NodeIndex, stable_graph::StableDiGraph, visit::EdgeRef};

use crate::{
    config::RouterConfig,
    direction::Direction,
    edge::Edge,
    error::{Error, Result},
    location::Location,
};

/// Represents a directed, weighted road network.
#[derive(Debug, Clone)]
pub struct Graph<N> {
    graph: StableDiGraph<N, OrderedFloat<f64>>,
    node_indices: HashMap<N, NodeIndex>,
    locations: HashMap<N, Location>,
    config: RouterConfig,
}

impl<N> Graph<N>
where
    N: Clone + Eq + Hash + Debug,
{
    /// Creates a new graph with the default [`RouterConfig`].
    ///
    /// Edges are inserted exactly as given, one direction each. Use
    /// [`mirror_edges`](crate::utils::graph::mirror_edges) to turn a list of
    /// roads into both directions first.
    ///
    /// # Arguments
    /// * `nodes` - The intersections. Duplicates are collapsed.
    /// * `edges` - Directed `(from, to, weight)` triples.
    /// * `locations` - Coordinates used by the A* heuristic. Nodes without
    ///   one are allowed.
    ///
    /// # Errors
    /// [`Error::UnknownNode`] if an edge or location names a node missing
    /// from `nodes`, [`Error::InvalidLocation`] for a NaN or infinite
    /// coordinate, or any weight error from [`Graph::add_edge`]. No graph
    /// is returned in that case.
    pub fn new(
        nodes: impl IntoIterator<Item = N>,
        edges: impl IntoIterator<Item = (N, N, f64)>,
        locations: impl IntoIterator<Item = (N, Location)>,
    ) -> Result<Self> {
        Self::with_config(nodes, edges, locations, RouterConfig::default())
    }

    /// Same as [`Graph::new`] with an explicit config.
    pub fn with_config(
        nodes: impl IntoIterator<Item = N>,
        edges: impl IntoIterator<Item = (N, N, f64)>,
        locations: impl IntoIterator<Item = (N, Location)>,
        config: RouterConfig,
    ) -> Result<Self> {
        let mut graph = Graph {
            graph: StableDiGraph::new(),
            node_indices: HashMap::new(),
            locations: HashMap::new(),
            config,
        };

        for node in nodes {
            if !graph.node_indices.contains_key(&node) {
                let index = graph.graph.add_node(node.clone());
                graph.node_indices.insert(node, index);
            }
        }

        for (node, location) in locations {
            if !graph.contains_node(&node) {
                warn!("Location given for unknown node {:?}", node);
                return Err(Error::unknown_node(&node));
            }
            if !location.is_finite() {
                warn!("Rejecting location {:?} for node {:?}", location, node);
                return Err(Error::InvalidLocation {
                    node: format!("{:?}", node),
                    x: location.x,
                    y: location.y,
                });
            }
            graph.locations.insert(node, location);
        }

        for (from, to, weight) in edges {
            graph.add_edge(&from, &to, weight)?;
        }

        info!(
            "Road network ready: {} nodes, {} edges, {} located",
            graph.node_count(),
            graph.edge_count(),
            graph.locations.len()
        );
        Ok(graph)
    }

    /// Inserts the directed edge `from -> to`, or overwrites its weight if
    /// it already exists.
    ///
    /// # Errors
    /// [`Error::UnknownNode`] if either endpoint is not in the graph, or a
    /// weight error (see [`RouterConfig::allow_negative_weights`]). The graph
    /// is unchanged on error.
    pub fn add_edge(&mut self, from: &N, to: &N, weight: f64) -> Result<()> {
        let (from_index, to_index) = self.endpoints(from, to)?;
        self.check_weight(from, to, weight)?;

        self.graph.update_edge(from_index, to_index, OrderedFloat(weight));
        Ok(())
    }

    /// Sets the weight of an existing road, e.g. to reflect congestion.
    ///
    /// With [`Direction::Both`] the reverse edge `to -> from` receives the
    /// same weight if it exists. A missing reverse edge is not an error and
    /// is not created. The value is taken as-is, no bound applies to how
    /// often or how far a weight changes.
    ///
    /// Previously returned routes are not recomputed: query again to see
    /// the new weight.
    ///
    /// # Errors
    /// [`Error::UnknownNode`] for an endpoint outside the graph,
    /// [`Error::EdgeNotFound`] if `from -> to` does not exist, or a weight
    /// error. Nothing is updated on error, including the reverse edge.
    pub fn update_weight(
        &mut self,
        from: &N,
        to: &N,
        weight: f64,
        direction: Direction,
    ) -> Result<()> {
        let (from_index, to_index) = self.endpoints(from, to)?;
        self.check_weight(from, to, weight)?;

        let forward = self.graph.find_edge(from_index, to_index).ok_or_else(|| {
            warn!("Cannot update missing edge {:?} -> {:?}", from, to);
            Error::edge_not_found(from, to)
        })?;
        let reverse = match direction {
            Direction::Forward => None,
            Direction::Both => self.graph.find_edge(to_index, from_index),
        };

        let previous = std::mem::replace(&mut self.graph[forward], OrderedFloat(weight));
        info!(
            "Road {:?} -> {:?} weight changed from {} to {}",
            from, to, previous, weight
        );

        if let Some(reverse) = reverse {
            let previous = std::mem::replace(&mut self.graph[reverse], OrderedFloat(weight));
            info!(
                "Road {:?} -> {:?} weight changed from {} to {}",
                to, from, previous, weight
            );
        } else if direction == Direction::Both {
            debug!("No reverse edge {:?} -> {:?} to update", to, from);
        }
        Ok(())
    }

    /// Deletes the directed edge `from -> to`, e.g. for a closed road.
    ///
    /// # Returns
    /// The weight the edge had.
    pub fn remove_edge(&mut self, from: &N, to: &N) -> Result<f64> {
        let (from_index, to_index) = self.endpoints(from, to)?;
        let edge = self
            .graph
            .find_edge(from_index, to_index)
            .ok_or_else(|| Error::edge_not_found(from, to))?;

        let weight = self
            .graph
            .remove_edge(edge)
            .ok_or_else(|| Error::edge_not_found(from, to))?;
        info!("Road {:?} -> {:?} removed", from, to);
        Ok(weight.into_inner())
    }

    /// Returns the `(neighbor, weight)` pairs directly reachable from
    /// `node`. Empty for a node without outgoing edges or outside the graph.
    pub fn neighbors<'a>(&'a self, node: &N) -> impl Iterator<Item = (&'a N, f64)> + 'a {
        self.node_indices
            .get(node)
            .copied()
            .into_iter()
            .flat_map(move |index| {
                self.graph
                    .edges(index)
                    .map(move |edge| (&self.graph[edge.target()], edge.weight().into_inner()))
            })
    }

    /// Straight-line distance between `node` and `goal`.
    ///
    /// Falls back to `0.0` when either node has no location, or when the
    /// coordinates are so far apart that the distance overflows. Zero never
    /// overestimates, so A* stays correct and simply searches like Dijkstra
    /// around those nodes.
    pub fn heuristic(&self, node: &N, goal: &N) -> f64 {
        match (self.locations.get(node), self.locations.get(goal)) {
            (Some(from), Some(to)) => {
                let distance = from.distance_to(to);
                if distance.is_finite() {
                    distance
                } else {
                    0.0
                }
            }
            _ => 0.0,
        }
    }

    /// Current weight of `from -> to`, if that edge exists.
    pub fn edge_weight(&self, from: &N, to: &N) -> Option<f64> {
        let from_index = *self.node_indices.get(from)?;
        let to_index = *self.node_indices.get(to)?;
        let edge = self.graph.find_edge(from_index, to_index)?;
        Some(self.graph[edge].into_inner())
    }

    /// `true` if `node` is part of the graph.
    pub fn contains_node(&self, node: &N) -> bool {
        self.node_indices.contains_key(node)
    }

    /// Location of `node`, if one was supplied.
    pub fn location(&self, node: &N) -> Option<&Location> {
        self.locations.get(node)
    }

    /// Get the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Return the number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Iterates over every node in the graph.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.node_indices.keys()
    }

    /// Get a snapshot of all the edges in the graph.
    pub fn edges(&self) -> Vec<Edge<N>> {
        self.graph
            .edge_indices()
            .filter_map(|edge| {
                let (from, to) = self.graph.edge_endpoints(edge)?;
                Some(Edge {
                    from: self.graph[from].clone(),
                    to: self.graph[to].clone(),
                    cost: self.graph[edge],
                })
            })
            .collect()
    }

    /// Config this graph was built with.
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    fn endpoints(&self, from: &N, to: &N) -> Result<(NodeIndex, NodeIndex)> {
        let lookup = |node: &N| {
            self.node_indices.get(node).copied().ok_or_else(|| {
                warn!("Node {:?} not found", node);
                Error::unknown_node(node)
            })
        };
        Ok((lookup(from)?, lookup(to)?))
    }

    fn check_weight(&self, from: &N, to: &N, weight: f64) -> Result<()> {
        if weight.is_nan() {
            warn!("Rejected NaN weight for {:?} -> {:?}", from, to);
            return Err(Error::InvalidWeight {
                from: format!("{:?}", from),
                to: format!("{:?}", to),
                weight,
            });
        }
        if weight < 0.0 && !self.config.allow_negative_weights {
            warn!("Rejected negative weight {} for {:?} -> {:?}", weight, from, to);
            return Err(Error::NegativeWeight {
                from: format!("{:?}", from),
                to: format!("{:?}", to),
                weight,
            });
        }
        Ok(())
    }
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------
