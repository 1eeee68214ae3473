//! The weighted-graph seam between cascade algorithms and graph backends.

use crate::types::NodeId;

/// A weighted graph over `NodeId`s, as seen by the cascade algorithms.
///
/// This is a trait rather than a concrete type so that different
/// backends can supply the topology and distance graphs. Both graphs of
/// a dual-graph model implement it; the model only ever reads.
pub trait WeightedGraph {
    /// Whether the node exists in the graph.
    fn contains(&self, node: NodeId) -> bool;

    /// Number of nodes.
    fn node_count(&self) -> usize;

    /// All node identifiers.
    fn node_ids(&self) -> Vec<NodeId>;

    /// Number of incident edges.
    fn degree(&self, node: NodeId) -> usize;

    /// Neighbours of a node with the incident edge weight.
    fn neighbors(&self, node: NodeId) -> Vec<(NodeId, f64)>;

    /// Weight of the edge between two nodes, if one exists.
    fn edge_weight(&self, a: NodeId, b: NodeId) -> Option<f64>;

    /// Whether the graph is directed.
    fn is_directed(&self) -> bool;

    /// Whether any node pair is connected by more than one edge.
    fn has_multi_edges(&self) -> bool;
}
