//! Concrete implementation of the WeightedGraph trait using petgraph.
//!
//! Backed by petgraph's `Graph` with a HashMap side index for O(1)
//! lookup by `NodeId`. `add_edge` inserts missing endpoints and permits
//! parallel edges; multigraphs are caught later by model validation,
//! not silently collapsed here.

use petgraph::graph::{Graph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::{Directed, EdgeType, Undirected};
use std::collections::{HashMap, HashSet};
use tractus_core::graph::WeightedGraph;
use tractus_core::types::NodeId;

/// A weighted graph over `NodeId`s: fibre density for the topology
/// graph, tract length for the distance graph.
pub struct FibreGraph<Ty: EdgeType = Undirected> {
    graph: Graph<NodeId, f64, Ty>,
    /// Map from NodeId to petgraph's internal index.
    index: HashMap<NodeId, NodeIndex>,
}

/// Directed variant, accepted by the builder but rejected by model
/// validation. Build one with `DirectedFibreGraph::default()`.
pub type DirectedFibreGraph = FibreGraph<Directed>;

impl FibreGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an undirected graph from `(a, b, weight)` triples.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (u64, u64, f64)>,
    {
        let mut graph = Self::new();
        for (a, b, weight) in edges {
            graph.add_edge(NodeId(a), NodeId(b), weight);
        }
        graph
    }
}

impl<Ty: EdgeType> FibreGraph<Ty> {
    /// Insert a node if absent. Idempotent.
    pub fn add_node(&mut self, node: NodeId) -> NodeIndex {
        match self.index.get(&node) {
            Some(&idx) => idx,
            None => {
                let idx = self.graph.add_node(node);
                self.index.insert(node, idx);
                idx
            }
        }
    }

    /// Add an edge, inserting missing endpoints. Parallel edges are
    /// kept as-is.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: f64) {
        let a_idx = self.add_node(a);
        let b_idx = self.add_node(b);
        self.graph.add_edge(a_idx, b_idx, weight);
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl<Ty: EdgeType> Default for FibreGraph<Ty> {
    fn default() -> Self {
        Self {
            graph: Graph::with_capacity(0, 0),
            index: HashMap::new(),
        }
    }
}

impl<Ty: EdgeType> WeightedGraph for FibreGraph<Ty> {
    fn contains(&self, node: NodeId) -> bool {
        self.index.contains_key(&node)
    }

    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn node_ids(&self) -> Vec<NodeId> {
        self.graph
            .node_indices()
            .map(|idx| self.graph[idx])
            .collect()
    }

    fn degree(&self, node: NodeId) -> usize {
        match self.index.get(&node) {
            Some(&idx) => self.graph.edges(idx).count(),
            None => 0,
        }
    }

    fn neighbors(&self, node: NodeId) -> Vec<(NodeId, f64)> {
        let Some(&node_idx) = self.index.get(&node) else {
            return Vec::new();
        };

        self.graph
            .edges(node_idx)
            .map(|edge| {
                let other_idx = if edge.source() == node_idx {
                    edge.target()
                } else {
                    edge.source()
                };
                (self.graph[other_idx], *edge.weight())
            })
            .collect()
    }

    fn edge_weight(&self, a: NodeId, b: NodeId) -> Option<f64> {
        let a_idx = self.index.get(&a)?;
        let b_idx = self.index.get(&b)?;
        let edge_idx = self.graph.find_edge(*a_idx, *b_idx)?;
        Some(self.graph[edge_idx])
    }

    fn is_directed(&self) -> bool {
        self.graph.is_directed()
    }

    fn has_multi_edges(&self) -> bool {
        let mut seen = HashSet::new();
        for edge in self.graph.edge_references() {
            let a = self.graph[edge.source()];
            let b = self.graph[edge.target()];
            let key = if a <= b { (a, b) } else { (b, a) };
            if !seen.insert(key) {
                return true;
            }
        }
        false
    }
}
