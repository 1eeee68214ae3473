//! # Tractus Core
//!
//! Core types and algorithms for the tractus dual-graph cascade engine.
//!
//! A cascade runs over two weighted undirected graphs sharing a node
//! set: a topology graph carrying connection intensity (e.g. fibre
//! density from tractography) and a distance graph carrying the
//! physical correlate (e.g. tract length). The ratio of the two weights
//! on an edge pair is the relative activation delay ("tau") used to
//! order competing activations.
//!
//! This crate holds the pure pieces:
//!
//! - **Dual-Graph Model** — validated, read-only graph pair with
//!   per-node coefficients ([`model::DualGraphModel`])
//! - **Temporal Order Resolver** — tau computation and candidate
//!   ordering ([`order::candidate_order`])
//! - **Activation Evaluator** — causal eligibility filter plus the
//!   threshold and stochastic decision rules ([`evaluate`])
//!
//! The round loop that drives these lives in `tractus-runtime`, along
//! with the petgraph-backed graph implementation.

pub mod error;
pub mod evaluate;
pub mod graph;
pub mod model;
pub mod order;
pub mod prelude;
pub mod types;

pub use error::{CascadeError, ConfigError, GraphError, Result, TractusError};
pub use graph::WeightedGraph;
pub use model::DualGraphModel;
pub use types::{
    ActivationRecord, Frontier, ModelParams, NodeId, NodeState, RoundSample, RunId,
};

#[cfg(test)]
pub(crate) mod test_support {
    //! A minimal adjacency-list graph for unit tests.

    use crate::graph::WeightedGraph;
    use crate::types::NodeId;
    use std::collections::BTreeSet;

    pub struct MapGraph {
        nodes: BTreeSet<NodeId>,
        edges: Vec<(NodeId, NodeId, f64)>,
        directed: bool,
    }

    impl MapGraph {
        pub fn from_edges(edges: &[(u64, u64, f64)]) -> Self {
            let mut graph = Self {
                nodes: BTreeSet::new(),
                edges: Vec::new(),
                directed: false,
            };
            for &(a, b, w) in edges {
                graph.add_edge(a, b, w);
            }
            graph
        }

        pub fn directed(mut self) -> Self {
            self.directed = true;
            self
        }

        pub fn add_node(&mut self, node: u64) {
            self.nodes.insert(NodeId(node));
        }

        pub fn add_edge(&mut self, a: u64, b: u64, weight: f64) {
            self.nodes.insert(NodeId(a));
            self.nodes.insert(NodeId(b));
            self.edges.push((NodeId(a), NodeId(b), weight));
        }

        fn incident(&self, node: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
            self.edges.iter().filter_map(move |&(a, b, w)| {
                if a == node {
                    Some((b, w))
                } else if b == node {
                    Some((a, w))
                } else {
                    None
                }
            })
        }
    }

    impl WeightedGraph for MapGraph {
        fn contains(&self, node: NodeId) -> bool {
            self.nodes.contains(&node)
        }

        fn node_count(&self) -> usize {
            self.nodes.len()
        }

        fn node_ids(&self) -> Vec<NodeId> {
            self.nodes.iter().copied().collect()
        }

        fn degree(&self, node: NodeId) -> usize {
            self.incident(node).count()
        }

        fn neighbors(&self, node: NodeId) -> Vec<(NodeId, f64)> {
            self.incident(node).collect()
        }

        fn edge_weight(&self, a: NodeId, b: NodeId) -> Option<f64> {
            self.edges
                .iter()
                .find(|&&(x, y, _)| (x == a && y == b) || (x == b && y == a))
                .map(|&(_, _, w)| w)
        }

        fn is_directed(&self) -> bool {
            self.directed
        }

        fn has_multi_edges(&self) -> bool {
            let mut seen = BTreeSet::new();
            for &(a, b, _) in &self.edges {
                let key = if a <= b { (a, b) } else { (b, a) };
                if !seen.insert(key) {
                    return true;
                }
            }
            false
        }
    }
}
