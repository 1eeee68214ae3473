//! Dual-graph model — the validated, read-only pair of graphs a cascade
//! runs over.
//!
//! The topology graph carries connection intensity (e.g. fibre density),
//! the distance graph carries the physical correlate (e.g. tract length)
//! over the same node set. Validation happens once here; after
//! construction the model never mutates.

use crate::error::{GraphError, Result, TractusError};
use crate::graph::WeightedGraph;
use crate::types::{ModelParams, NodeId};
use std::collections::HashMap;

/// A validated topology/distance graph pair with per-node coefficients.
pub struct DualGraphModel<'g, G: WeightedGraph> {
    topology: &'g G,
    distance: &'g G,
    seeds: Vec<NodeId>,
    params: ModelParams,
    /// Per-node threshold (linear-threshold mode) or beta (stochastic mode).
    coefficients: HashMap<NodeId, f64>,
    /// Per-node derived influence `1/degree`, linear-threshold mode only.
    influence: HashMap<NodeId, f64>,
}

impl<'g, G: WeightedGraph> DualGraphModel<'g, G> {
    /// Build a model with the mode's default coefficient on every node.
    pub fn new(
        topology: &'g G,
        distance: &'g G,
        seeds: &[NodeId],
        params: ModelParams,
    ) -> Result<Self> {
        Self::with_overrides(topology, distance, seeds, params, &[])
    }

    /// Build a model, overriding the coefficient on selected nodes.
    pub fn with_overrides(
        topology: &'g G,
        distance: &'g G,
        seeds: &[NodeId],
        params: ModelParams,
        overrides: &[(NodeId, f64)],
    ) -> Result<Self> {
        if topology.has_multi_edges() || distance.has_multi_edges() {
            return Err(TractusError::invalid_graph_type(
                "cascades are not defined for graphs with multiedges",
            ));
        }
        if topology.node_count() != distance.node_count() {
            return Err(TractusError::Graph(GraphError::DimensionMismatch {
                topology: topology.node_count(),
                distance: distance.node_count(),
            }));
        }
        if topology.is_directed() || distance.is_directed() {
            return Err(TractusError::invalid_graph_type(
                "cascades are only defined for undirected graphs",
            ));
        }
        if seeds.is_empty() {
            return Err(TractusError::Graph(GraphError::EmptySeeds));
        }
        for &seed in seeds {
            if !topology.contains(seed) {
                return Err(TractusError::seed_not_found(seed));
            }
        }

        validate_params(&params)?;

        let default = params.default_coefficient();
        let mut coefficients: HashMap<NodeId, f64> = topology
            .node_ids()
            .into_iter()
            .map(|node| (node, default))
            .collect();
        let coefficient_field = match params {
            ModelParams::LinearThreshold { .. } => "threshold",
            ModelParams::StochasticSir { .. } => "beta",
        };
        for &(node, value) in overrides {
            if !topology.contains(node) {
                return Err(TractusError::Graph(GraphError::NodeNotFound(node)));
            }
            if !(0.0..=1.0).contains(&value) {
                return Err(TractusError::out_of_range(coefficient_field, 0.0, 1.0, value));
            }
            coefficients.insert(node, value);
        }

        let mut influence = HashMap::new();
        if let ModelParams::LinearThreshold { .. } = params {
            for node in topology.node_ids() {
                let degree = topology.degree(node);
                if degree == 0 {
                    continue;
                }
                let value = 1.0 / degree as f64;
                if value > 1.0 {
                    return Err(TractusError::out_of_range("influence", 0.0, 1.0, value));
                }
                influence.insert(node, value);
            }
        }

        Ok(Self {
            topology,
            distance,
            seeds: seeds.to_vec(),
            params,
            coefficients,
            influence,
        })
    }

    pub fn topology(&self) -> &G {
        self.topology
    }

    pub fn distance(&self) -> &G {
        self.distance
    }

    pub fn seeds(&self) -> &[NodeId] {
        &self.seeds
    }

    pub fn params(&self) -> ModelParams {
        self.params
    }

    /// The node's threshold or beta.
    pub fn coefficient(&self, node: NodeId) -> f64 {
        self.coefficients
            .get(&node)
            .copied()
            .unwrap_or_else(|| self.params.default_coefficient())
    }

    /// The node's derived influence as an activation target. Zero for
    /// isolated nodes and in the stochastic mode.
    pub fn influence_of(&self, node: NodeId) -> f64 {
        self.influence.get(&node).copied().unwrap_or(0.0)
    }

    /// The relative activation delay over the edge pair `(a, b)`:
    /// distance weight divided by topology weight.
    ///
    /// `None` when either edge is missing or either weight is
    /// non-finite or non-positive. Callers skip such pairs; a missing
    /// physical correlate is legitimate, never an error.
    pub fn tau(&self, a: NodeId, b: NodeId) -> Option<f64> {
        let length = self.distance.edge_weight(a, b)?;
        let intensity = self.topology.edge_weight(a, b)?;
        if !length.is_finite() || !intensity.is_finite() || length <= 0.0 || intensity <= 0.0 {
            return None;
        }
        Some(length / intensity)
    }
}

fn validate_params(params: &ModelParams) -> Result<()> {
    match *params {
        ModelParams::LinearThreshold { threshold } => {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(TractusError::out_of_range("threshold", 0.0, 1.0, threshold));
            }
        }
        ModelParams::StochasticSir { beta, gamma } => {
            if !(0.0..=1.0).contains(&beta) {
                return Err(TractusError::out_of_range("beta", 0.0, 1.0, beta));
            }
            if !(0.0..=1.0).contains(&gamma) {
                return Err(TractusError::out_of_range("gamma", 0.0, 1.0, gamma));
            }
        }
    }
    Ok(())
}
