//! # Tractus
//!
//! Time-ordered dual-graph cascade engine for connectome diffusion
//! models.
//!
//! A cascade spreads a state (activation, information, infection) over
//! two weighted undirected graphs that share a node set: a topology
//! graph carrying connection intensity (e.g. fibre density from
//! white-matter tractography) and a distance graph carrying the
//! physical correlate (e.g. tract length). The weight ratio of an edge
//! pair is its relative activation delay ("tau"); each round expands
//! outward from the most recently activated node, accepting the
//! earliest candidate that activates.
//!
//! Two modes are supported:
//!
//! - **Linear threshold** — deterministic: a node activates when the
//!   summed influence of its time-eligible active neighbours reaches
//!   its threshold.
//! - **Stochastic SIR** — probabilistic activation plus permanent
//!   removal, driven by one seedable uniform draw per round.
//!
//! ## Quick Start
//!
//! ```rust
//! use tractus::prelude::*;
//!
//! // Fibre-density and tract-length graphs over the same nodes.
//! let topology = FibreGraph::from_edges([(1, 2, 2.0), (1, 3, 1.0)]);
//! let distance = FibreGraph::from_edges([(1, 2, 4.0), (1, 3, 2.0)]);
//!
//! let config = CascadeConfig::new(ModelParams::LinearThreshold { threshold: 0.05 });
//! let result = run_cascade(&topology, &distance, &[NodeId(1)], config).unwrap();
//!
//! for record in &result.records {
//!     println!("{} -> {} at t={}", record.source, record.target, record.time);
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`tractus_core`] — shared types, the dual-graph model, the
//!   temporal order resolver, the activation evaluator
//! - [`tractus_runtime`] — petgraph-backed graphs, the cascade driver,
//!   run metrics, the adaptive-engine event contract

pub use tractus_core as core;
pub use tractus_runtime as runtime;

pub mod prelude;

use tractus_core::error::Result;
use tractus_core::graph::WeightedGraph;
use tractus_core::types::NodeId;
use tractus_runtime::driver::{CascadeConfig, CascadeDriver, CascadeResult};

/// Run a cascade to termination over a topology/distance graph pair.
///
/// Validates the graphs, seeds and parameters, then drives rounds
/// until the cascade stalls (or the configured round budget trips).
pub fn run_cascade<G: WeightedGraph>(
    topology: &G,
    distance: &G,
    seeds: &[NodeId],
    config: CascadeConfig,
) -> Result<CascadeResult> {
    CascadeDriver::new(topology, distance, seeds, config)?.run()
}
