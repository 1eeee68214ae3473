//! Tractus Core Prelude — convenient imports for common usage.
//!
//! ```rust
//! use tractus_core::prelude::*;
//! ```

// Re-export commonly used types
pub use crate::types::{
    ActivationRecord, Frontier, ModelParams, NodeId, NodeState, RoundSample, RunId,
};

// Re-export the graph seam and the model
pub use crate::graph::WeightedGraph;
pub use crate::model::DualGraphModel;

// Re-export the resolver and evaluator
pub use crate::evaluate::{eligible_actives, stochastic_hit, threshold_met, Eligibility};
pub use crate::order::{candidate_order, Candidate, CandidateSet};

// Re-export error types
pub use crate::error::{CascadeError, ConfigError, GraphError, Result, TractusError};
