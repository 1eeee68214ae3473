//! Error types for tractus operations.
//!
//! Structural and parameter violations are fatal and surface here at
//! construction time. Numeric degeneracies during round evaluation
//! (missing edge weights, zero denominators) are deliberately *not*
//! errors: they skip the affected candidate and are counted in the run
//! metrics instead.

use crate::types::NodeId;
use std::error::Error;
use std::fmt;

/// Result type for tractus operations.
pub type Result<T> = std::result::Result<T, TractusError>;

/// Errors that can occur while building or running a cascade.
#[derive(Debug, Clone, PartialEq)]
pub enum TractusError {
    /// Graph structure errors.
    Graph(GraphError),
    /// Configuration and parameter errors.
    Config(ConfigError),
    /// Errors raised while driving a cascade.
    Cascade(CascadeError),
}

impl fmt::Display for TractusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TractusError::Graph(e) => write!(f, "Graph error: {}", e),
            TractusError::Config(e) => write!(f, "Config error: {}", e),
            TractusError::Cascade(e) => write!(f, "Cascade error: {}", e),
        }
    }
}

impl Error for TractusError {}

/// Graph structure errors raised during model construction.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// Multigraph or directed graph supplied where a simple undirected
    /// graph is required.
    InvalidGraphType(String),
    /// Topology and distance graphs cover different node sets.
    DimensionMismatch { topology: usize, distance: usize },
    /// A seed identifier is absent from the topology graph.
    SeedNotFound(NodeId),
    /// The seed list is empty.
    EmptySeeds,
    /// A referenced node is absent from the graph.
    NodeNotFound(NodeId),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::InvalidGraphType(reason) => {
                write!(f, "Invalid graph type: {}", reason)
            }
            GraphError::DimensionMismatch { topology, distance } => {
                write!(
                    f,
                    "Graphs must have the same dimensions: topology has {} nodes, distance has {}",
                    topology, distance
                )
            }
            GraphError::SeedNotFound(id) => write!(f, "Seed {} is not in the graph", id),
            GraphError::EmptySeeds => write!(f, "Seed set is empty"),
            GraphError::NodeNotFound(id) => write!(f, "Node not found: {}", id),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A parameter or derived value falls outside its valid range.
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },
    /// A required field was left unset.
    MissingField(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::OutOfRange {
                field,
                min,
                max,
                value,
            } => {
                write!(
                    f,
                    "{} out of range: {} (must be {}-{})",
                    field, value, min, max
                )
            }
            ConfigError::MissingField(field) => write!(f, "Missing required field: {}", field),
        }
    }
}

/// Errors raised while driving a cascade.
#[derive(Debug, Clone, PartialEq)]
pub enum CascadeError {
    /// The opt-in round budget was exhausted before the cascade stalled.
    BudgetExceeded { rounds: usize },
}

impl fmt::Display for CascadeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CascadeError::BudgetExceeded { rounds } => {
                write!(f, "Round budget exceeded after {} rounds", rounds)
            }
        }
    }
}

// Convenience constructors
impl TractusError {
    pub fn invalid_graph_type(reason: impl Into<String>) -> Self {
        TractusError::Graph(GraphError::InvalidGraphType(reason.into()))
    }

    pub fn seed_not_found(id: NodeId) -> Self {
        TractusError::Graph(GraphError::SeedNotFound(id))
    }

    pub fn out_of_range(field: &'static str, min: f64, max: f64, value: f64) -> Self {
        TractusError::Config(ConfigError::OutOfRange {
            field,
            min,
            max,
            value,
        })
    }

    pub fn missing_field(field: &'static str) -> Self {
        TractusError::Config(ConfigError::MissingField(field))
    }
}
