//! Tractus Runtime Prelude — convenient imports for common usage.
//!
//! ```rust
//! use tractus_runtime::prelude::*;
//! ```

// Re-export the driver
pub use crate::driver::{
    CascadeConfig, CascadeDriver, CascadeResult, DriverState, Termination,
};

// Re-export the graph backend
pub use crate::graph_impl::{DirectedFibreGraph, FibreGraph};

// Re-export metrics
pub use crate::metrics::CascadeMetrics;

// Re-export the adaptive-engine contract
pub use crate::adaptive::{
    AdaptiveConfig, AdaptiveDiffusion, Compartment, CompartmentHost, TransitionOutcome,
};

// Re-export from core
pub use tractus_core::prelude::*;
