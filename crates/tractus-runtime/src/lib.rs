//! # Tractus Runtime
//!
//! The runtime half of the tractus cascade engine: the petgraph-backed
//! graph implementation, the round-driving state machine, run metrics,
//! and the event-handler contract for the external adaptive
//! compartmental engine.
//!
//! A run is single-threaded and synchronous. The driver owns all
//! mutable state (frontier, removed set, clock); the dual-graph model
//! is shared read-only with the core algorithms.

pub mod adaptive;
pub mod driver;
pub mod graph_impl;
pub mod metrics;
pub mod prelude;
