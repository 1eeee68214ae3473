//! Event-handler contract for the adaptive compartmental engine.
//!
//! The continuous-time engine (rate-based event sampling, compartment
//! bookkeeping, edge add/delete services) lives outside this crate.
//! This module is the reactive side of that integration: handlers are
//! invoked with `(time, host, element)` for dispatched events and
//! request compartment transitions and edge mutations from the host.
//! The host stays authoritative; the handlers never manage rates or
//! the compartment registry themselves.
//!
//! A transition request can legitimately find the graph no longer in
//! the expected state. The host reports that through
//! [`TransitionOutcome`], and the handlers discard non-`Applied`
//! outcomes deliberately: counted and logged, never swallowed.

use serde::{Deserialize, Serialize};
use tractus_core::error::{Result, TractusError};
use tractus_core::types::NodeId;

/// Compartments of the adaptive information-diffusion model. Recovery
/// returns a node to `Susceptible`, allowing re-infection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Compartment {
    Susceptible,
    Infected,
}

/// Result of a requested compartment transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The host applied the transition.
    Applied,
    /// The node was already in the requested compartment.
    AlreadyInState,
    /// The node is gone or the transition is not valid from its
    /// current compartment.
    InvalidState,
}

/// The external engine's mutation surface, as seen by the handlers.
pub trait CompartmentHost {
    /// Request a compartment transition for a node.
    fn change_compartment(&mut self, node: NodeId, to: Compartment) -> TransitionOutcome;

    /// Mark the edge that transmitted an infection as occupied.
    fn mark_occupied(&mut self, edge: (NodeId, NodeId));

    /// Request deletion of an edge.
    fn delete_edge(&mut self, a: NodeId, b: NodeId);

    /// Request new edges from a node's infected parents to its
    /// neighbourhood.
    fn add_neighbor_edges(&mut self, node: NodeId);
}

/// Parameters of the adaptive diffusion model.
///
/// `p_add_edge` has no defensible default (the source referenced it
/// without ever defining it), so it must be set explicitly; `validate`
/// fails fast when it is not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdaptiveConfig {
    /// Probability of a node being initially infected.
    pub p_infected: f64,
    /// Probability of infection on contact.
    pub p_infect: f64,
    /// Probability of recovery back to susceptible.
    pub p_recover: f64,
    /// Probability of deleting a link between two susceptible nodes.
    pub p_remove_edge: f64,
    /// Probability of creating a link around an infected node.
    /// Required; no default.
    pub p_add_edge: Option<f64>,
    /// Maximum simulation time override.
    pub max_time: Option<f64>,
}

impl Default for AdaptiveConfig {
    fn default() -> Self {
        Self {
            p_infected: 0.01,
            p_infect: 0.05,
            p_recover: 0.005,
            p_remove_edge: 1.0,
            p_add_edge: None,
            max_time: Some(20_000.0),
        }
    }
}

impl AdaptiveConfig {
    pub fn validate(&self) -> Result<()> {
        let probabilities = [
            ("p_infected", self.p_infected),
            ("p_infect", self.p_infect),
            ("p_recover", self.p_recover),
            ("p_remove_edge", self.p_remove_edge),
        ];
        for (field, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(TractusError::out_of_range(field, 0.0, 1.0, value));
            }
        }
        match self.p_add_edge {
            None => return Err(TractusError::missing_field("p_add_edge")),
            Some(value) if !(0.0..=1.0).contains(&value) => {
                return Err(TractusError::out_of_range("p_add_edge", 0.0, 1.0, value));
            }
            Some(_) => {}
        }
        Ok(())
    }
}

/// The adaptive diffusion handlers plus their discard accounting.
pub struct AdaptiveDiffusion {
    config: AdaptiveConfig,
    ignored_transitions: u64,
}

impl AdaptiveDiffusion {
    pub fn new(config: AdaptiveConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ignored_transitions: 0,
        })
    }

    pub fn config(&self) -> &AdaptiveConfig {
        &self.config
    }

    /// Transition requests the host declined, discarded deliberately.
    pub fn ignored_transitions(&self) -> u64 {
        self.ignored_transitions
    }

    /// Infection event over a susceptible-infected edge: move the
    /// susceptible end to `Infected` and mark the edge occupied.
    pub fn infect(&mut self, _t: f64, host: &mut dyn CompartmentHost, edge: (NodeId, NodeId)) {
        let (susceptible, _infected) = edge;
        match host.change_compartment(susceptible, Compartment::Infected) {
            TransitionOutcome::Applied => host.mark_occupied(edge),
            outcome => self.discard(susceptible, outcome),
        }
    }

    /// Recovery event: return the node to `Susceptible`.
    pub fn recover(&mut self, _t: f64, host: &mut dyn CompartmentHost, node: NodeId) {
        match host.change_compartment(node, Compartment::Susceptible) {
            TransitionOutcome::Applied => {}
            outcome => self.discard(node, outcome),
        }
    }

    /// Delete an edge between two susceptible nodes that carries no
    /// information.
    pub fn delete_unused_edge(
        &mut self,
        _t: f64,
        host: &mut dyn CompartmentHost,
        edge: (NodeId, NodeId),
    ) {
        host.delete_edge(edge.0, edge.1);
    }

    /// Add edges from infected parents around a node.
    pub fn add_neighboring_edges(&mut self, _t: f64, host: &mut dyn CompartmentHost, node: NodeId) {
        host.add_neighbor_edges(node);
    }

    fn discard(&mut self, node: NodeId, outcome: TransitionOutcome) {
        self.ignored_transitions += 1;
        tracing::debug!(node = %node, ?outcome, "compartment transition not applied");
    }
}
