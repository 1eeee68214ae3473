//! Cascade driver — the round state machine.
//!
//! The driver owns every piece of mutable run state: the frontier, the
//! removed set, the clock, the record log and the random generator.
//! Each round expands outward from the pivot (the most recently
//! activated node), accepts the first candidate in tau order that
//! activates, and stalls once a round grows the frontier by nothing.
//!
//! Each round:
//! 1. Pivot = last frontier element; an empty frontier stalls.
//! 2. Candidates are resolved in ascending tau order.
//! 3. The first candidate whose evaluation passes activates; the rest
//!    of the round's candidates are never evaluated.
//! 4. Stochastic mode only: one shared draw decides activation and the
//!    recovery sweep.
//! 5. No activation and an unchanged frontier means termination.

use crate::metrics::CascadeMetrics;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tractus_core::error::{CascadeError, Result, TractusError};
use tractus_core::evaluate::{eligible_actives, stochastic_hit, threshold_met};
use tractus_core::graph::WeightedGraph;
use tractus_core::model::DualGraphModel;
use tractus_core::order::candidate_order;
use tractus_core::types::{
    ActivationRecord, Frontier, ModelParams, NodeId, NodeState, RoundSample, RunId,
};

/// Why a cascade terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Termination {
    /// A round produced no frontier growth.
    Stall,
}

/// State of the driver's round machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DriverState {
    Running,
    Terminated(Termination),
}

/// Configuration for one cascade run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CascadeConfig {
    pub params: ModelParams,
    /// Opt-in round budget. `None` reproduces the unbounded
    /// run-to-fixed-point behaviour.
    pub max_rounds: Option<usize>,
    /// Seed for the stochastic mode's generator. `None` seeds from
    /// entropy.
    pub rng_seed: Option<u64>,
    /// Per-node threshold/beta overrides applied at model construction.
    pub coefficient_overrides: Vec<(NodeId, f64)>,
}

impl CascadeConfig {
    pub fn new(params: ModelParams) -> Self {
        Self {
            params,
            max_rounds: None,
            rng_seed: None,
            coefficient_overrides: Vec::new(),
        }
    }

    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = Some(max_rounds);
        self
    }

    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_coefficient(mut self, node: NodeId, value: f64) -> Self {
        self.coefficient_overrides.push((node, value));
        self
    }
}

/// The outcome of a completed cascade run.
#[derive(Debug, Clone, Serialize)]
pub struct CascadeResult {
    pub run: RunId,
    /// Activation records in round order.
    pub records: Vec<ActivationRecord>,
    /// Nodes removed during the run; empty in linear-threshold mode.
    pub removed: BTreeSet<NodeId>,
    pub metrics: CascadeMetrics,
}

/// The cascade state machine over a validated dual-graph model.
pub struct CascadeDriver<'g, G: WeightedGraph> {
    run: RunId,
    model: DualGraphModel<'g, G>,
    frontier: Frontier,
    removed: BTreeSet<NodeId>,
    clock: f64,
    records: Vec<ActivationRecord>,
    rng: StdRng,
    state: DriverState,
    metrics: CascadeMetrics,
    max_rounds: Option<usize>,
}

impl<'g, G: WeightedGraph> CascadeDriver<'g, G> {
    /// Validate the inputs and set up a run in the `Running` state with
    /// the seed set as the initial frontier.
    pub fn new(
        topology: &'g G,
        distance: &'g G,
        seeds: &[NodeId],
        config: CascadeConfig,
    ) -> Result<Self> {
        let model = DualGraphModel::with_overrides(
            topology,
            distance,
            seeds,
            config.params,
            &config.coefficient_overrides,
        )?;
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            run: RunId::new(),
            frontier: Frontier::from_seeds(model.seeds()),
            model,
            removed: BTreeSet::new(),
            clock: 0.0,
            records: Vec::new(),
            rng,
            state: DriverState::Running,
            metrics: CascadeMetrics::default(),
            max_rounds: config.max_rounds,
        })
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn records(&self) -> &[ActivationRecord] {
        &self.records
    }

    pub fn removed(&self) -> &BTreeSet<NodeId> {
        &self.removed
    }

    pub fn metrics(&self) -> &CascadeMetrics {
        &self.metrics
    }

    /// Current compartment of a node. Removal wins over frontier
    /// membership; nodes the model never saw report `Inactive`.
    pub fn state_of(&self, node: NodeId) -> NodeState {
        if self.removed.contains(&node) {
            NodeState::Removed
        } else if self.frontier.contains(node) {
            NodeState::Active
        } else {
            NodeState::Inactive
        }
    }

    /// Execute one round. A no-op once the driver has terminated.
    pub fn step(&mut self) -> DriverState {
        if let DriverState::Terminated(_) = self.state {
            return self.state;
        }

        let len_at_round_start = self.frontier.len();
        let Some(pivot) = self.frontier.last() else {
            // Nothing left to expand from (a full-frontier sweep can
            // empty it).
            return self.terminate();
        };
        self.metrics.rounds += 1;

        let params = self.model.params();
        let sample = if params.is_stochastic() {
            Some(RoundSample(self.rng.gen()))
        } else {
            None
        };

        let candidates = candidate_order(&self.model, pivot, &self.frontier, &self.removed);
        if candidates.skipped > 0 {
            self.metrics.skipped_candidates += candidates.skipped;
            tracing::debug!(
                run = ?self.run.0,
                pivot = %pivot,
                skipped = candidates.skipped,
                "candidates dropped for missing or degenerate weights"
            );
        }

        let mut activated = false;
        for candidate in candidates.candidates {
            let eligibility =
                eligible_actives(&self.model, candidate.node, candidate.tau, &self.frontier);
            if eligibility.skipped > 0 {
                self.metrics.skipped_eligibility += eligibility.skipped;
                tracing::debug!(
                    run = ?self.run.0,
                    target = %candidate.node,
                    skipped = eligibility.skipped,
                    "active neighbours dropped from eligibility"
                );
            }

            let hit = match params {
                ModelParams::LinearThreshold { .. } => {
                    threshold_met(&self.model, candidate.node, &eligibility.actives)
                }
                ModelParams::StochasticSir { .. } => sample.map_or(false, |s| {
                    stochastic_hit(
                        self.model.coefficient(candidate.node),
                        eligibility.actives.len(),
                        s,
                    )
                }),
            };

            if hit {
                let time = self.clock + candidate.tau;
                self.frontier.push(candidate.node);
                for &source in &eligibility.actives {
                    self.records.push(ActivationRecord {
                        source,
                        target: candidate.node,
                        time,
                    });
                }
                self.clock += candidate.tau;
                self.metrics.activations += 1;
                activated = true;
                tracing::debug!(
                    run = ?self.run.0,
                    target = %candidate.node,
                    tau = candidate.tau,
                    clock = self.clock,
                    "node activated"
                );
                break;
            }
        }

        // Recovery sweep: the round's shared draw against gamma moves
        // the whole current frontier to the removed set. Removal is
        // terminal; these nodes never re-enter candidacy or pivoting.
        if let (ModelParams::StochasticSir { gamma, .. }, Some(sample)) = (params, sample) {
            if sample.0 < gamma {
                let drained = self.frontier.drain();
                self.metrics.removals += drained.len();
                for node in drained {
                    self.removed.insert(node);
                    tracing::debug!(run = ?self.run.0, node = %node, "node removed");
                }
            }
        }

        if !activated && self.frontier.len() == len_at_round_start {
            return self.terminate();
        }
        self.state
    }

    fn terminate(&mut self) -> DriverState {
        self.state = DriverState::Terminated(Termination::Stall);
        tracing::info!(
            run = ?self.run.0,
            rounds = self.metrics.rounds,
            activations = self.metrics.activations,
            removals = self.metrics.removals,
            skipped = self.metrics.total_skipped(),
            clock = self.clock,
            "cascade terminated"
        );
        self.state
    }

    /// Run rounds until the cascade stalls.
    ///
    /// With a round budget configured, exceeding it returns
    /// `BudgetExceeded` instead of looping forever on pathological
    /// inputs.
    pub fn run(mut self) -> Result<CascadeResult> {
        while self.state == DriverState::Running {
            if let Some(max_rounds) = self.max_rounds {
                if self.metrics.rounds >= max_rounds {
                    return Err(TractusError::Cascade(CascadeError::BudgetExceeded {
                        rounds: self.metrics.rounds,
                    }));
                }
            }
            self.step();
        }
        Ok(self.into_result())
    }

    /// Consume the driver and package the accumulated state.
    pub fn into_result(self) -> CascadeResult {
        CascadeResult {
            run: self.run,
            records: self.records,
            removed: self.removed,
            metrics: self.metrics,
        }
    }
}
