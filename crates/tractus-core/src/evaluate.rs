//! Activation evaluator — decides whether a candidate target activates.
//!
//! The eligibility filter is a causal-ordering constraint: an active
//! neighbour only counts toward a candidate if its own signal, delayed
//! by its tau to the target, would have arrived no later than the
//! candidate edge being evaluated.

use crate::graph::WeightedGraph;
use crate::model::DualGraphModel;
use crate::types::{Frontier, NodeId, RoundSample};

/// The time-eligible active neighbours of a candidate target, plus the
/// count of active neighbours dropped for degenerate edge pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct Eligibility {
    pub actives: Vec<NodeId>,
    pub skipped: usize,
}

/// Filter the target's active neighbours down to those whose tau to the
/// target does not exceed the candidate tau.
///
/// Sorted by node identifier so record emission is deterministic.
pub fn eligible_actives<G: WeightedGraph>(
    model: &DualGraphModel<'_, G>,
    target: NodeId,
    tau: f64,
    frontier: &Frontier,
) -> Eligibility {
    let mut actives = Vec::new();
    let mut skipped = 0;

    for (neighbor, _intensity) in model.topology().neighbors(target) {
        if !frontier.contains(neighbor) {
            continue;
        }
        match model.tau(neighbor, target) {
            Some(t) if t <= tau => actives.push(neighbor),
            Some(_) => {}
            None => skipped += 1,
        }
    }

    actives.sort_unstable();

    Eligibility { actives, skipped }
}

/// Linear-threshold decision: does the summed influence of the eligible
/// actives reach the target's threshold?
///
/// Influence is derived per target (`1/degree`), so the sum is the
/// eligible count scaled by the target's influence.
pub fn threshold_met<G: WeightedGraph>(
    model: &DualGraphModel<'_, G>,
    target: NodeId,
    eligible: &[NodeId],
) -> bool {
    let influence_sum = eligible.len() as f64 * model.influence_of(target);
    influence_sum >= model.coefficient(target)
}

/// Stochastic decision: the round's shared sample falls below beta
/// scaled by the eligible count.
pub fn stochastic_hit(beta: f64, eligible_count: usize, sample: RoundSample) -> bool {
    sample.0 < beta * eligible_count as f64
}
