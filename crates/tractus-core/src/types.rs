//! Shared types used across the tractus crates.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use uuid::Uuid;

/// Identifier for a node shared by the topology and distance graphs.
///
/// Plain integers rather than opaque handles: candidate ordering breaks
/// tau ties by ascending node identifier, so the id must carry a total
/// order that is meaningful to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a single cascade run, used in logs and snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(pub Uuid);

impl RunId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

/// Dynamic state of a node during a cascade.
///
/// `Removed` is terminal and only reachable in the stochastic mode:
/// a removed node never re-enters the frontier, is never a candidate,
/// and never counts toward eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeState {
    Inactive,
    Active,
    Removed,
}

/// A single activation event: `source` triggered `target` at `time`.
///
/// One record is emitted per eligible active neighbour of the target,
/// all stamped with the same activation time (running clock plus the
/// winning candidate's tau). Records are emitted in round order, which
/// is not necessarily time order when taus tie.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivationRecord {
    pub source: NodeId,
    pub target: NodeId,
    pub time: f64,
}

/// Cascade model parameters. The variant selects the mode, which makes
/// mismatched mode/parameter combinations unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ModelParams {
    /// Deterministic linear-threshold activation: a node activates once
    /// the summed influence of its eligible active neighbours reaches
    /// its threshold.
    LinearThreshold { threshold: f64 },
    /// Stochastic SIR-style activation with permanent removal: one
    /// uniform draw per round decides both activation and recovery.
    StochasticSir { beta: f64, gamma: f64 },
}

impl ModelParams {
    /// The per-node coefficient this mode assigns by default
    /// (threshold or beta).
    pub fn default_coefficient(&self) -> f64 {
        match self {
            ModelParams::LinearThreshold { threshold } => *threshold,
            ModelParams::StochasticSir { beta, .. } => *beta,
        }
    }

    pub fn is_stochastic(&self) -> bool {
        matches!(self, ModelParams::StochasticSir { .. })
    }
}

/// The uniform sample shared by every evaluation in one round.
///
/// Passed down explicitly rather than drawn from an ambient generator,
/// so the evaluator stays pure: the round makes a single "did anything
/// happen" trial, not one trial per candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundSample(pub f64);

/// The insertion-ordered set of currently-active nodes.
///
/// The seed set initialises it; the last element is always the pivot
/// for the next round. The cascade driver is the only mutator.
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    order: Vec<NodeId>,
    members: HashSet<NodeId>,
}

impl Frontier {
    pub fn from_seeds(seeds: &[NodeId]) -> Self {
        let mut frontier = Self::default();
        for &seed in seeds {
            frontier.push(seed);
        }
        frontier
    }

    /// Append a node, keeping the no-duplicates invariant.
    pub fn push(&mut self, node: NodeId) {
        if self.members.insert(node) {
            self.order.push(node);
        }
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.members.contains(&node)
    }

    /// The pivot: the most recently activated node.
    pub fn last(&self) -> Option<NodeId> {
        self.order.last().copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.order.iter().copied()
    }

    /// Remove every member, returning them in insertion order.
    pub fn drain(&mut self) -> Vec<NodeId> {
        self.members.clear();
        std::mem::take(&mut self.order)
    }
}
