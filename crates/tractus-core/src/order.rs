//! Temporal order resolver — candidate ordering for one round.
//!
//! Recomputed fresh from the pivot every round rather than retained as
//! mutable state, so the sequence restarts cleanly after each frontier
//! change.

use crate::graph::WeightedGraph;
use crate::model::DualGraphModel;
use crate::types::{Frontier, NodeId};
use std::collections::BTreeSet;

/// A not-yet-active neighbour of the pivot with its activation delay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub node: NodeId,
    pub tau: f64,
}

/// The round's candidates, ascending by tau, plus the count of
/// neighbours dropped for missing or degenerate weights.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateSet {
    pub candidates: Vec<Candidate>,
    pub skipped: usize,
}

/// Resolve the candidate order for a round.
///
/// Candidates are the pivot's topology-neighbours that are neither
/// active nor removed. Neighbours whose edge pair yields no valid tau
/// are skipped, not ordered arbitrarily. Ties break by ascending node
/// identifier for determinism.
pub fn candidate_order<G: WeightedGraph>(
    model: &DualGraphModel<'_, G>,
    pivot: NodeId,
    frontier: &Frontier,
    removed: &BTreeSet<NodeId>,
) -> CandidateSet {
    let mut candidates = Vec::new();
    let mut skipped = 0;

    for (neighbor, _intensity) in model.topology().neighbors(pivot) {
        if frontier.contains(neighbor) || removed.contains(&neighbor) {
            continue;
        }
        match model.tau(pivot, neighbor) {
            Some(tau) => candidates.push(Candidate { node: neighbor, tau }),
            None => skipped += 1,
        }
    }

    candidates.sort_by(|a, b| a.tau.total_cmp(&b.tau).then(a.node.cmp(&b.node)));

    CandidateSet { candidates, skipped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MapGraph;
    use crate::types::ModelParams;

    fn order(
        topology: &MapGraph,
        distance: &MapGraph,
        pivot: u64,
        active: &[u64],
    ) -> CandidateSet {
        let seeds: Vec<NodeId> = active.iter().map(|&n| NodeId(n)).collect();
        let model = DualGraphModel::new(
            topology,
            distance,
            &seeds,
            ModelParams::LinearThreshold { threshold: 0.5 },
        )
        .unwrap();
        let frontier = Frontier::from_seeds(&seeds);
        candidate_order(&model, NodeId(pivot), &frontier, &BTreeSet::new())
    }

    #[test]
    fn sorts_ascending_by_tau() {
        let topology = MapGraph::from_edges(&[(1, 2, 1.0), (1, 3, 2.0), (1, 4, 1.0)]);
        let distance = MapGraph::from_edges(&[(1, 2, 6.0), (1, 3, 2.0), (1, 4, 3.0)]);

        let set = order(&topology, &distance, 1, &[1]);
        let nodes: Vec<NodeId> = set.candidates.iter().map(|c| c.node).collect();
        // taus: 2 -> 6.0, 3 -> 1.0, 4 -> 3.0
        assert_eq!(nodes, vec![NodeId(3), NodeId(4), NodeId(2)]);
        assert_eq!(set.skipped, 0);
    }

    #[test]
    fn breaks_tau_ties_by_node_id() {
        let topology = MapGraph::from_edges(&[(1, 3, 1.0), (1, 2, 2.0)]);
        let distance = MapGraph::from_edges(&[(1, 3, 2.0), (1, 2, 4.0)]);

        let set = order(&topology, &distance, 1, &[1]);
        let nodes: Vec<NodeId> = set.candidates.iter().map(|c| c.node).collect();
        // Both taus are 2.0; node 2 comes first.
        assert_eq!(nodes, vec![NodeId(2), NodeId(3)]);
        assert_eq!(set.candidates[0].tau, 2.0);
    }

    #[test]
    fn excludes_frontier_members() {
        let topology = MapGraph::from_edges(&[(1, 2, 1.0), (1, 3, 1.0)]);
        let distance = MapGraph::from_edges(&[(1, 2, 1.0), (1, 3, 1.0)]);

        let set = order(&topology, &distance, 1, &[1, 2]);
        let nodes: Vec<NodeId> = set.candidates.iter().map(|c| c.node).collect();
        assert_eq!(nodes, vec![NodeId(3)]);
    }

    #[test]
    fn excludes_removed_nodes() {
        let topology = MapGraph::from_edges(&[(1, 2, 1.0), (1, 3, 1.0)]);
        let distance = MapGraph::from_edges(&[(1, 2, 1.0), (1, 3, 1.0)]);
        let model = DualGraphModel::new(
            &topology,
            &distance,
            &[NodeId(1)],
            ModelParams::StochasticSir { beta: 0.5, gamma: 0.1 },
        )
        .unwrap();
        let frontier = Frontier::from_seeds(&[NodeId(1)]);
        let removed: BTreeSet<NodeId> = [NodeId(2)].into_iter().collect();

        let set = candidate_order(&model, NodeId(1), &frontier, &removed);
        let nodes: Vec<NodeId> = set.candidates.iter().map(|c| c.node).collect();
        assert_eq!(nodes, vec![NodeId(3)]);
    }

    #[test]
    fn counts_skipped_degenerate_neighbours() {
        // Edge to 3 has no distance correlate; edge to 4 has zero intensity.
        let topology = MapGraph::from_edges(&[(1, 2, 1.0), (1, 3, 1.0), (1, 4, 0.0)]);
        let mut distance = MapGraph::from_edges(&[(1, 2, 5.0), (1, 4, 5.0)]);
        distance.add_node(3);

        let set = order(&topology, &distance, 1, &[1]);
        let nodes: Vec<NodeId> = set.candidates.iter().map(|c| c.node).collect();
        assert_eq!(nodes, vec![NodeId(2)]);
        assert_eq!(set.skipped, 2);
    }
}
