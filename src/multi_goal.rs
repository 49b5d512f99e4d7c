//! Estimate for "visit every target" goals.
//!
//! The estimate chains nearest-target hops: from the agent, repeatedly walk
//! (on the Manhattan metric, ignoring walls) to the closest remaining
//! target, summing the hop lengths. That is deliberately NOT the optimal
//! tour over the targets; computing one is exponential in the target count
//! while the chain is quadratic, and the chain is already exact for zero or
//! one target. On an obstacle-free grid the chain never overestimates the
//! true collection cost. Walls can push the true cost above the estimate's
//! assumptions in either direction, so treat admissibility as a per-map
//! property, not a given.

use smallvec::SmallVec;

use crate::grid::GridCost;
use crate::grid::GridPoint;
use crate::grid::manhattan_distance;
use crate::problem::Heuristic;
use crate::problem::SearchProblem;
use crate::space::Action;
use crate::space::State;

/// A state that decomposes into an agent position and remaining targets.
///
/// The slice order carries no meaning here; distance ties break on the
/// lexicographically smallest target, so estimates do not depend on how the
/// state stores its targets.
pub trait MultiGoalState: State {
    fn agent(&self) -> GridPoint;
    fn remaining(&self) -> &[GridPoint];
}

/// Total Manhattan length of the nearest-target chain starting at `from`.
#[must_use]
pub fn nearest_chain_cost(from: GridPoint, targets: &[GridPoint]) -> GridCost {
    let mut remaining: SmallVec<[GridPoint; 8]> = SmallVec::from_slice(targets);
    let mut reference = from;
    let mut total: GridCost = 0;

    while !remaining.is_empty() {
        let mut best = 0;
        let mut best_distance = manhattan_distance(&reference, &remaining[0]);
        for (i, target) in remaining.iter().enumerate().skip(1) {
            let distance = manhattan_distance(&reference, target);
            if distance < best_distance
                || (distance == best_distance && *target < remaining[best])
            {
                best = i;
                best_distance = distance;
            }
        }
        total += best_distance;
        reference = remaining.swap_remove(best);
    }

    total
}

/// [`nearest_chain_cost`] as a [`Heuristic`] over any [`MultiGoalState`].
#[derive(Debug)]
pub struct NearestChainHeuristic;

impl<P, St, A> Heuristic<P, St, A, GridCost> for NearestChainHeuristic
where
    P: SearchProblem<St, A, GridCost>,
    St: MultiGoalState,
    A: Action,
{
    fn h(_problem: &P, state: &St) -> GridCost {
        nearest_chain_cost(state.agent(), state.remaining())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: u32, y: u32) -> GridPoint {
        GridPoint::new(x, y).unwrap()
    }

    /// The chain's first hop, resolved exactly like `nearest_chain_cost`.
    fn first_selected(from: GridPoint, targets: &[GridPoint]) -> GridPoint {
        *targets
            .iter()
            .min_by_key(|t| (manhattan_distance(&from, t), **t))
            .expect("first_selected needs a non-empty target set")
    }

    #[test]
    fn no_targets_is_free() {
        assert_eq!(nearest_chain_cost(p(3, 3), &[]), 0);
    }

    #[test]
    fn single_target_is_manhattan() {
        assert_eq!(nearest_chain_cost(p(0, 0), &[p(3, 4)]), 7);
        assert_eq!(nearest_chain_cost(p(3, 4), &[p(3, 4)]), 0);
    }

    #[test]
    fn chains_through_the_nearest_target() {
        // (0,0) -> (2,0) -> (5,0)
        assert_eq!(nearest_chain_cost(p(0, 0), &[p(2, 0), p(5, 0)]), 5);
        // Target order in the slice does not matter.
        assert_eq!(nearest_chain_cost(p(0, 0), &[p(5, 0), p(2, 0)]), 5);
    }

    #[test]
    fn distance_ties_pick_the_lexicographically_smallest() {
        // Both targets sit 2 away; (2,4) < (4,2), so the chain goes there
        // first and then crosses over.
        let targets = [p(4, 2), p(2, 4)];
        assert_eq!(first_selected(p(2, 2), &targets), p(2, 4));
        assert_eq!(nearest_chain_cost(p(2, 2), &targets), 6);
        let flipped = [p(2, 4), p(4, 2)];
        assert_eq!(nearest_chain_cost(p(2, 2), &flipped), 6);
    }

    #[test]
    fn collecting_in_chain_order_never_raises_the_estimate() {
        let mut reference = p(0, 0);
        let mut targets = vec![p(2, 1), p(2, 3), p(7, 0), p(1, 6), p(4, 4)];

        let mut previous = nearest_chain_cost(reference, &targets);
        while !targets.is_empty() {
            let next = first_selected(reference, &targets);
            targets.retain(|t| *t != next);
            reference = next;

            let estimate = nearest_chain_cost(reference, &targets);
            assert!(estimate <= previous);
            previous = estimate;
        }
        assert_eq!(previous, 0);
    }
}
