use std::fmt::Debug;

use crate::cost::Cost;
use crate::space::Action;
use crate::space::State;

/// The capability set a concrete state space hands to the engine.
///
/// There are no default method bodies; a type either searches or it does not
/// compile. The engine calls nothing else, so anything exposing these four
/// operations can be searched, whether it is backed by a grid, an explicit
/// edge list, or something implicit and unbounded.
pub trait SearchProblem<St, A, C>: Debug
where
    St: State,
    A: Action,
    C: Cost,
{
    /// The state searches begin from.
    fn start_state(&self) -> St;

    /// Goal test for a single state.
    fn is_goal(&self, s: &St) -> bool;

    /// Expands a state into `(successor, action, step cost)` triples.
    ///
    /// The returned order is significant. Equal-priority frontier entries
    /// break ties by insertion order, so re-sorting successors changes which
    /// of several equally good paths a search returns.
    fn successors(&self, s: &St) -> Vec<(St, A, C)>;

    /// Total cost of an action sequence applied from the start state.
    ///
    /// Sequences containing a move that is illegal where it occurs cost
    /// [`Cost::max_value`](num_traits::bounds::UpperBounded::max_value),
    /// which [`Cost::valid`] reports as invalid.
    fn cost_of_actions(&self, actions: &[A]) -> C;
}

/// Estimates remaining cost from a state to the nearest goal.
///
/// Estimates must be non-negative lower bounds for A*'s optimality guarantee
/// to hold (see the admissibility notes on each algorithm). The default body
/// is the zero estimate, which is admissible and consistent for every
/// problem and reduces A* to uniform-cost search.
///
/// The problem reference gives heuristics access to problem-held static data
/// (obstacle layout, target lists, memoized constants). The engine passes it
/// through untouched.
pub trait Heuristic<P, St, A, C>: Debug
where
    P: SearchProblem<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    #[must_use]
    fn h(_problem: &P, _state: &St) -> C {
        C::zero()
    }
}

/// The always-zero estimate.
#[derive(Debug)]
pub struct ZeroHeuristic;

impl<P, St, A, C> Heuristic<P, St, A, C> for ZeroHeuristic
where
    P: SearchProblem<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
}
