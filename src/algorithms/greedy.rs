//! Greedy best-first search.
//!
//! The frontier is ordered by the heuristic alone: whichever state looks
//! closest to a goal is popped next, with no regard for the cost already
//! paid to reach it. Fast when the heuristic is informative, but the
//! returned path carries no optimality guarantee at all.
//!
//! The path cost is recovered by replaying the action sequence through
//! [`SearchProblem::cost_of_actions`], since no `g` is tracked per node.

use std::marker::PhantomData;

use rustc_hash::FxHashSet;

use crate::algorithms::Node;
use crate::cost::Cost;
use crate::frontier::PriorityQueue;
use crate::problem::Heuristic;
use crate::problem::SearchProblem;
use crate::space::Action;
use crate::space::Path;
use crate::space::State;

#[derive(Debug)]
pub struct GreedySearch<P, H, St, A, C>
where
    P: SearchProblem<St, A, C>,
    H: Heuristic<P, St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    open: PriorityQueue<Node<St, A>, C>,
    closed: FxHashSet<St>,
    expanded: usize,

    problem: P,

    _phantom_heuristic: PhantomData<H>,
}

impl<P, H, St, A, C> GreedySearch<P, H, St, A, C>
where
    P: SearchProblem<St, A, C>,
    H: Heuristic<P, St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    #[must_use]
    pub fn new(problem: P) -> Self {
        let mut open = PriorityQueue::new();
        let start = problem.start_state();
        let h = H::h(&problem, &start);
        open.push(Node::start(start), h);
        Self {
            open,
            closed: FxHashSet::default(),
            expanded: 0,
            problem,
            _phantom_heuristic: PhantomData,
        }
    }

    /// Runs the search to the first goal the heuristic steers it into.
    ///
    /// Starting on a goal state returns the [`Path::stay_at`] sentinel
    /// without expanding anything. `None` means exhaustion.
    #[must_use]
    pub fn find_first(&mut self) -> Option<Path<St, A, C>> {
        let start = self.problem.start_state();
        if self.problem.is_goal(&start) {
            return Some(Path::stay_at(start));
        }

        while let Some(node) = self.open.pop() {
            if self.closed.contains(&node.state) {
                continue;
            }
            self.closed.insert(node.state.clone());
            self.expanded += 1;

            if self.problem.is_goal(&node.state) {
                let cost = self.problem.cost_of_actions(&node.actions);
                return Some(Path::new(start, node.state, cost, node.actions));
            }

            for (next, action, _step) in self.problem.successors(&node.state) {
                let h = H::h(&self.problem, &next);
                self.open.update(node.extended(next, action), h);
            }
        }

        None
    }

    /// States expanded so far: popped unvisited and goal-tested.
    #[must_use]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    #[must_use]
    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn write_memory_stats<W: std::io::Write>(&self, mut out: W) -> std::io::Result<()> {
        use std::mem::size_of;
        super::write_search_stats(
            &mut out,
            "GreedySearch",
            size_of::<Node<St, A>>(),
            size_of::<St>(),
            self.open.len(),
            self.closed.len(),
            self.expanded,
        )
    }
    pub fn print_memory_stats(&self) {
        self.write_memory_stats(std::io::stdout().lock()).unwrap()
    }
}
