//! A* search.
//!
//! The frontier is ordered by `f = g + h`: accumulated cost plus the
//! heuristic estimate of the cost still to go. With an admissible heuristic
//! (never overestimating the true remaining cost) the first goal popped is
//! reached at minimum cost, and with [`ZeroHeuristic`] the search degrades
//! exactly into uniform-cost search.
//!
//! `f` is computed with a saturating add, so a heuristic returning
//! `C::max_value()` pins the entry at the back of the frontier instead of
//! wrapping around.
//!
//! [`ZeroHeuristic`]: crate::problem::ZeroHeuristic

use std::marker::PhantomData;

use rustc_hash::FxHashSet;

use crate::algorithms::CostedNode;
use crate::cost::Cost;
use crate::frontier::PriorityQueue;
use crate::problem::Heuristic;
use crate::problem::SearchProblem;
use crate::space::Action;
use crate::space::Path;
use crate::space::State;

#[derive(Debug)]
pub struct AStarSearch<P, H, St, A, C>
where
    P: SearchProblem<St, A, C>,
    H: Heuristic<P, St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    open: PriorityQueue<CostedNode<St, A, C>, C>,
    closed: FxHashSet<St>,
    expanded: usize,

    problem: P,

    _phantom_heuristic: PhantomData<H>,
}

impl<P, H, St, A, C> AStarSearch<P, H, St, A, C>
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
        open.push(CostedNode::start(start), h);
        Self {
            open,
            closed: FxHashSet::default(),
            expanded: 0,
            problem,
            _phantom_heuristic: PhantomData,
        }
    }

    /// Runs the search to the first goal popped off the frontier.
    ///
    /// Optimal when `H` never overestimates. Starting on a goal state
    /// returns the [`Path::stay_at`] sentinel without expanding anything.
    /// `None` means exhaustion.
    #[must_use]
    pub fn find_first(&mut self) -> Option<Path<St, A, C>> {
        #[cfg(feature = "coz_profile")]
        coz::scope!("AStarFindFirst");

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
                return Some(Path::new(start, node.state, node.g, node.actions));
            }

            for (next, action, step) in self.problem.successors(&node.state) {
                let reached = node.extended(next, action, step);
                let f = reached.g.saturating_add(&H::h(&self.problem, &reached.state));
                self.open.update(reached, f);
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
            "AStarSearch",
            size_of::<CostedNode<St, A, C>>(),
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
