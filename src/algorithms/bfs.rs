//! Breadth-first search.
//!
//! Expands states in discovery order (FIFO frontier), so the first goal
//! found is the one fewest actions away. That minimizes path cost only
//! when every step costs the same; weighted graphs want
//! [uniform-cost search](crate::algorithms::ucs) instead.

use std::marker::PhantomData;

use rustc_hash::FxHashSet;

use crate::algorithms::Node;
use crate::cost::Cost;
use crate::frontier::Queue;
use crate::problem::SearchProblem;
use crate::space::Action;
use crate::space::Path;
use crate::space::State;

#[derive(Debug)]
pub struct BreadthFirstSearch<P, St, A, C>
where
    P: SearchProblem<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    open: Queue<Node<St, A>>,
    closed: FxHashSet<St>,
    expanded: usize,

    problem: P,

    _phantom_cost: PhantomData<C>,
}

impl<P, St, A, C> BreadthFirstSearch<P, St, A, C>
where
    P: SearchProblem<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    #[must_use]
    pub fn new(problem: P) -> Self {
        let mut open = Queue::new();
        open.push(Node::start(problem.start_state()));
        Self {
            open,
            closed: FxHashSet::default(),
            expanded: 0,
            problem,
            _phantom_cost: PhantomData,
        }
    }

    /// Runs the search to the first goal found.
    ///
    /// Searches are single-shot; build a fresh one per query. Starting on a
    /// goal state returns the [`Path::stay_at`] sentinel without expanding
    /// anything. `None` means exhaustion.
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
                self.open.push(node.extended(next, action));
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
            "BreadthFirstSearch",
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
