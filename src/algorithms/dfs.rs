//! Depth-first search.
//!
//! Dives along the most recently discovered branch first (LIFO frontier).
//! Complete on finite graphs thanks to the closed set, but the returned
//! path carries no cost guarantee of any kind.

use std::marker::PhantomData;

use rustc_hash::FxHashSet;

use crate::algorithms::Node;
use crate::cost::Cost;
use crate::frontier::Stack;
use crate::problem::SearchProblem;
use crate::space::Action;
use crate::space::Path;
use crate::space::State;

#[derive(Debug)]
pub struct DepthFirstSearch<P, St, A, C>
where
    P: SearchProblem<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    open: Stack<Node<St, A>>,
    closed: FxHashSet<St>,
    expanded: usize,

    problem: P,

    _phantom_cost: PhantomData<C>,
}

impl<P, St, A, C> DepthFirstSearch<P, St, A, C>
where
    P: SearchProblem<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    #[must_use]
    pub fn new(problem: P) -> Self {
        let mut open = Stack::new();
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
    /// anything. `None` means the whole reachable space was exhausted
    /// without meeting a goal.
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
            "DepthFirstSearch",
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::testgraph::GraphProblem;
    use crate::algorithms::testgraph::Hop;
    use crate::algorithms::testgraph::Vertex;

    #[test]
    fn single_edge_returns_the_single_action() {
        let problem = GraphProblem::<u32>::single_edge();
        let mut search = DepthFirstSearch::<GraphProblem<u32>, Vertex, Hop, u32>::new(problem);

        let path = search.find_first().unwrap();
        assert_eq!(path.actions, vec![Hop::To(1)]);
        assert_eq!(path.cost, 1);
        assert_eq!(path.end, Vertex(1));
    }

    #[test]
    fn start_on_goal_returns_the_stay_sentinel() {
        let problem = GraphProblem::<u32>::new(0, &[0], &[(0, 1, 1)]);
        let mut search = DepthFirstSearch::<GraphProblem<u32>, Vertex, Hop, u32>::new(problem);

        let path = search.find_first().unwrap();
        assert!(path.is_stay());
        assert_eq!(path.cost, 0);
        assert_eq!(search.expanded(), 0);
    }

    #[test]
    fn unreachable_goal_returns_none() {
        let problem = GraphProblem::<u32>::new(0, &[9], &[(0, 1, 1), (1, 2, 1)]);
        let mut search = DepthFirstSearch::<GraphProblem<u32>, Vertex, Hop, u32>::new(problem);

        assert!(search.find_first().is_none());
        assert_eq!(search.expanded(), 3);
    }

    #[test]
    fn cycles_terminate() {
        let edges = [(0, 1, 1), (1, 0, 1), (1, 2, 1)];
        let problem = GraphProblem::<u32>::new(0, &[2], &edges);
        let mut search = DepthFirstSearch::<GraphProblem<u32>, Vertex, Hop, u32>::new(problem);

        let path = search.find_first().unwrap();
        assert_eq!(path.end, Vertex(2));
        assert!(search.expanded() <= 3);
    }

    #[test]
    fn dives_down_the_last_listed_branch_first() {
        // Both 1 and 2 lead to the goal; LIFO order expands 2 first.
        let edges = [(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)];
        let problem = GraphProblem::<u32>::new(0, &[3], &edges);
        let mut search = DepthFirstSearch::<GraphProblem<u32>, Vertex, Hop, u32>::new(problem);

        let path = search.find_first().unwrap();
        assert_eq!(path.actions, vec![Hop::To(2), Hop::To(3)]);
    }
}
