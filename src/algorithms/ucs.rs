//! Uniform-cost search.
//!
//! Dijkstra's algorithm over an implicit graph: the frontier is ordered by
//! accumulated path cost `g`, so the first time a state is popped unvisited
//! it is popped with the least cost any path can reach it. With non-negative
//! step costs the returned path is cost-optimal.
//!
//! Successor entries go through [`PriorityQueue::update`], a decrease-key on
//! the whole (state, actions, g) record. Entries for one state over
//! different paths therefore coexist in the frontier; the closed check at
//! pop keeps them from being expanded twice.
//!
//! [`PriorityQueue::update`]: crate::frontier::PriorityQueue::update

use rustc_hash::FxHashSet;

use crate::algorithms::CostedNode;
use crate::cost::Cost;
use crate::frontier::PriorityQueue;
use crate::problem::SearchProblem;
use crate::space::Action;
use crate::space::Path;
use crate::space::State;

#[derive(Debug)]
pub struct UniformCostSearch<P, St, A, C>
where
    P: SearchProblem<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    open: PriorityQueue<CostedNode<St, A, C>, C>,
    closed: FxHashSet<St>,
    expanded: usize,

    problem: P,
}

impl<P, St, A, C> UniformCostSearch<P, St, A, C>
where
    P: SearchProblem<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    #[must_use]
    pub fn new(problem: P) -> Self {
        let mut open = PriorityQueue::new();
        open.push(CostedNode::start(problem.start_state()), C::zero());
        Self {
            open,
            closed: FxHashSet::default(),
            expanded: 0,
            problem,
        }
    }

    /// Runs the search to the cheapest goal.
    ///
    /// Searches are single-shot; build a fresh one per query. Starting on a
    /// goal state returns the [`Path::stay_at`] sentinel without expanding
    /// anything. `None` means exhaustion.
    #[must_use]
    pub fn find_first(&mut self) -> Option<Path<St, A, C>> {
        #[cfg(feature = "coz_profile")]
        coz::scope!("UcsFindFirst");

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
                let g = reached.g;
                self.open.update(reached, g);
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
            "UniformCostSearch",
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::testgraph::GraphProblem;
    use crate::algorithms::testgraph::Hop;
    use crate::algorithms::testgraph::Vertex;
    use crate::float_cost::FloatCost;

    #[test]
    fn single_edge_returns_the_single_action() {
        let problem = GraphProblem::<u32>::single_edge();
        let mut search = UniformCostSearch::<GraphProblem<u32>, Vertex, Hop, u32>::new(problem);

        let path = search.find_first().unwrap();
        assert_eq!(path.actions, vec![Hop::To(1)]);
        assert_eq!(path.cost, 1);
    }

    #[test]
    fn start_on_goal_returns_the_stay_sentinel() {
        let problem = GraphProblem::<u32>::new(0, &[0], &[]);
        let mut search = UniformCostSearch::<GraphProblem<u32>, Vertex, Hop, u32>::new(problem);

        let path = search.find_first().unwrap();
        assert!(path.is_stay());
        assert_eq!(search.expanded(), 0);
    }

    #[test]
    fn prefers_the_cheap_detour_over_the_direct_edge() {
        let problem = GraphProblem::<u32>::expensive_shortcut();
        let mut search = UniformCostSearch::<GraphProblem<u32>, Vertex, Hop, u32>::new(problem);

        let path = search.find_first().unwrap();
        assert_eq!(path.actions, vec![Hop::To(2), Hop::To(1)]);
        assert_eq!(path.cost, 2);
    }

    #[test]
    fn reported_cost_matches_cost_of_actions() {
        let edges = [(0, 1, 3), (0, 2, 1), (2, 3, 1), (1, 3, 4), (3, 4, 2)];
        let problem = GraphProblem::<u32>::new(0, &[4], &edges);
        let mut search = UniformCostSearch::<GraphProblem<u32>, Vertex, Hop, u32>::new(problem);

        let path = search.find_first().unwrap();
        assert_eq!(path.cost, search.problem().cost_of_actions(&path.actions));
        assert_eq!(path.cost, 4);
    }

    #[test]
    fn fractional_costs_take_the_cheap_detour() {
        let half = FloatCost::new(0.5f64);
        let five = FloatCost::new(5.0f64);
        let edges = [(0, 1, five), (0, 2, half), (2, 1, half)];
        let problem = GraphProblem::<FloatCost<f64>>::new(0, &[1], &edges);
        let mut search =
            UniformCostSearch::<GraphProblem<FloatCost<f64>>, Vertex, Hop, FloatCost<f64>>::new(
                problem,
            );

        let path = search.find_first().unwrap();
        assert_eq!(path.actions, vec![Hop::To(2), Hop::To(1)]);
        assert_eq!(path.cost, FloatCost::new(1.0f64));
    }

    #[test]
    fn unreachable_goal_returns_none() {
        let problem = GraphProblem::<u32>::new(0, &[9], &[(0, 1, 2)]);
        let mut search = UniformCostSearch::<GraphProblem<u32>, Vertex, Hop, u32>::new(problem);
        assert!(search.find_first().is_none());
    }
}
