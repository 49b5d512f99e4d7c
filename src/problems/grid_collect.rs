//! Collecting every target cell on a [`GridWorld`].
//!
//! The state pairs the agent's position with the targets still uncollected,
//! so the searched space is positions times target subsets. Stepping onto a
//! target collects it; the goal is the empty target set.

use std::path::Path;
use std::path::PathBuf;

use derive_more::Display;
use smallvec::SmallVec;
use thiserror::Error;

use crate::grid::GridCost;
use crate::grid::GridPoint;
use crate::multi_goal::MultiGoalState;
use crate::problem::SearchProblem;
use crate::problems::grid_world::GridCell;
use crate::problems::grid_world::GridCellParseError;
use crate::problems::grid_world::GridMove;
use crate::problems::grid_world::GridWorld;
use crate::problems::grid_world::MAX_ELEMENTS_DISPLAYED;
use crate::problems::grid_world::UNIT_STEP_COST;
use crate::space::State;

/// Agent position plus the sorted set of targets still to collect.
///
/// `remaining` stays sorted through removals, so the same progress compares
/// and hashes equal no matter the order it was achieved in.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CollectState {
    agent: GridPoint,
    remaining: SmallVec<[GridPoint; 8]>,
}

impl CollectState {
    #[must_use]
    pub fn new(agent: GridPoint, targets: &[GridPoint]) -> Self {
        let mut remaining: SmallVec<[GridPoint; 8]> = SmallVec::from_slice(targets);
        remaining.sort_unstable();
        remaining.dedup();
        // Standing on a target counts as having collected it.
        if let Ok(under_agent) = remaining.binary_search(&agent) {
            remaining.remove(under_agent);
        }
        Self { agent, remaining }
    }

    /// The state after stepping onto `to`, collecting any target there.
    #[must_use]
    pub fn arrive(&self, to: GridPoint) -> Self {
        let mut remaining = self.remaining.clone();
        if let Ok(collected) = remaining.binary_search(&to) {
            remaining.remove(collected);
        }
        Self {
            agent: to,
            remaining,
        }
    }

    #[must_use]
    pub fn collected_all(&self) -> bool {
        self.remaining.is_empty()
    }
}

impl State for CollectState {}

impl MultiGoalState for CollectState {
    fn agent(&self) -> GridPoint {
        self.agent
    }
    fn remaining(&self) -> &[GridPoint] {
        &self.remaining
    }
}

#[derive(Clone, Debug)]
pub struct GridCollectProblem {
    world: GridWorld,
    start: GridPoint,
    targets: Vec<GridPoint>,
}

impl GridCollectProblem {
    #[must_use]
    pub fn new(world: GridWorld, start: GridPoint, targets: Vec<GridPoint>) -> Self {
        Self {
            world,
            start,
            targets,
        }
    }

    #[must_use]
    pub fn world(&self) -> &GridWorld {
        &self.world
    }
    #[must_use]
    pub fn start(&self) -> GridPoint {
        self.start
    }
    #[must_use]
    pub fn targets(&self) -> &[GridPoint] {
        &self.targets
    }

    /// The same world with a random start and `num_targets` random targets.
    pub fn randomize<R: rand::Rng>(
        &self,
        r: &mut R,
        num_targets: u16,
    ) -> Option<GridCollectProblem> {
        let start = self.world.random_point(r)?;
        let mut targets = Vec::with_capacity(num_targets as usize);
        for _ in 0..num_targets {
            targets.push(self.world.random_point(r)?);
        }
        Some(GridCollectProblem {
            world: self.world.clone(),
            start,
            targets,
        })
    }
}

impl SearchProblem<CollectState, GridMove, GridCost> for GridCollectProblem {
    fn start_state(&self) -> CollectState {
        CollectState::new(self.start, &self.targets)
    }

    fn is_goal(&self, state: &CollectState) -> bool {
        state.collected_all()
    }

    fn successors(&self, state: &CollectState) -> Vec<(CollectState, GridMove, GridCost)> {
        self.world
            .neighbours(&state.agent())
            .into_iter()
            .map(|(to, mv)| (state.arrive(to), mv, UNIT_STEP_COST))
            .collect()
    }

    fn cost_of_actions(&self, actions: &[GridMove]) -> GridCost {
        let mut at = self.start;
        let mut total = 0u32;
        for action in actions {
            if *action == GridMove::Stay {
                continue;
            }
            match self.world.step(&at, *action) {
                Some(next) => {
                    at = next;
                    total += UNIT_STEP_COST;
                }
                None => return GridCost::MAX,
            }
        }
        total
    }
}

#[derive(Copy, Clone, Debug, Display, PartialEq)]
pub enum GridCollectCell {
    Cell(GridCell),
    #[display("S")]
    Start,
    #[display("*")]
    Target,
}

#[derive(Debug, Error)]
pub enum GridCollectCellParseError {
    #[error("Invalid cell {e}")]
    InvalidCell { e: GridCellParseError },
}

impl std::convert::TryFrom<char> for GridCollectCell {
    type Error = GridCollectCellParseError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            'S' => Ok(GridCollectCell::Start),
            '*' => Ok(GridCollectCell::Target),
            ch => {
                let cell = GridCell::try_from(ch)
                    .map_err(|e| GridCollectCellParseError::InvalidCell { e })?;
                Ok(GridCollectCell::Cell(cell))
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum GridCollectParseError {
    #[error("Empty input")]
    EmptyInput,
    #[error("Invalid cell {e} found at ({x},{y})")]
    InvalidCell {
        e: GridCollectCellParseError,
        x: usize,
        y: usize,
    },
    #[error("No start cell 'S' found")]
    MissingStart,
    #[error("Second start cell 'S' found at ({x},{y})")]
    DuplicateStart { x: usize, y: usize },
    #[error("Line {y} is {width} cells wide, expected {expected}")]
    RaggedLine {
        y: usize,
        width: usize,
        expected: usize,
    },
    #[error("I/O error when loading '{p}': {e}")]
    IOError { p: PathBuf, e: std::io::Error },
}

impl std::convert::TryFrom<&str> for GridCollectProblem {
    type Error = GridCollectParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let lines: Vec<&str> = s.lines().collect();

        if lines.is_empty() || lines[0].is_empty() {
            return Err(GridCollectParseError::EmptyInput);
        }

        // Widths count chars, not bytes; the wall glyphs are multibyte.
        let max_x = lines[0].chars().count();
        let max_y = lines.len();
        debug_assert!(GridWorld::safe_dimensions(max_x, max_y));
        let mut world = GridWorld::new_empty_with_dimensions(max_x, max_y);
        let mut start: Option<GridPoint> = None;
        let mut targets = vec![];

        for (y, line) in lines.iter().enumerate() {
            let width = line.chars().count();
            if width != max_x {
                return Err(GridCollectParseError::RaggedLine {
                    y,
                    width,
                    expected: max_x,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                let cell = GridCollectCell::try_from(ch)
                    .map_err(|e| GridCollectParseError::InvalidCell { e, x, y })?;

                world.map[y][x] = match cell {
                    GridCollectCell::Start => {
                        let here = GridPoint::new_from_usize(x, y).unwrap();
                        if start.replace(here).is_some() {
                            return Err(GridCollectParseError::DuplicateStart { x, y });
                        }
                        GridCell::Empty
                    }
                    GridCollectCell::Target => {
                        targets.push(GridPoint::new_from_usize(x, y).unwrap());
                        GridCell::Empty
                    }
                    GridCollectCell::Cell(c) => c,
                }
            }
        }

        Ok(GridCollectProblem {
            world,
            start: start.ok_or(GridCollectParseError::MissingStart)?,
            targets,
        })
    }
}

impl std::convert::TryFrom<&Path> for GridCollectProblem {
    type Error = GridCollectParseError;

    fn try_from(p: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(p).map_err(|e| GridCollectParseError::IOError {
            p: p.to_path_buf(),
            e,
        })?;
        GridCollectProblem::try_from(text.as_str())
    }
}

impl std::fmt::Display for GridCollectProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let d = self.world.dimensions();
        writeln!(
            f,
            "GridCollectProblem({}x{}) (s:{}, targets:{:?}):",
            d.0, d.1, self.start, self.targets
        )?;
        for (y, line) in self.world.map.iter().enumerate().take(MAX_ELEMENTS_DISPLAYED) {
            for (x, cell) in line.iter().enumerate().take(MAX_ELEMENTS_DISPLAYED) {
                let here = GridPoint::new_from_usize(x, y);
                let is_start = here == Some(self.start);
                let is_target = here.is_some_and(|p| self.targets.contains(&p));

                match (is_start, is_target) {
                    (true, true) => write!(f, "!")?,
                    (true, false) => write!(f, "S")?,
                    (false, true) => write!(f, "*")?,
                    (false, false) => write!(f, "{cell}")?,
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;
    use crate::algorithms::astar::AStarSearch;
    use crate::algorithms::bfs::BreadthFirstSearch;
    use crate::algorithms::ucs::UniformCostSearch;
    use crate::grid::CoordInt;
    use crate::multi_goal::NearestChainHeuristic;

    const CORRIDOR: &str = indoc! {"
        %%%%%%%
        %S * *%
        %%%%%%%
    "};

    const TWO_TARGET_ROOM: &str = indoc! {"
        %%%%%%
        %S  *%
        % %% %
        %*   %
        %%%%%%
    "};

    const THREE_TARGET_ROOM: &str = indoc! {"
        %%%%%
        %S* %
        % * %
        %*  %
        %%%%%
    "};

    fn point(x: CoordInt, y: CoordInt) -> GridPoint {
        GridPoint::new(x, y).unwrap()
    }

    #[test]
    fn parses_start_and_targets() {
        let problem = GridCollectProblem::try_from(CORRIDOR).unwrap();
        assert_eq!(problem.start(), point(1, 1));
        assert_eq!(problem.targets(), &[point(3, 1), point(5, 1)]);
    }

    #[test]
    fn rejects_ragged_maps() {
        let err = GridCollectProblem::try_from("%%%\n%S *%\n%%%").unwrap_err();
        assert!(matches!(
            err,
            GridCollectParseError::RaggedLine {
                y: 1,
                width: 5,
                expected: 3
            }
        ));
    }

    #[test]
    fn standing_on_a_target_collects_it() {
        let state = CollectState::new(point(1, 1), &[point(1, 1), point(2, 1)]);
        assert_eq!(state.remaining(), &[point(2, 1)]);
    }

    #[test]
    fn no_targets_means_the_start_is_already_done() {
        let world = GridWorld::new_empty_with_dimensions(3, 3);
        let problem = GridCollectProblem::new(world, point(1, 1), vec![]);

        let mut search =
            UniformCostSearch::<GridCollectProblem, CollectState, GridMove, GridCost>::new(problem);
        let path = search.find_first().unwrap();
        assert!(path.is_stay());
        assert_eq!(search.expanded(), 0);
    }

    #[test]
    fn sweeps_the_corridor_eastwards() {
        let problem = GridCollectProblem::try_from(CORRIDOR).unwrap();

        let mut search = BreadthFirstSearch::<
            GridCollectProblem,
            CollectState,
            GridMove,
            GridCost,
        >::new(problem);
        let path = search.find_first().unwrap();
        assert_eq!(path.actions, vec![GridMove::East; 4]);
        assert!(path.end.collected_all());
    }

    #[test]
    fn two_targets_astar_with_the_chain_heuristic_stays_optimal() {
        let problem = GridCollectProblem::try_from(TWO_TARGET_ROOM).unwrap();

        let mut astar = AStarSearch::<
            GridCollectProblem,
            NearestChainHeuristic,
            CollectState,
            GridMove,
            GridCost,
        >::new(problem.clone());
        let mut ucs = UniformCostSearch::<
            GridCollectProblem,
            CollectState,
            GridMove,
            GridCost,
        >::new(problem);

        let astar_path = astar.find_first().unwrap();
        let ucs_path = ucs.find_first().unwrap();
        assert_eq!(astar_path.cost, 7);
        assert_eq!(astar_path.cost, ucs_path.cost);
        assert!(astar.expanded() <= ucs.expanded());
    }

    #[test]
    fn three_targets_replay_matches_the_reported_cost() {
        let problem = GridCollectProblem::try_from(THREE_TARGET_ROOM).unwrap();

        let mut search = UniformCostSearch::<
            GridCollectProblem,
            CollectState,
            GridMove,
            GridCost,
        >::new(problem.clone());
        let path = search.find_first().unwrap();
        assert_eq!(path.cost, 4);
        assert_eq!(path.cost, problem.cost_of_actions(&path.actions));
        assert!(path.end.collected_all());
    }
}
