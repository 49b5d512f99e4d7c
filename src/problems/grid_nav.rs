//! Point-to-point navigation on a [`GridWorld`].
//!
//! The state is just the agent's position. Reaching the single goal cell
//! ends the search, every move costs [`UNIT_STEP_COST`].

use std::path::Path;
use std::path::PathBuf;

use derive_more::Display;
use thiserror::Error;

use crate::grid::GridCost;
use crate::grid::GridPoint;
use crate::grid::manhattan_distance;
use crate::problem::Heuristic;
use crate::problem::SearchProblem;
use crate::problems::grid_world::GridCell;
use crate::problems::grid_world::GridCellParseError;
use crate::problems::grid_world::GridMove;
use crate::problems::grid_world::GridWorld;
use crate::problems::grid_world::MAX_ELEMENTS_DISPLAYED;
use crate::problems::grid_world::UNIT_STEP_COST;

#[derive(Clone, Debug)]
pub struct GridNavProblem {
    world: GridWorld,
    start: GridPoint,
    goal: GridPoint,
}

impl GridNavProblem {
    #[must_use]
    pub fn new(world: GridWorld, start: GridPoint, goal: GridPoint) -> Self {
        Self { world, start, goal }
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
    pub fn goal(&self) -> GridPoint {
        self.goal
    }

    /// The same world with a random passable start and goal.
    pub fn randomize<R: rand::Rng>(&self, r: &mut R) -> Option<GridNavProblem> {
        let start = self.world.random_point(r)?;
        let goal = self.world.random_point(r)?;
        Some(GridNavProblem {
            world: self.world.clone(),
            start,
            goal,
        })
    }
}

impl SearchProblem<GridPoint, GridMove, GridCost> for GridNavProblem {
    fn start_state(&self) -> GridPoint {
        self.start
    }

    fn is_goal(&self, state: &GridPoint) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &GridPoint) -> Vec<(GridPoint, GridMove, GridCost)> {
        self.world
            .neighbours(state)
            .into_iter()
            .map(|(to, mv)| (to, mv, UNIT_STEP_COST))
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
pub enum GridNavCell {
    Cell(GridCell),
    #[display("S")]
    Start,
    #[display("G")]
    Goal,
}

#[derive(Debug, Error)]
pub enum GridNavCellParseError {
    #[error("Invalid cell {e}")]
    InvalidCell { e: GridCellParseError },
}

impl std::convert::TryFrom<char> for GridNavCell {
    type Error = GridNavCellParseError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            'S' => Ok(GridNavCell::Start),
            'G' => Ok(GridNavCell::Goal),
            ch => {
                let cell =
                    GridCell::try_from(ch).map_err(|e| GridNavCellParseError::InvalidCell { e })?;
                Ok(GridNavCell::Cell(cell))
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum GridNavParseError {
    #[error("Empty input")]
    EmptyInput,
    #[error("Invalid cell {e} found at ({x},{y})")]
    InvalidCell {
        e: GridNavCellParseError,
        x: usize,
        y: usize,
    },
    #[error("No start cell 'S' found")]
    MissingStart,
    #[error("No goal cell 'G' found")]
    MissingGoal,
    #[error("Second start cell 'S' found at ({x},{y})")]
    DuplicateStart { x: usize, y: usize },
    #[error("Second goal cell 'G' found at ({x},{y})")]
    DuplicateGoal { x: usize, y: usize },
    #[error("Line {y} is {width} cells wide, expected {expected}")]
    RaggedLine {
        y: usize,
        width: usize,
        expected: usize,
    },
    #[error("I/O error when loading '{p}': {e}")]
    IOError { p: PathBuf, e: std::io::Error },
}

impl std::convert::TryFrom<&str> for GridNavProblem {
    type Error = GridNavParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let lines: Vec<&str> = s.lines().collect();

        if lines.is_empty() || lines[0].is_empty() {
            return Err(GridNavParseError::EmptyInput);
        }

        // Widths count chars, not bytes; the wall glyphs are multibyte.
        let max_x = lines[0].chars().count();
        let max_y = lines.len();
        debug_assert!(GridWorld::safe_dimensions(max_x, max_y));
        let mut world = GridWorld::new_empty_with_dimensions(max_x, max_y);
        let mut start: Option<GridPoint> = None;
        let mut goal: Option<GridPoint> = None;

        for (y, line) in lines.iter().enumerate() {
            let width = line.chars().count();
            if width != max_x {
                return Err(GridNavParseError::RaggedLine {
                    y,
                    width,
                    expected: max_x,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                let cell = GridNavCell::try_from(ch)
                    .map_err(|e| GridNavParseError::InvalidCell { e, x, y })?;

                world.map[y][x] = match cell {
                    GridNavCell::Start => {
                        let here = GridPoint::new_from_usize(x, y).unwrap();
                        if start.replace(here).is_some() {
                            return Err(GridNavParseError::DuplicateStart { x, y });
                        }
                        GridCell::Empty
                    }
                    GridNavCell::Goal => {
                        let here = GridPoint::new_from_usize(x, y).unwrap();
                        if goal.replace(here).is_some() {
                            return Err(GridNavParseError::DuplicateGoal { x, y });
                        }
                        GridCell::Empty
                    }
                    GridNavCell::Cell(c) => c,
                }
            }
        }

        Ok(GridNavProblem {
            world,
            start: start.ok_or(GridNavParseError::MissingStart)?,
            goal: goal.ok_or(GridNavParseError::MissingGoal)?,
        })
    }
}

impl std::convert::TryFrom<&Path> for GridNavProblem {
    type Error = GridNavParseError;

    fn try_from(p: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(p).map_err(|e| GridNavParseError::IOError {
            p: p.to_path_buf(),
            e,
        })?;
        GridNavProblem::try_from(text.as_str())
    }
}

impl std::fmt::Display for GridNavProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let d = self.world.dimensions();
        writeln!(
            f,
            "GridNavProblem({}x{}) (s:{}, g:{}):",
            d.0, d.1, self.start, self.goal
        )?;
        for (y, line) in self.world.map.iter().enumerate().take(MAX_ELEMENTS_DISPLAYED) {
            for (x, cell) in line.iter().enumerate().take(MAX_ELEMENTS_DISPLAYED) {
                match GridPoint::new_from_usize(x, y) {
                    Some(here) if here == self.start && here == self.goal => write!(f, "!")?,
                    Some(here) if here == self.start => write!(f, "S")?,
                    Some(here) if here == self.goal => write!(f, "G")?,
                    _ => write!(f, "{cell}")?,
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Straight-line moves with no walls in the way.
///
/// Never overestimates on unit-cost grids, so A* stays optimal with it.
#[derive(Debug)]
#[cfg_attr(feature = "inspect", derive(Clone))]
pub struct GridNavManhattanHeuristic;

impl Heuristic<GridNavProblem, GridPoint, GridMove, GridCost> for GridNavManhattanHeuristic {
    #[inline(always)]
    fn h(problem: &GridNavProblem, state: &GridPoint) -> GridCost {
        manhattan_distance(state, &problem.goal) * UNIT_STEP_COST
    }
}
