//! A rectangular grid of empty and wall cells, shared by the grid problems.
//!
//! The world only knows geometry. What counts as a start, a goal or a
//! collectible is up to each problem built on top of it.

use derive_more::Display;
use thiserror::Error;

use crate::grid::CoordInt;
use crate::grid::GridCost;
use crate::grid::GridPoint;
use crate::space::Action;

pub(crate) const MAX_ELEMENTS_DISPLAYED: usize = 20;
const RANDOM_POINT_MAX_TRIES: usize = 10_000;

/// Every legal move costs the same.
pub const UNIT_STEP_COST: GridCost = 1u32;

/// One step on the grid. `y` grows southwards, matching the line order of
/// the text maps.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash)]
pub enum GridMove {
    #[display("↑")]
    North,
    #[display("↓")]
    South,
    #[display("→")]
    East,
    #[display("←")]
    West,
    /// The "no movement" sentinel reported when a search starts on a goal.
    #[display("·")]
    Stay,
}

impl GridMove {
    #[must_use]
    pub(crate) fn delta(self) -> (CoordInt, CoordInt) {
        let prev = CoordInt::MAX;
        let same = 0 as CoordInt;
        let next = 1 as CoordInt;

        #[rustfmt::skip]
        let d = match self {
            GridMove::North => (same, prev),
            GridMove::South => (same, next),
            GridMove::East  => (next, same),
            GridMove::West  => (prev, same),
            GridMove::Stay  => (same, same),
        };
        d
    }
}

impl Action for GridMove {
    fn stay() -> Self {
        GridMove::Stay
    }
}

#[derive(Copy, Clone, Debug, Display, PartialEq)]
pub enum GridCell {
    #[display("░")]
    Empty,
    #[display("█")]
    Wall,
}

#[derive(Debug, Error)]
pub enum GridCellParseError {
    #[error("Invalid character '{0}' found.")]
    InvalidCharacter(char),
}

impl std::convert::TryFrom<char> for GridCell {
    type Error = GridCellParseError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            ' ' | '.' | '░' => Ok(GridCell::Empty),
            '#' | '%' | '█' => Ok(GridCell::Wall),
            ch => Err(GridCellParseError::InvalidCharacter(ch)),
        }
    }
}

#[derive(Clone)]
pub struct GridWorld {
    pub(crate) map: Vec<Vec<GridCell>>,
}

impl GridWorld {
    #[must_use]
    pub fn new_from_map(map: Vec<Vec<GridCell>>) -> Self {
        Self { map }
    }
    #[must_use]
    pub(crate) fn new_empty_with_dimensions(x: usize, y: usize) -> Self {
        Self {
            map: vec![vec![GridCell::Empty; x]; y],
        }
    }

    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        if self.map.is_empty() {
            return (0, 0);
        }
        (self.map[0].len(), self.map.len())
    }

    #[inline(always)]
    fn at(&self, point: &GridPoint) -> GridCell {
        debug_assert!(self.in_bounds(point));
        unsafe {
            *self
                .map
                .get_unchecked(point.y.get() as usize)
                .get_unchecked(point.x.get() as usize)
        }
    }

    #[inline(always)]
    #[must_use]
    pub fn in_bounds(&self, point: &GridPoint) -> bool {
        let (max_x, max_y) = self.dimensions();
        let (max_x, max_y) = (max_x as CoordInt, max_y as CoordInt);

        point.x.get() < max_x && point.y.get() < max_y
    }

    #[inline(always)]
    #[must_use]
    pub fn passable(&self, point: &GridPoint) -> bool {
        self.in_bounds(point) && self.at(point) != GridCell::Wall
    }

    /// Applies a move, or `None` when it walks off the map or into a wall.
    ///
    /// [`GridMove::Stay`] keeps the point where it is.
    #[must_use]
    pub fn step(&self, from: &GridPoint, mv: GridMove) -> Option<GridPoint> {
        let (dx, dy) = mv.delta();
        let x = from.x.get().wrapping_add(dx);
        let y = from.y.get().wrapping_add(dy);

        let to = GridPoint::new(x, y)?;
        self.passable(&to).then_some(to)
    }

    /// Reachable neighbours of a point, always enumerated in North, South,
    /// East, West order. The searches keep successor order, so this order
    /// decides ties downstream.
    #[must_use]
    pub fn neighbours(&self, at: &GridPoint) -> Vec<(GridPoint, GridMove)> {
        #[cfg(feature = "coz_profile")]
        coz::scope!("GridExpansion");

        let mut v = Vec::with_capacity(4);
        for mv in [
            GridMove::North,
            GridMove::South,
            GridMove::East,
            GridMove::West,
        ] {
            if let Some(to) = self.step(at, mv) {
                v.push((to, mv));
            }
        }
        v
    }

    pub fn random_point<R: rand::Rng>(&self, r: &mut R) -> Option<GridPoint> {
        let (max_x, max_y) = self.dimensions();
        if max_x == 0 || max_y == 0 {
            return None;
        }
        let max_x = max_x as CoordInt;
        let max_y = max_y as CoordInt;

        for _tries in 0..RANDOM_POINT_MAX_TRIES {
            let x = r.random::<CoordInt>() % max_x;
            let y = r.random::<CoordInt>() % max_y;
            if let Some(point) = GridPoint::new(x, y) {
                if self.passable(&point) {
                    return Some(point);
                }
            }
        }

        None
    }

    #[must_use]
    pub(crate) fn safe_dimensions(max_x: usize, max_y: usize) -> bool {
        (max_x < CoordInt::MAX as usize) && (max_y < CoordInt::MAX as usize)
    }
}

impl std::fmt::Display for GridWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let d = self.dimensions();
        writeln!(f, "GridWorld({}x{}):", d.0, d.1)?;
        for line in self.map.iter().take(MAX_ELEMENTS_DISPLAYED) {
            for cell in line.iter().take(MAX_ELEMENTS_DISPLAYED) {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl std::fmt::Debug for GridWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "GridWorld{:?}", self.dimensions())
    }
}
