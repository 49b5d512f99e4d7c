//! Grid geometry shared by the grid-backed problems and heuristics.

use derive_more::Display;
use nonmax::NonMaxU32;

use crate::cost::Cost;
use crate::space::State;

/// Cost of grid paths. Steps are unit cost.
pub type GridCost = u32;
impl Cost for GridCost {}

/// Plain coordinate values used to build [`Coord`]s.
pub type CoordInt = u32;
/// Niche-packed coordinate, so `Option<GridPoint>` costs nothing extra.
pub type Coord = NonMaxU32;

/// A cell position on a rectangular grid.
///
/// Ordering is lexicographic on `(x, y)`; the multi-goal heuristic leans on
/// this to break distance ties deterministically.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display("({x},{y})")]
pub struct GridPoint {
    pub x: Coord,
    pub y: Coord,
}

impl State for GridPoint {}

impl GridPoint {
    #[inline(always)]
    #[must_use]
    pub fn new(x: CoordInt, y: CoordInt) -> Option<Self> {
        Some(Self {
            x: Coord::new(x)?,
            y: Coord::new(y)?,
        })
    }

    #[must_use]
    pub fn new_from_usize(x: usize, y: usize) -> Option<Self> {
        let x: CoordInt = x.try_into().ok()?;
        let y: CoordInt = y.try_into().ok()?;
        Self::new(x, y)
    }
}

/// Sum of absolute coordinate differences.
#[inline(always)]
#[must_use]
pub fn manhattan_distance(a: &GridPoint, b: &GridPoint) -> GridCost {
    a.x.get().abs_diff(b.x.get()) + a.y.get().abs_diff(b.y.get())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: CoordInt, y: CoordInt) -> GridPoint {
        GridPoint::new(x, y).unwrap()
    }

    #[test]
    fn manhattan() {
        assert_eq!(manhattan_distance(&p(0, 0), &p(0, 0)), 0);
        assert_eq!(manhattan_distance(&p(0, 0), &p(3, 4)), 7);
        assert_eq!(manhattan_distance(&p(3, 4), &p(0, 0)), 7);
        assert_eq!(manhattan_distance(&p(2, 2), &p(1, 3)), 2);
    }

    #[test]
    fn lexicographic_order() {
        assert!(p(0, 9) < p(1, 0));
        assert!(p(1, 0) < p(1, 1));
        assert_eq!(p(4, 2).min(p(2, 4)), p(2, 4));
    }

    #[test]
    fn rejects_max_coordinates() {
        assert!(GridPoint::new(u32::MAX, 0).is_none());
        assert!(GridPoint::new_from_usize(usize::MAX, 0).is_none());
    }
}
