//! Concrete search problems.
//!
//! These implement [`SearchProblem`] over a shared grid world, so the
//! generic searches can do pathfinding against a graph-like API where from
//! a given state we can find actions that take us to new states.
//!
//! [`SearchProblem`]: crate::problem::SearchProblem

pub mod grid_collect;
pub mod grid_nav;
pub mod grid_world;
