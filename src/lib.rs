use shadow_rs::shadow;

shadow!(build);

// Internals
// ---------
pub mod frontier;
pub mod heap_primitives;

// Search space and problems
// -------------------------
pub mod cost;
pub mod float_cost;
pub mod grid;
pub mod problem;
pub mod space;

// Heuristics
// ----------
pub mod multi_goal;

// Problems
// --------
pub mod problems;

// Algorithms
// ----------
pub mod algorithms;
