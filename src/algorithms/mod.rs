//! Implementation of search algorithms.
//!
//! Five searches over the same expansion loop: pop an entry, skip it if the
//! state was already expanded, goal-test, otherwise push every successor
//! with an extended action sequence. They differ only in the frontier
//! discipline and in the priority fed to it, which is what [`Node`] and
//! [`CostedNode`] exist for: the cost-aware searches (uniform-cost, A*)
//! carry their accumulated cost, the others do not.

use crate::cost::Cost;
use crate::space::Action;
use crate::space::State;

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod greedy;
pub mod ucs;

/// Frontier entry for searches that do not track accumulated cost.
///
/// Equality covers the whole record; that is what
/// [`PriorityQueue::update`](crate::frontier::PriorityQueue::update) keys
/// on, so one state reached over two different paths makes two distinct
/// entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<St, A> {
    pub state: St,
    /// Actions that led here from the start state.
    pub actions: Vec<A>,
}

impl<St, A> Node<St, A>
where
    St: State,
    A: Action,
{
    #[must_use]
    pub fn start(state: St) -> Self {
        Self {
            state,
            actions: Vec::new(),
        }
    }

    /// A new entry one action deeper.
    #[must_use]
    pub fn extended(&self, state: St, action: A) -> Self {
        let mut actions = Vec::with_capacity(self.actions.len() + 1);
        actions.extend_from_slice(&self.actions);
        actions.push(action);
        Self { state, actions }
    }
}

/// Frontier entry that also tracks the accumulated path cost `g`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CostedNode<St, A, C> {
    pub state: St,
    /// Actions that led here from the start state.
    pub actions: Vec<A>,
    /// Accumulated cost of `actions`.
    pub g: C,
}

impl<St, A, C> CostedNode<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    #[must_use]
    pub fn start(state: St) -> Self {
        Self {
            state,
            actions: Vec::new(),
            g: C::zero(),
        }
    }

    /// A new entry one action deeper and `step` more expensive.
    #[must_use]
    pub fn extended(&self, state: St, action: A, step: C) -> Self {
        let mut actions = Vec::with_capacity(self.actions.len() + 1);
        actions.extend_from_slice(&self.actions);
        actions.push(action);
        Self {
            state,
            actions,
            g: self.g.saturating_add(&step),
        }
    }
}

pub(crate) fn write_search_stats<W: std::io::Write>(
    out: &mut W,
    name: &str,
    entry_size: usize,
    state_size: usize,
    open_len: usize,
    closed_len: usize,
    expanded: usize,
) -> std::io::Result<()> {
    use size::Size;
    use thousands::Separable;

    writeln!(out, "{name} Stats:")?;
    writeln!(
        out,
        "  - |Open|:   {} ({})",
        open_len.separate_with_commas(),
        Size::from_bytes(open_len * entry_size)
    )?;
    writeln!(
        out,
        "  - |Closed|: {} ({})",
        closed_len.separate_with_commas(),
        Size::from_bytes(closed_len * state_size)
    )?;
    writeln!(out, "  - Expanded: {}", expanded.separate_with_commas())?;
    Ok(())
}
