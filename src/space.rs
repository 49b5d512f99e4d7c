use std::fmt::Debug;
use std::hash::Hash;

use crate::cost::Cost;

/// A transition label.
///
/// The engine never interprets actions; it only concatenates them into the
/// returned sequence. Every action vocabulary designates one `stay` action,
/// the sentinel returned when a search starts on a goal state.
pub trait Action: Copy + Clone + Debug + PartialEq + Eq {
    /// The action that leaves the agent where it is.
    fn stay() -> Self;
}

/// A point in the implicit search graph.
///
/// States are opaque to the engine beyond equality and hashing. They are
/// cloned into the visited set and into frontier entries, so composite
/// states (a position plus a remaining-target set) should stay small.
pub trait State: Clone + Debug + PartialEq + Eq + Hash {}

/// A solved path: the action sequence plus its endpoints and total cost.
///
/// Searches that start on a goal return the one-element [`Action::stay`]
/// sentinel with zero cost, distinguishable from ordinary paths with
/// [`Path::is_stay`].
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "inspect", derive(Clone))]
pub struct Path<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    pub start: St,
    pub end: St,
    pub cost: C,
    pub actions: Vec<A>,
}

impl<St, A, C> Path<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    #[inline(always)]
    pub fn new(start: St, end: St, cost: C, actions: Vec<A>) -> Self {
        Self {
            start,
            end,
            cost,
            actions,
        }
    }

    /// The sentinel path for a search that began on a goal state.
    #[inline(always)]
    pub fn stay_at(start: St) -> Self {
        Self {
            end: start.clone(),
            start,
            cost: C::zero(),
            actions: vec![A::stay()],
        }
    }

    #[inline(always)]
    #[must_use]
    pub fn is_stay(&self) -> bool {
        self.actions == [A::stay()]
    }

    /// Number of actions.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl<St, A, C> std::fmt::Display for Path<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Path({}, {:?}:{:?}:{:?})",
            self.cost,
            self.start,
            self.actions.iter().take(20).collect::<Vec<_>>(),
            self.end
        )
    }
}
