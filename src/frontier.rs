//! Frontier containers: the ordering disciplines behind each search.
//!
//! [`Stack`] and [`Queue`] give LIFO/FIFO order for depth-first and
//! breadth-first search. [`PriorityQueue`] orders by a caller-supplied
//! priority and backs the cost-aware searches; its [`PriorityQueue::update`]
//! is a decrease-key keyed on value equality of the whole entry, so entries
//! for one state reached over different paths stay distinct. Duplicate
//! elimination is NOT this module's job; searches discard stale entries at
//! pop time against their visited set.

use std::collections::VecDeque;

/// LIFO frontier.
#[derive(Debug)]
#[cfg_attr(feature = "inspect", derive(Clone))]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    #[inline(always)]
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the most recently pushed item.
    #[inline(always)]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// FIFO frontier.
#[derive(Debug)]
#[cfg_attr(feature = "inspect", derive(Clone))]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    #[inline(always)]
    pub fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes and returns the least recently pushed item.
    #[inline(always)]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

const HEAP_ARITY: usize = 2usize;
#[inline(always)]
#[must_use]
fn up(i: usize) -> usize {
    crate::heap_primitives::index_parent::<HEAP_ARITY>(i)
}
#[inline(always)]
#[must_use]
fn down_first(i: usize) -> usize {
    crate::heap_primitives::index_first_children::<HEAP_ARITY>(i)
}
#[inline(always)]
#[must_use]
fn down_last(i: usize) -> usize {
    crate::heap_primitives::index_last_children::<HEAP_ARITY>(i)
}

#[derive(Debug)]
#[cfg_attr(feature = "inspect", derive(Clone))]
struct HeapEntry<T, P> {
    priority: P,
    /// Insertion stamp. Second ordering key, so equal priorities pop in
    /// insertion order. Kept across decrease-key.
    stamp: u64,
    item: T,
}

impl<T, P: Ord> PartialEq for HeapEntry<T, P> {
    /// `PartialEq` is forwarded to `(self.priority, self.stamp)`.
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.stamp == other.stamp
    }
}
impl<T, P: Ord> Eq for HeapEntry<T, P> {}
impl<T, P: Ord> PartialOrd for HeapEntry<T, P> {
    /// `PartialOrd` is forwarded to `(self.priority, self.stamp)`.
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl<T, P: Ord> Ord for HeapEntry<T, P> {
    /// `Ord` is forwarded to `(self.priority, self.stamp)`.
    #[inline(always)]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.stamp.cmp(&other.stamp))
    }
}

/// Min-priority frontier with stable ties and decrease-key by value.
///
/// `pop` returns the entry with the smallest priority; among equal
/// priorities the earliest-inserted wins, which keeps runs reproducible.
#[derive(Debug)]
#[cfg_attr(feature = "inspect", derive(Clone))]
pub struct PriorityQueue<T, P> {
    heap: Vec<HeapEntry<T, P>>,
    next_stamp: u64,
}

impl<T, P> PriorityQueue<T, P>
where
    P: Ord,
{
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: Vec::new(),
            next_stamp: 0,
        }
    }

    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn push(&mut self, item: T, priority: P) {
        let stamp = self.next_stamp;
        self.next_stamp += 1;
        self.heap.push(HeapEntry {
            priority,
            stamp,
            item,
        });
        self.sift_up(self.heap.len() - 1);
        self.verify_heap();
    }

    /// Removes and returns the item with the smallest `(priority, stamp)`.
    pub fn pop(&mut self) -> Option<T> {
        if self.heap.is_empty() {
            return None;
        }
        let top = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        self.verify_heap();
        Some(top.item)
    }

    /// Raises an entry. Returns its new index.
    fn sift_up(&mut self, index: usize) -> usize {
        let mut pos = index;
        while pos > 0 {
            let parent = up(pos);
            if self.heap[parent] <= self.heap[pos] {
                break;
            }
            self.heap.swap(parent, pos);
            pos = parent;
        }
        pos
    }

    /// Lowers an entry. Returns its new index.
    fn sift_down(&mut self, mut index: usize) -> usize {
        let len = self.heap.len();
        loop {
            let first = down_first(index);
            if first >= len {
                break;
            }
            let last = std::cmp::min(down_last(index), len - 1);
            let mut best = first;
            for child in (first + 1)..=last {
                if self.heap[child] < self.heap[best] {
                    best = child;
                }
            }
            if self.heap[index] <= self.heap[best] {
                break;
            }
            self.heap.swap(index, best);
            index = best;
        }
        index
    }

    #[inline(always)]
    #[cfg(not(feature = "verify"))]
    fn verify_heap(&self) {
        // All good... (hopefully)
    }
    #[cfg(feature = "verify")]
    fn verify_heap(&self) {
        for i in 1..self.heap.len() {
            let p = up(i);
            debug_assert!(
                self.heap[p] <= self.heap[i],
                "Entry[{p}] !<= child [{i}] in heap of len={}",
                self.heap.len(),
            );
        }
    }
}

impl<T, P> PriorityQueue<T, P>
where
    T: PartialEq,
    P: Ord,
{
    /// Decrease-key by value, or insert.
    ///
    /// Scans for an entry whose item equals `item`: found with a worse
    /// priority, the priority drops in place (the entry keeps its original
    /// stamp); found with an equal or better one, nothing happens; absent,
    /// this is a plain push. The scan is linear, which matches the small
    /// frontiers this crate targets; callers relying on heavy decrease-key
    /// traffic should reconsider their successor generation instead.
    pub fn update(&mut self, item: T, priority: P) {
        for i in 0..self.heap.len() {
            if self.heap[i].item == item {
                if priority < self.heap[i].priority {
                    self.heap[i].priority = priority;
                    self.sift_up(i);
                    self.verify_heap();
                }
                return;
            }
        }
        self.push(item, priority);
    }
}

impl<T, P> Default for PriorityQueue<T, P>
where
    P: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_is_lifo() {
        let mut s = Stack::new();
        assert!(s.is_empty());
        s.push(1);
        s.push(2);
        s.push(3);
        assert_eq!(s.len(), 3);
        assert_eq!(s.pop(), Some(3));
        assert_eq!(s.pop(), Some(2));
        s.push(4);
        assert_eq!(s.pop(), Some(4));
        assert_eq!(s.pop(), Some(1));
        assert_eq!(s.pop(), None);
    }

    #[test]
    fn queue_is_fifo() {
        let mut q = Queue::new();
        assert!(q.is_empty());
        q.push(1);
        q.push(2);
        q.push(3);
        assert_eq!(q.len(), 3);
        assert_eq!(q.pop(), Some(1));
        q.push(4);
        assert_eq!(q.pop(), Some(2));
        assert_eq!(q.pop(), Some(3));
        assert_eq!(q.pop(), Some(4));
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn priority_queue_pops_minimum() {
        let mut pq = PriorityQueue::new();
        pq.push("expensive", 9);
        pq.push("cheap", 1);
        pq.push("fair", 5);
        assert_eq!(pq.len(), 3);
        assert_eq!(pq.pop(), Some("cheap"));
        assert_eq!(pq.pop(), Some("fair"));
        assert_eq!(pq.pop(), Some("expensive"));
        assert_eq!(pq.pop(), None);
    }

    #[test]
    fn equal_priorities_pop_in_insertion_order() {
        let mut pq = PriorityQueue::new();
        pq.push("first", 2);
        pq.push("second", 2);
        pq.push("third", 2);
        assert_eq!(pq.pop(), Some("first"));
        assert_eq!(pq.pop(), Some("second"));
        assert_eq!(pq.pop(), Some("third"));
    }

    #[test]
    fn update_decreases_priority() {
        let mut pq = PriorityQueue::new();
        pq.push("stale", 9);
        pq.push("other", 4);
        pq.update("stale", 1);
        assert_eq!(pq.len(), 2);
        assert_eq!(pq.pop(), Some("stale"));
        assert_eq!(pq.pop(), Some("other"));
    }

    #[test]
    fn update_keeps_the_original_stamp() {
        let mut pq = PriorityQueue::new();
        pq.push("early", 9);
        pq.push("late", 3);
        // "early" now ties with "late" but was inserted first.
        pq.update("early", 3);
        assert_eq!(pq.pop(), Some("early"));
        assert_eq!(pq.pop(), Some("late"));
    }

    #[test]
    fn update_ignores_equal_or_worse_priorities() {
        let mut pq = PriorityQueue::new();
        pq.push("set", 2);
        pq.update("set", 2);
        pq.update("set", 7);
        assert_eq!(pq.len(), 1);
        assert_eq!(pq.pop(), Some("set"));
        assert_eq!(pq.pop(), None);
    }

    #[test]
    fn update_inserts_unknown_items() {
        let mut pq = PriorityQueue::new();
        pq.push("known", 5);
        pq.update("new", 3);
        assert_eq!(pq.len(), 2);
        assert_eq!(pq.pop(), Some("new"));
        assert_eq!(pq.pop(), Some("known"));
    }

    #[test]
    fn interleaved_pushes_and_pops() {
        let mut pq = PriorityQueue::new();
        for (item, priority) in [("a", 4), ("b", 2), ("c", 6), ("d", 2), ("e", 1)] {
            pq.push(item, priority);
        }
        assert_eq!(pq.pop(), Some("e"));
        assert_eq!(pq.pop(), Some("b"));
        pq.push("f", 3);
        assert_eq!(pq.pop(), Some("d"));
        assert_eq!(pq.pop(), Some("f"));
        assert_eq!(pq.pop(), Some("a"));
        assert_eq!(pq.pop(), Some("c"));
        assert!(pq.is_empty());
    }
}
