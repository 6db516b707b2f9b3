use crate::{Error, Result};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A min-priority queue with O(log n) decrease-key.
///
/// A binary heap stored as an array, augmented with an item-to-index map
/// that mirrors every swap, so an item's priority can be lowered in place
/// without an O(n) scan. This is the frontier structure Dijkstra's
/// algorithm relies on: priorities of present items only ever decrease,
/// and an item never re-enters after extraction.
///
/// Contract violations are rejected rather than left to corrupt the heap:
/// inserting a duplicate item, extracting from an empty queue, decreasing
/// an absent item, or raising a priority all return an error. Priorities
/// must form a total order over the values actually used (NaN priorities
/// are a caller bug).
#[derive(Debug, Clone)]
pub struct IndexedHeap<V, P>
where
    V: Copy + Eq + Hash + Debug,
    P: PartialOrd + Copy + Debug,
{
    /// Heap array of (priority, item), min at index 0
    heap: Vec<(P, V)>,

    /// Maps each item to its current index in the heap array.
    /// Invariant: positions[heap[i].1] == i for every i.
    positions: HashMap<V, usize>,
}

impl<V, P> IndexedHeap<V, P>
where
    V: Copy + Eq + Hash + Debug,
    P: PartialOrd + Copy + Debug,
{
    /// Creates a new empty priority queue.
    pub fn new() -> Self {
        IndexedHeap {
            heap: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Returns the number of items in the queue.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns true if `item` is currently in the queue.
    pub fn contains(&self, item: &V) -> bool {
        self.positions.contains_key(item)
    }

    /// Returns the current priority of `item`, if it is in the queue.
    pub fn priority(&self, item: &V) -> Option<P> {
        self.positions.get(item).map(|&i| self.heap[i].0)
    }

    /// Inserts `item` with the given priority in O(log n).
    /// Returns [`Error::DuplicateItem`] if the item is already present.
    pub fn insert(&mut self, item: V, priority: P) -> Result<()> {
        if self.positions.contains_key(&item) {
            return Err(Error::DuplicateItem);
        }
        let index = self.heap.len();
        self.heap.push((priority, item));
        self.positions.insert(item, index);
        self.sift_up(index);
        Ok(())
    }

    /// Removes and returns the item with minimum priority in O(log n).
    /// Returns [`Error::EmptyQueue`] if no items remain.
    pub fn extract_min(&mut self) -> Result<(V, P)> {
        if self.heap.is_empty() {
            return Err(Error::EmptyQueue);
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let (priority, item) = self.heap.pop().expect("heap is non-empty");
        self.positions.remove(&item);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok((item, priority))
    }

    /// Lowers the priority of an item already in the queue in O(log n).
    /// Returns [`Error::AbsentItem`] if the item is not present and
    /// [`Error::PriorityIncrease`] if `new_priority` exceeds the item's
    /// current priority; either would corrupt the heap if ignored.
    pub fn decrease_priority(&mut self, item: &V, new_priority: P) -> Result<()> {
        let index = *self.positions.get(item).ok_or(Error::AbsentItem)?;
        if new_priority > self.heap[index].0 {
            return Err(Error::PriorityIncrease);
        }
        self.heap[index].0 = new_priority;
        self.sift_up(index);
        Ok(())
    }

    /// Swaps two heap slots, keeping the position map in sync.
    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions.insert(self.heap[a].1, a);
        self.positions.insert(self.heap[b].1, b);
    }

    fn less(&self, a: usize, b: usize) -> bool {
        self.heap[a]
            .0
            .partial_cmp(&self.heap[b].0)
            .expect("priorities must be totally ordered")
            .is_lt()
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.less(index, parent) {
                break;
            }
            self.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;
            if left < self.heap.len() && self.less(left, smallest) {
                smallest = left;
            }
            if right < self.heap.len() && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<V, P> Default for IndexedHeap<V, P>
where
    V: Copy + Eq + Hash + Debug,
    P: PartialOrd + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
