//! Frontier containers for graph search.
//!
//! Depth-first and breadth-first search only differ in which end of the
//! frontier they take from, so both go through the [`Frontier`] trait. A*
//! needs to lower the priority of an entry that is already queued, which a
//! plain `BinaryHeap` can't do, hence [`PriorityQueue`].

use crate::interface::Cost;

use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::collections::VecDeque;
use std::hash::Hash;

/// A container of nodes waiting to be expanded.
pub trait Frontier<T>: Default {
    fn push(&mut self, item: T);
    fn pop(&mut self) -> Option<T>;
    fn is_empty(&self) -> bool;
}

/// Last in, first out.
#[derive(Debug)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack { items: Vec::new() }
    }
}

impl<T> Frontier<T> for Stack<T> {
    fn push(&mut self, item: T) {
        self.items.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// First in, first out.
#[derive(Debug)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Queue { items: VecDeque::new() }
    }
}

impl<T> Frontier<T> for Queue<T> {
    fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug)]
struct Entry<T> {
    item: T,
    priority: Cost,
    // Insertion order, used to break ties between equal priorities.
    seq: u64,
}

impl<T> Entry<T> {
    fn cmp_key(&self, other: &Self) -> Ordering {
        self.priority.total_cmp(&other.priority).then(self.seq.cmp(&other.seq))
    }
}

/// A binary min-heap that also knows where each item lives, so an item's
/// priority can be lowered in place.
///
/// Items with equal priority come out in the order they were first pushed.
/// Lowering an item's priority doesn't change its place in that order.
#[derive(Debug)]
pub struct PriorityQueue<T: Hash + Eq + Clone> {
    heap: Vec<Entry<T>>,
    position: FxHashMap<T, usize>,
    next_seq: u64,
}

impl<T: Hash + Eq + Clone> Default for PriorityQueue<T> {
    fn default() -> Self {
        PriorityQueue { heap: Vec::new(), position: FxHashMap::default(), next_seq: 0 }
    }
}

impl<T: Hash + Eq + Clone> PriorityQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.position.contains_key(item)
    }

    #[cfg(test)]
    fn priority(&self, item: &T) -> Option<Cost> {
        self.position.get(item).map(|&i| self.heap[i].priority)
    }

    /// Queue `item`. If it's already queued this is the same as
    /// [`decrease_priority`](Self::decrease_priority).
    pub fn push(&mut self, item: T, priority: Cost) {
        if self.contains(&item) {
            self.decrease_priority(&item, priority);
            return;
        }
        let pos = self.heap.len();
        self.position.insert(item.clone(), pos);
        self.heap.push(Entry { item, priority, seq: self.next_seq });
        self.next_seq += 1;
        self.sift_up(pos);
    }

    /// Lower the priority of a queued item. Returns whether anything changed:
    /// absent items and priorities that aren't strictly lower are ignored.
    pub fn decrease_priority(&mut self, item: &T, priority: Cost) -> bool {
        let pos = match self.position.get(item) {
            Some(&pos) => pos,
            None => return false,
        };
        if priority >= self.heap[pos].priority {
            return false;
        }
        self.heap[pos].priority = priority;
        self.sift_up(pos);
        true
    }

    /// Remove and return the item with the lowest priority.
    pub fn pop(&mut self) -> Option<(T, Cost)> {
        let last = self.heap.len().checked_sub(1)?;
        self.swap(0, last);
        let entry = self.heap.pop()?;
        self.position.remove(&entry.item);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((entry.item, entry.priority))
    }

    fn less(&self, a: usize, b: usize) -> bool {
        self.heap[a].cmp_key(&self.heap[b]) == Ordering::Less
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        for i in [a, b] {
            if let Some(pos) = self.position.get_mut(&self.heap[i].item) {
                *pos = i;
            }
        }
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.less(pos, parent) {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let n = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut smallest = pos;
            if left < n && self.less(left, smallest) {
                smallest = left;
            }
            if right < n && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == pos {
                break;
            }
            self.swap(pos, smallest);
            pos = smallest;
        }
    }
}
