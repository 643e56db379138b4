//! Indexed binary min-heap over slab-stored entries.
//!
//! ## Architecture
//!
//! - **Slab**: owns every `PriorityEntry` created during one search
//! - **Heap**: `Vec<usize>` of slab keys ordered by [`PriorityEntry::by_priority`]
//! - **Position map**: slab key -> heap index, `None` once extracted
//! - **Node index**: global node id -> slab key, scoped to this queue
//!
//! The node index replaces any process-wide registry: it is created with the
//! queue and dropped with it, so nothing leaks between searches.
//!
//! ## Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | push | O(log n) |
//! | pop_min | O(log n) |
//! | relax (decrease-key) | O(log n) |
//! | contains | O(1) |

use slab::Slab;

use crate::error::{MatchingError, Result};
use crate::queue::PriorityEntry;

/// Min-priority queue with decrease-key, keyed by global node id.
#[derive(Debug)]
pub struct EntryQueue {
    /// Entry storage for this search
    entries: Slab<PriorityEntry>,

    /// Heap of slab keys
    heap: Vec<usize>,

    /// Slab key -> position in `heap` (None after extraction)
    position: Vec<Option<usize>>,

    /// Global node id -> slab key
    index: Vec<Option<usize>>,
}

impl EntryQueue {
    /// Create a queue for a graph with `node_count` global ids
    pub fn with_capacity(node_count: usize) -> Self {
        Self {
            entries: Slab::with_capacity(node_count),
            heap: Vec::with_capacity(node_count),
            position: Vec::with_capacity(node_count),
            index: vec![None; node_count],
        }
    }

    /// Number of entries still waiting in the heap
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Insert an entry and return its slab key
    ///
    /// # Errors
    ///
    /// `InconsistentMatch` if the node already has an entry in this search.
    ///
    /// # Example
    ///
    /// ```
    /// use bipartite_match::queue::{EntryQueue, PriorityEntry};
    ///
    /// let mut queue = EntryQueue::with_capacity(4);
    /// queue.push(PriorityEntry::new(3, 5.0, None)).unwrap();
    /// queue.push(PriorityEntry::new(2, 1.0, None)).unwrap();
    ///
    /// let key = queue.pop_min().unwrap();
    /// assert_eq!(queue.entry(key).unwrap().node_id, 2);
    /// ```
    pub fn push(&mut self, entry: PriorityEntry) -> Result<usize> {
        let node_id = entry.node_id;
        if node_id >= self.index.len() {
            self.index.resize(node_id + 1, None);
        }
        if self.index[node_id].is_some() {
            return Err(MatchingError::InconsistentMatch(format!(
                "node {} queued twice in one search",
                node_id
            )));
        }

        let key = self.entries.insert(entry);
        self.index[node_id] = Some(key);
        if self.position.len() <= key {
            self.position.resize(key + 1, None);
        }

        let pos = self.heap.len();
        self.heap.push(key);
        self.position[key] = Some(pos);
        self.sift_up(pos);

        Ok(key)
    }

    /// Remove the minimum entry and return its slab key
    ///
    /// The entry stays in the slab so predecessor links remain valid.
    pub fn pop_min(&mut self) -> Option<usize> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.swap(0, last);
        let key = self.heap.pop()?;
        self.position[key] = None;

        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(key)
    }

    /// Decrease-key: lower a pending node's priority if `candidate` is strictly better
    ///
    /// Nodes already extracted are final and never updated.
    ///
    /// # Returns
    ///
    /// `true` if the entry changed
    ///
    /// # Errors
    ///
    /// `MissingEntry` if the node was never pushed in this search.
    pub fn relax(&mut self, node_id: usize, candidate: f64, predecessor: usize) -> Result<bool> {
        let key = self.key_of(node_id).ok_or(MatchingError::MissingEntry(node_id))?;
        let Some(pos) = self.position[key] else {
            return Ok(false);
        };

        if !self.entries[key].relax(candidate, predecessor) {
            return Ok(false);
        }
        self.sift_up(pos);
        Ok(true)
    }

    /// Slab key for a node's entry, pending or extracted
    #[inline]
    pub fn key_of(&self, node_id: usize) -> Option<usize> {
        self.index.get(node_id).copied().flatten()
    }

    /// True if the node has an entry still waiting in the heap
    #[inline]
    pub fn contains(&self, node_id: usize) -> bool {
        self.key_of(node_id)
            .and_then(|key| self.position[key])
            .is_some()
    }

    /// Entry by slab key
    #[inline]
    pub fn entry(&self, key: usize) -> Option<&PriorityEntry> {
        self.entries.get(key)
    }

    /// Entry by global node id
    #[inline]
    pub fn entry_for(&self, node_id: usize) -> Option<&PriorityEntry> {
        self.key_of(node_id).and_then(|key| self.entries.get(key))
    }

    /// Node ids from `key` back along predecessor links
    ///
    /// The first element is the node at `key`; the last has no predecessor.
    ///
    /// # Errors
    ///
    /// `MissingEntry` for a dangling link, `InconsistentMatch` for a cycle.
    pub fn path_to(&self, key: usize) -> Result<Vec<usize>> {
        let mut path = Vec::new();
        let mut cursor = Some(key);

        while let Some(current) = cursor {
            let entry = self
                .entries
                .get(current)
                .ok_or(MatchingError::MissingEntry(current))?;
            if path.len() > self.entries.len() {
                return Err(MatchingError::InconsistentMatch(
                    "predecessor links form a cycle".to_string(),
                ));
            }
            path.push(entry.node_id);
            cursor = entry.predecessor;
        }

        Ok(path)
    }

    // ========================================================================
    // Heap maintenance
    // ========================================================================

    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        let lhs = &self.entries[self.heap[a]];
        let rhs = &self.entries[self.heap[b]];
        lhs.by_priority(rhs).is_lt()
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position[self.heap[a]] = Some(a);
        self.position[self.heap[b]] = Some(b);
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
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut smallest = pos;

            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(queue: &mut EntryQueue) -> Vec<usize> {
        let mut order = Vec::new();
        while let Some(key) = queue.pop_min() {
            order.push(queue.entry(key).unwrap().node_id);
        }
        order
    }

    #[test]
    fn test_queue_new() {
        let mut queue = EntryQueue::with_capacity(6);

        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert!(queue.pop_min().is_none());
        assert!(!queue.contains(0));
    }

    #[test]
    fn test_pop_in_priority_order() {
        let mut queue = EntryQueue::with_capacity(6);

        queue.push(PriorityEntry::new(0, 6.0, None)).unwrap();
        queue.push(PriorityEntry::new(1, 2.0, None)).unwrap();
        queue.push(PriorityEntry::new(2, 10.0, None)).unwrap();
        queue.push(PriorityEntry::new(3, 4.0, None)).unwrap();
        queue.push(PriorityEntry::unreached(4)).unwrap();
        queue.push(PriorityEntry::new(5, 15.0, None)).unwrap();

        assert_eq!(queue.len(), 6);
        assert_eq!(drain(&mut queue), vec![1, 3, 0, 2, 5, 4]);
    }

    #[test]
    fn test_duplicate_push_rejected() {
        let mut queue = EntryQueue::with_capacity(2);

        queue.push(PriorityEntry::new(1, 2.0, None)).unwrap();
        let result = queue.push(PriorityEntry::new(1, 3.0, None));

        assert!(matches!(result, Err(MatchingError::InconsistentMatch(_))));
    }

    #[test]
    fn test_relax_reorders() {
        let mut queue = EntryQueue::with_capacity(4);

        let source = queue.push(PriorityEntry::source(0)).unwrap();
        queue.push(PriorityEntry::new(1, 5.0, None)).unwrap();
        queue.push(PriorityEntry::unreached(2)).unwrap();
        queue.push(PriorityEntry::new(3, 7.0, None)).unwrap();

        assert_eq!(queue.pop_min(), Some(source));

        assert!(queue.relax(2, 1.0, source).unwrap());
        assert!(!queue.relax(3, 8.0, source).unwrap());

        let key = queue.pop_min().unwrap();
        let entry = queue.entry(key).unwrap();
        assert_eq!(entry.node_id, 2);
        assert_eq!(entry.priority, 1.0);
        assert_eq!(entry.predecessor, Some(source));

        assert_eq!(drain(&mut queue), vec![1, 3]);
    }

    #[test]
    fn test_extracted_entries_are_final() {
        let mut queue = EntryQueue::with_capacity(2);

        queue.push(PriorityEntry::new(0, 3.0, None)).unwrap();
        let other = queue.push(PriorityEntry::new(1, 9.0, None)).unwrap();
        queue.pop_min();

        assert!(!queue.contains(0));
        assert!(queue.contains(1));
        assert!(!queue.relax(0, -100.0, other).unwrap());
        assert_eq!(queue.entry_for(0).unwrap().priority, 3.0);
    }

    #[test]
    fn test_relax_unknown_node() {
        let mut queue = EntryQueue::with_capacity(3);

        let result = queue.relax(2, 1.0, 0);
        assert_eq!(result, Err(MatchingError::MissingEntry(2)));
    }

    #[test]
    fn test_path_to() {
        let mut queue = EntryQueue::with_capacity(6);

        let left = queue.push(PriorityEntry::source(2)).unwrap();
        let right = queue.push(PriorityEntry::new(4, 2.0, Some(left))).unwrap();
        let matched = queue.push(PriorityEntry::new(0, 2.0, Some(right))).unwrap();
        let end = queue.push(PriorityEntry::new(5, 3.0, Some(matched))).unwrap();

        assert_eq!(queue.path_to(end).unwrap(), vec![5, 0, 4, 2]);
        assert_eq!(queue.path_to(left).unwrap(), vec![2]);
    }

    #[test]
    fn test_key_of_survives_extraction() {
        let mut queue = EntryQueue::with_capacity(2);

        let key = queue.push(PriorityEntry::new(1, 1.0, None)).unwrap();
        queue.pop_min();

        assert_eq!(queue.key_of(1), Some(key));
        assert!(queue.key_of(0).is_none());
    }
}
