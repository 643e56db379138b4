//! Priority entry for one node in a shortest-path search.
//!
//! ## Design
//!
//! `PriorityEntry` carries a node's tentative distance and a back-link to the
//! entry it was reached from. Entries live in a per-search slab, so the
//! back-link is a slab key (`usize`), not a reference.
//!
//! ## Comparison Contracts
//!
//! Entries have two unrelated notions of comparison, kept as separate methods:
//!
//! - [`PriorityEntry::by_priority`]: heap order (distance, then node id)
//! - [`PriorityEntry::same_node`]: identity (node id only)
//!
//! Neither `PartialEq` nor `Ord` is implemented, so one can't be used where the
//! other was meant.

use std::cmp::Ordering;

/// Search state for a single graph node.
///
/// ## Memory Layout
///
/// ```text
/// PriorityEntry {
///     node_id: usize (global id)
///     priority: f64 (tentative reduced distance)
///     predecessor: Option<usize> (slab key)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct PriorityEntry {
    /// Global node id
    pub node_id: usize,

    /// Tentative distance from the virtual source
    /// 0 for unmatched left nodes, +inf until relaxed otherwise
    pub priority: f64,

    /// Slab key of the entry reached just before this one
    /// None for unmatched left nodes and unreached nodes
    pub predecessor: Option<usize>,
}

impl PriorityEntry {
    /// Create a new entry
    ///
    /// # Example
    ///
    /// ```
    /// use bipartite_match::queue::PriorityEntry;
    ///
    /// let entry = PriorityEntry::new(4, 2.0, None);
    /// assert_eq!(entry.node_id, 4);
    /// assert!(entry.is_reached());
    /// ```
    #[inline]
    pub fn new(node_id: usize, priority: f64, predecessor: Option<usize>) -> Self {
        Self {
            node_id,
            priority,
            predecessor,
        }
    }

    /// A synthetic source entry (priority 0, no predecessor)
    #[inline]
    pub fn source(node_id: usize) -> Self {
        Self::new(node_id, 0.0, None)
    }

    /// An entry not yet reached by the search
    #[inline]
    pub fn unreached(node_id: usize) -> Self {
        Self::new(node_id, f64::INFINITY, None)
    }

    /// Heap order: lower priority first, ties broken by lower node id
    #[inline]
    pub fn by_priority(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.node_id.cmp(&other.node_id))
    }

    /// Identity: same graph node, regardless of priority
    #[inline]
    pub fn same_node(&self, other: &Self) -> bool {
        self.node_id == other.node_id
    }

    /// True once the entry carries a finite distance
    #[inline]
    pub fn is_reached(&self) -> bool {
        self.priority.is_finite()
    }

    /// Accept `candidate` if it strictly improves the current priority
    ///
    /// # Returns
    ///
    /// `true` if the entry was updated
    #[inline]
    pub fn relax(&mut self, candidate: f64, predecessor: usize) -> bool {
        if candidate < self.priority {
            self.priority = candidate;
            self.predecessor = Some(predecessor);
            true
        } else {
            false
        }
    }
}
