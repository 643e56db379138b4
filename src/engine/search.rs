//! Shortest augmenting-path search.
//!
//! ## Graph
//!
//! The search runs over the residual graph of the current matching:
//!
//! - unmatched left -> every right node, weight `cost[l][r]`
//! - matched left -> every pending right node except its partner, same weight
//! - matched right -> its partner left node, weight `-cost[l][r]`
//!
//! All unmatched left nodes act as one virtual source (priority 0); any
//! unmatched right node is a valid sink.
//!
//! ## Reduced Costs
//!
//! Edge weights are shifted by the node potentials so every traversable edge
//! is non-negative, which makes plain Dijkstra extraction exact even though
//! matched edges carry negative raw weight. After a successful search each
//! potential grows by `min(d(v), d_sink)`, keeping all reduced costs
//! non-negative for the next search.

use log::trace;

use crate::engine::MatchingEngine;
use crate::error::{MatchingError, Result};
use crate::queue::{EntryQueue, PriorityEntry};
use crate::types::Category;

impl MatchingEngine {
    /// Reduced cost of the unmatched edge `left -> right`
    #[inline]
    pub(super) fn reduced_cost(&self, left: usize, right: usize) -> f64 {
        self.matrix.cost(left, right) + self.left_potential[left] - self.right_potential[right]
    }

    /// Reduced cost of the matched edge traversed backwards, `right -> left`
    #[inline]
    pub(super) fn reduced_back_cost(&self, left: usize, right: usize) -> f64 {
        -self.matrix.cost(left, right) + self.right_potential[right] - self.left_potential[left]
    }

    /// Find a minimum-cost augmenting path for the current matching
    ///
    /// # Returns
    ///
    /// Global node ids from the unmatched right endpoint back to the unmatched
    /// left endpoint, or an empty path when none exists (including when every
    /// left node is already matched).
    pub(super) fn find_min_augmenting_path(&mut self) -> Result<Vec<usize>> {
        let n = self.size();
        let unmatched_left: Vec<usize> = (0..n)
            .filter(|&left| self.left_to_right[left].is_none())
            .collect();
        if unmatched_left.is_empty() {
            return Ok(Vec::new());
        }

        let mut queue = self.seed_queue(&unmatched_left)?;

        while let Some(key) = queue.pop_min() {
            let entry = queue
                .entry(key)
                .cloned()
                .ok_or(MatchingError::MissingEntry(key))?;
            trace!("extract node {} at {}", entry.node_id, entry.priority);

            if !entry.is_reached() {
                // Everything left in the queue is unreachable too
                break;
            }

            let local = self.space.local_id(entry.node_id);
            match self.space.category(entry.node_id) {
                Category::Left => {
                    let partner = self.left_to_right[local];
                    for (right, right_id) in self.space.right_ids().enumerate() {
                        if partner == Some(right) || !queue.contains(right_id) {
                            continue;
                        }
                        let candidate = entry.priority + self.reduced_cost(local, right);
                        queue.relax(right_id, candidate, key)?;
                    }
                }
                Category::Right => {
                    let Some(left) = self.right_to_left[local] else {
                        let path = queue.path_to(key)?;
                        self.update_potentials(&queue, entry.priority)?;
                        return Ok(path);
                    };
                    let left_id = self.space.global_id(left, Category::Left);
                    if queue.contains(left_id) {
                        let candidate = entry.priority + self.reduced_back_cost(left, local);
                        queue.relax(left_id, candidate, key)?;
                    }
                }
            }
        }

        Ok(Vec::new())
    }

    /// Build the queue for one search
    ///
    /// Unmatched left nodes enter at priority 0, matched left nodes at +inf.
    /// Each right node enters with its best direct distance from any unmatched
    /// left node, with that node as predecessor.
    fn seed_queue(&self, unmatched_left: &[usize]) -> Result<EntryQueue> {
        let n = self.size();
        let mut queue = EntryQueue::with_capacity(self.space.node_count());
        let mut source_keys = vec![None; n];

        for left in 0..n {
            let node_id = self.space.global_id(left, Category::Left);
            if self.left_to_right[left].is_none() {
                source_keys[left] = Some(queue.push(PriorityEntry::source(node_id))?);
            } else {
                queue.push(PriorityEntry::unreached(node_id))?;
            }
        }

        for (right, node_id) in self.space.right_ids().enumerate() {
            let mut best = f64::INFINITY;
            let mut via = None;
            for &left in unmatched_left {
                let candidate = self.reduced_cost(left, right);
                if candidate < best {
                    best = candidate;
                    via = source_keys[left];
                }
            }
            queue.push(PriorityEntry::new(node_id, best, via))?;
        }

        Ok(queue)
    }

    /// Raise every potential by `min(d(v), reach)` after a successful search
    fn update_potentials(&mut self, queue: &EntryQueue, reach: f64) -> Result<()> {
        for left in 0..self.size() {
            let node_id = self.space.global_id(left, Category::Left);
            let entry = queue
                .entry_for(node_id)
                .ok_or(MatchingError::MissingEntry(node_id))?;
            self.left_potential[left] += entry.priority.min(reach);
        }
        for (right, node_id) in self.space.right_ids().enumerate() {
            let entry = queue
                .entry_for(node_id)
                .ok_or(MatchingError::MissingEntry(node_id))?;
            self.right_potential[right] += entry.priority.min(reach);
        }
        Ok(())
    }
}
