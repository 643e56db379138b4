//! Minimum-weight perfect matching engine.
//!
//! ## Algorithm
//!
//! Starting from an empty matching, the engine repeatedly:
//!
//! 1. Finds a shortest augmenting path (see `search.rs`)
//! 2. Flips matched/unmatched edges along it, growing the matching by one
//! 3. Rebuilds `right_to_left` by inverting `left_to_right`
//!
//! until no augmenting path remains. For an n×n matrix that takes exactly n
//! augmentations.
//!
//! ## Potentials
//!
//! Each node carries a potential; relaxation uses reduced costs
//! `cost[i][j] + pL[i] - pR[j]`, which stay non-negative on every edge the
//! search can traverse. At the end `sum(pR) - sum(pL)` equals the total cost
//! of the matching.

use std::time::Instant;

use log::{debug, info, warn};

use crate::engine::MatchingConfig;
use crate::error::{MatchingError, Result};
use crate::types::{Category, CostMatrix, MatchReceipt, NodeSpace};

/// Solves one minimum-weight perfect bipartite matching instance.
///
/// # Example
///
/// ```
/// use bipartite_match::engine::MatchingEngine;
///
/// let mut engine = MatchingEngine::from_rows(&[
///     [3.0, 5.0, 6.0],
///     [5.0, 8.0, 6.0],
///     [84.0, 2.0, 10.0],
/// ]).unwrap();
///
/// assert_eq!(engine.find_match().unwrap(), vec![0, 2, 1]);
/// assert_eq!(engine.total_cost().unwrap(), 11.0);
/// ```
#[derive(Debug, Clone)]
pub struct MatchingEngine {
    /// Read-only after construction
    pub(super) matrix: CostMatrix,

    pub(super) space: NodeSpace,

    pub(super) config: MatchingConfig,

    /// Left local id -> matched right local id
    pub(super) left_to_right: Vec<Option<usize>>,

    /// Right local id -> matched left local id
    pub(super) right_to_left: Vec<Option<usize>>,

    /// Potentials for left nodes (0 while unmatched)
    pub(super) left_potential: Vec<f64>,

    /// Potentials for right nodes (start at the column minimum)
    pub(super) right_potential: Vec<f64>,

    /// Augmenting paths applied so far
    augmentations: usize,

    /// Populated once `find_match` completes
    solution: Option<Vec<usize>>,
}

impl MatchingEngine {
    /// Create an engine with the default configuration
    pub fn new(matrix: CostMatrix) -> Self {
        Self::with_config(matrix, MatchingConfig::default())
    }

    /// Create an engine with an explicit configuration
    pub fn with_config(matrix: CostMatrix, config: MatchingConfig) -> Self {
        let n = matrix.size();
        let right_potential = (0..n).map(|col| matrix.column_min(col)).collect();

        Self {
            space: NodeSpace::new(n),
            config,
            left_to_right: vec![None; n],
            right_to_left: vec![None; n],
            left_potential: vec![0.0; n],
            right_potential,
            augmentations: 0,
            solution: None,
            matrix,
        }
    }

    /// Validate rows and create an engine
    ///
    /// # Errors
    ///
    /// `NotSquare` or `NonFiniteCost` from [`CostMatrix::from_rows`].
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        Ok(Self::new(CostMatrix::from_rows(rows)?))
    }

    // ========================================================================
    // Solving
    // ========================================================================

    /// Compute the minimum-weight perfect matching
    ///
    /// # Returns
    ///
    /// `solution[i]` is the right local id matched to left local id `i`.
    /// Calling again after success returns the same solution without
    /// recomputing.
    ///
    /// # Errors
    ///
    /// Invariant violations, or a configured guard tripping.
    pub fn find_match(&mut self) -> Result<Vec<usize>> {
        if let Some(solution) = &self.solution {
            return Ok(solution.clone());
        }

        let started = Instant::now();
        while self.augment_once()? {
            if let Some(budget) = self.config.time_budget {
                if started.elapsed() > budget {
                    warn!(
                        "time budget {:?} exceeded after {} augmentations",
                        budget, self.augmentations
                    );
                    return Err(MatchingError::TimeBudgetExceeded { budget });
                }
            }
        }

        let solution = self
            .left_to_right
            .iter()
            .enumerate()
            .map(|(left, right)| {
                right.ok_or_else(|| {
                    MatchingError::InconsistentMatch(format!(
                        "left {} unmatched after the search was exhausted",
                        left
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        info!(
            "perfect matching of size {} found in {} augmentations, total cost {}",
            solution.len(),
            self.augmentations,
            self.matrix.assignment_cost(&solution)
        );

        self.solution = Some(solution.clone());
        Ok(solution)
    }

    /// Find and apply one shortest augmenting path
    ///
    /// # Returns
    ///
    /// `false` once no augmenting path exists (the matching is perfect).
    pub fn augment_once(&mut self) -> Result<bool> {
        if let Some(limit) = self.config.max_augmentations {
            if self.augmentations >= limit && !self.is_perfect() {
                warn!("augmentation limit {} reached", limit);
                return Err(MatchingError::IterationLimit { limit });
            }
        }

        let path = self.find_min_augmenting_path()?;
        if path.is_empty() {
            return Ok(false);
        }

        if self.augmentations >= self.size() {
            return Err(MatchingError::InconsistentMatch(format!(
                "augmenting path found after {} augmentations on a size {} problem",
                self.augmentations,
                self.size()
            )));
        }

        let before = self.matched_count();
        self.apply_path(&path)?;
        self.rebuild_right_to_left()?;
        self.augmentations += 1;

        if self.config.verify_invariants {
            self.verify_match_state(before + 1)?;
        }

        debug!(
            "augmentation {}: path of {} nodes, {}/{} matched",
            self.augmentations,
            path.len(),
            before + 1,
            self.size()
        );
        Ok(true)
    }

    /// Apply an augmenting path to `left_to_right`
    ///
    /// `path` runs from the unmatched right endpoint back to the unmatched
    /// left endpoint. Walking it from the left end, each right node becomes
    /// matched to the left node before it and each interior left node loses
    /// its old match, i.e. new match = match XOR path.
    ///
    /// The flips go into a scratch copy that replaces `left_to_right` only once
    /// the whole path has checked out, so a rejected path changes nothing.
    fn apply_path(&mut self, path: &[usize]) -> Result<()> {
        let mut next = self.left_to_right.clone();
        let mut expected = Category::Left;
        let mut prev: Option<usize> = None;

        for (position, &node) in path.iter().rev().enumerate() {
            if self.space.category(node) != expected {
                return Err(MatchingError::PathCorrupted { position, node });
            }
            let local = self.space.local_id(node);

            match (expected, prev) {
                (Category::Left, None) => {
                    if let Some(right) = next[local] {
                        return Err(MatchingError::InconsistentMatch(format!(
                            "path starts at left {} which is already matched to right {}",
                            local, right
                        )));
                    }
                }
                (Category::Left, Some(prev_right)) => {
                    let prev_local = self.space.local_id(prev_right);
                    if self.left_to_right[local] != Some(prev_local) {
                        return Err(MatchingError::InconsistentMatch(format!(
                            "left {} reached over right {} but matched to {:?}",
                            local, prev_local, self.left_to_right[local]
                        )));
                    }
                    next[local] = None;
                }
                (Category::Right, Some(prev_left)) => {
                    next[self.space.local_id(prev_left)] = Some(local);
                }
                (Category::Right, None) => {
                    return Err(MatchingError::PathCorrupted { position, node });
                }
            }

            prev = Some(node);
            expected = expected.opposite();
        }

        // A complete path ends on a right node, flipping `expected` back to Left
        match (expected, path.first()) {
            (Category::Left, Some(_)) => {
                self.left_to_right = next;
                Ok(())
            }
            (_, first) => Err(MatchingError::PathCorrupted {
                position: path.len().saturating_sub(1),
                node: first.copied().unwrap_or_default(),
            }),
        }
    }

    /// Recompute `right_to_left` as the inverse of `left_to_right`
    fn rebuild_right_to_left(&mut self) -> Result<()> {
        self.right_to_left.iter_mut().for_each(|slot| *slot = None);

        for (left, right) in self.left_to_right.iter().enumerate() {
            let Some(right) = *right else { continue };
            if let Some(other) = self.right_to_left[right] {
                return Err(MatchingError::InconsistentMatch(format!(
                    "right {} matched to both left {} and left {}",
                    right, other, left
                )));
            }
            self.right_to_left[right] = Some(left);
        }
        Ok(())
    }

    /// Check the mutual-inverse invariant and the matched pair count
    fn verify_match_state(&self, expected_pairs: usize) -> Result<()> {
        for (left, right) in self.left_to_right.iter().enumerate() {
            if let Some(right) = *right {
                if self.right_to_left[right] != Some(left) {
                    return Err(MatchingError::InconsistentMatch(format!(
                        "left {} -> right {} but right {} -> {:?}",
                        left, right, right, self.right_to_left[right]
                    )));
                }
            }
        }
        for (right, left) in self.right_to_left.iter().enumerate() {
            if let Some(left) = *left {
                if self.left_to_right[left] != Some(right) {
                    return Err(MatchingError::InconsistentMatch(format!(
                        "right {} -> left {} but left {} -> {:?}",
                        right, left, left, self.left_to_right[left]
                    )));
                }
            }
        }

        let pairs = self.matched_count();
        if pairs != expected_pairs {
            return Err(MatchingError::InconsistentMatch(format!(
                "expected {} matched pairs, found {}",
                expected_pairs, pairs
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Read-back
    // ========================================================================

    /// Nodes per side
    #[inline]
    pub fn size(&self) -> usize {
        self.matrix.size()
    }

    #[inline]
    pub fn matrix(&self) -> &CostMatrix {
        &self.matrix
    }

    #[inline]
    pub fn space(&self) -> NodeSpace {
        self.space
    }

    #[inline]
    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// The solution, once `find_match` has completed
    #[inline]
    pub fn solution(&self) -> Option<&[usize]> {
        self.solution.as_deref()
    }

    #[inline]
    pub fn left_to_right(&self) -> &[Option<usize>] {
        &self.left_to_right
    }

    #[inline]
    pub fn right_to_left(&self) -> &[Option<usize>] {
        &self.right_to_left
    }

    /// Number of matched pairs
    pub fn matched_count(&self) -> usize {
        self.left_to_right.iter().filter(|m| m.is_some()).count()
    }

    #[inline]
    pub fn augmentations(&self) -> usize {
        self.augmentations
    }

    /// True once every left node is matched
    pub fn is_perfect(&self) -> bool {
        self.matched_count() == self.size()
    }

    /// Sum of `cost[i][solution[i]]`
    ///
    /// # Errors
    ///
    /// `NotSolved` before `find_match` has completed.
    pub fn total_cost(&self) -> Result<f64> {
        let solution = self.solution.as_deref().ok_or(MatchingError::NotSolved)?;
        Ok(self.matrix.assignment_cost(solution))
    }

    /// `sum(pR) - sum(pL)`; equals `total_cost` for a perfect matching
    pub fn dual_objective(&self) -> f64 {
        self.right_potential.iter().sum::<f64>() - self.left_potential.iter().sum::<f64>()
    }

    /// Receipt for the solved instance
    ///
    /// # Errors
    ///
    /// `NotSolved` before `find_match` has completed.
    pub fn receipt(&self) -> Result<MatchReceipt> {
        let solution = self.solution.as_deref().ok_or(MatchingError::NotSolved)?;
        Ok(MatchReceipt::from_assignment(
            solution,
            self.matrix.assignment_cost(solution),
            self.augmentations,
        ))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
