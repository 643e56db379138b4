//! Engine configuration.
//!
//! All limits are off by default except invariant verification, which follows
//! `debug_assertions`.

use std::time::Duration;

/// Tunables for one [`MatchingEngine`](crate::engine::MatchingEngine).
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use bipartite_match::engine::MatchingConfig;
///
/// let config = MatchingConfig::default()
///     .with_max_augmentations(100)
///     .with_time_budget(Duration::from_secs(5))
///     .with_verify_invariants(true);
///
/// assert_eq!(config.max_augmentations, Some(100));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MatchingConfig {
    /// Stop with `IterationLimit` after this many augmentations
    pub max_augmentations: Option<usize>,

    /// Stop with `TimeBudgetExceeded` once `find_match` runs this long
    pub time_budget: Option<Duration>,

    /// Check the mutual-inverse invariant after every augmentation
    pub verify_invariants: bool,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            max_augmentations: None,
            time_budget: None,
            verify_invariants: cfg!(debug_assertions),
        }
    }
}

impl MatchingConfig {
    pub fn with_max_augmentations(mut self, limit: usize) -> Self {
        self.max_augmentations = Some(limit);
        self
    }

    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }

    pub fn with_verify_invariants(mut self, verify: bool) -> Self {
        self.verify_invariants = verify;
        self
    }
}
