//! Error types for the matching engine.
//!
//! Errors fall into two families:
//!
//! - **Input errors** (`NotSquare`, `NonFiniteCost`, `CostOutOfRange`): raised
//!   at construction, recoverable by supplying a valid matrix.
//! - **Invariant errors** (`PathCorrupted`, `InconsistentMatch`, `MissingEntry`):
//!   indicate a bug in the engine and are never retried.
//!
//! `IterationLimit` and `TimeBudgetExceeded` come from the optional guards in
//! [`MatchingConfig`](crate::engine::MatchingConfig).
//!
//! Running out of augmenting paths is not an error; the search reports it as
//! an empty path.

use std::time::Duration;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MatchingError>;

/// Everything that can go wrong while building or solving a matching problem.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchingError {
    /// A row length differs from the number of rows.
    #[error("cost matrix is not square: {rows} rows but row {row} has {len} columns")]
    NotSquare { rows: usize, row: usize, len: usize },

    /// A cell holds NaN or an infinity.
    #[error("cost matrix entry ({row}, {col}) is not finite")]
    NonFiniteCost { row: usize, col: usize },

    /// A cell is finite but large enough to overflow reduced costs.
    #[error("cost matrix entry ({row}, {col}) exceeds the magnitude limit {limit:e}")]
    CostOutOfRange { row: usize, col: usize, limit: f64 },

    /// The reconstructed augmenting path does not alternate left/right.
    #[error("augmenting path corrupted at position {position}: node {node} is in the wrong category")]
    PathCorrupted { position: usize, node: usize },

    /// Match arrays disagree with each other or with the path being applied.
    #[error("inconsistent match state: {0}")]
    InconsistentMatch(String),

    /// A node id has no live entry in the current search.
    #[error("no queue entry for node {0} in the current search")]
    MissingEntry(usize),

    /// The outer loop ran more augmentations than allowed.
    #[error("augmentation limit of {limit} reached before the matching was complete")]
    IterationLimit { limit: usize },

    /// The wall-clock budget for `find_match` ran out.
    #[error("time budget of {budget:?} exceeded")]
    TimeBudgetExceeded { budget: Duration },

    /// Read-back requested before `find_match` completed.
    #[error("no solution available; call find_match first")]
    NotSolved,

    /// Receipt encoding failed.
    #[error("serialization failed: {0}")]
    Serialize(String),
}

impl MatchingError {
    /// True for errors caused by the caller's input rather than an engine bug.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::NotSquare { .. } | Self::NonFiniteCost { .. } | Self::CostOutOfRange { .. }
        )
    }
}
