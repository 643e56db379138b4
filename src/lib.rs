//! # Bipartite Match
//!
//! Minimum-weight perfect bipartite matching over a square cost matrix.
//!
//! ## Architecture
//!
//! - **Types**: Node-id scheme, cost matrix, match receipt
//! - **Queue**: Slab-backed indexed min-heap of search entries
//! - **Engine**: Shortest augmenting-path matching engine
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Ties are broken by node id, so results are reproducible
//! 2. **Validated Input**: Non-square or non-finite matrices are rejected up front
//! 3. **Per-Search State**: No global registries; every search owns its queue
//! 4. **Loud Invariants**: Internal inconsistencies surface as errors, never as a wrong matching
//!
//! ## Complexity
//!
//! - n augmentations, each an O(n² log n) search
//!
//! ## Example
//!
//! ```
//! use bipartite_match::MatchingEngine;
//!
//! let mut engine = MatchingEngine::from_rows(&[
//!     [3.0, 5.0, 6.0],
//!     [5.0, 8.0, 6.0],
//!     [84.0, 2.0, 10.0],
//! ]).unwrap();
//!
//! let solution = engine.find_match().unwrap();
//! assert_eq!(solution, vec![0, 2, 1]);
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Error type and result alias
pub mod error;

/// Core data types: NodeSpace, CostMatrix, MatchReceipt
pub mod types;

/// Search queue: PriorityEntry and EntryQueue
pub mod queue;

/// Matching engine: augmenting-path search and match updates
pub mod engine;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use error::{MatchingError, Result};
pub use types::{Category, CostMatrix, MatchReceipt, NodeSpace};
pub use queue::{EntryQueue, PriorityEntry};
pub use engine::{MatchingConfig, MatchingEngine};
