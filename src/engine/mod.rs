//! Matching engine module.
//!
//! ## Design Principles
//!
//! The engine is designed for:
//!
//! 1. **Determinism**: Same matrix always produces the same matching
//! 2. **Exactness**: Reduced costs keep every searched edge non-negative
//! 3. **Synchronous Execution**: One search completes before the match state changes
//! 4. **Scoped State**: Queue entries live only for the search that created them
//!
//! ## Matching Rules
//!
//! - Each search finds a **shortest** augmenting path from any unmatched left node
//!   to any unmatched right node
//! - Applying the path grows the matching by exactly one pair
//! - The loop stops when no unmatched left node remains
//!
//! ## Example
//!
//! ```
//! use bipartite_match::engine::{MatchingConfig, MatchingEngine};
//! use bipartite_match::types::CostMatrix;
//!
//! let matrix = CostMatrix::from_rows(&[[4.0, 1.0], [2.0, 6.0]]).unwrap();
//! let mut engine = MatchingEngine::with_config(matrix, MatchingConfig::default());
//!
//! assert_eq!(engine.find_match().unwrap(), vec![1, 0]);
//! assert_eq!(engine.total_cost().unwrap(), 3.0);
//! ```

pub mod config;
pub mod matcher;
mod search;

pub use config::MatchingConfig;
pub use matcher::MatchingEngine;
