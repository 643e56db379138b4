//! Core data types
//!
//! ## Types
//!
//! - [`NodeSpace`] / [`Category`]: the left/right/global node-id scheme
//! - [`CostMatrix`]: validated square weight matrix
//! - [`MatchReceipt`]: SSZ-encoded summary of a solved instance

mod matrix;
mod node;
mod receipt;

pub use matrix::CostMatrix;
pub use node::{Category, NodeSpace};
pub use receipt::MatchReceipt;
