//! Match receipt summarizing a solved problem instance.
//!
//! The receipt is a fixed-size SSZ container so two runs over the same matrix
//! can be compared byte for byte. The assignment itself is folded into a
//! SHA-256 root rather than stored inline.

use ssz_rs::prelude::*;
use sha2::{Sha256, Digest};

use crate::error::MatchingError;

/// Summary of a completed matching.
///
/// ## Example
///
/// ```
/// use bipartite_match::types::MatchReceipt;
///
/// let receipt = MatchReceipt::from_assignment(&[0, 2, 1], 11.0, 3);
/// assert_eq!(receipt.size, 3);
/// assert_eq!(receipt.total_cost(), 11.0);
/// assert_eq!(receipt.assignment_root_hex().len(), 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct MatchReceipt {
    /// Nodes per side
    pub size: u64,

    /// Number of augmenting paths applied
    pub augmentations: u64,

    /// IEEE-754 bit pattern of the total cost
    pub total_cost_bits: u64,

    /// SHA-256 over the assignment (each entry as u64 little-endian)
    pub assignment_root: [u8; 32],
}

impl MatchReceipt {
    /// Create a receipt from raw fields
    pub fn new(size: u64, augmentations: u64, total_cost: f64, assignment_root: [u8; 32]) -> Self {
        Self {
            size,
            augmentations,
            total_cost_bits: total_cost.to_bits(),
            assignment_root,
        }
    }

    /// Create a receipt, hashing the assignment
    pub fn from_assignment(assignment: &[usize], total_cost: f64, augmentations: usize) -> Self {
        Self::new(
            assignment.len() as u64,
            augmentations as u64,
            total_cost,
            Self::compute_root(assignment),
        )
    }

    /// SHA-256 of the assignment
    pub fn compute_root(assignment: &[usize]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        for &col in assignment {
            hasher.update((col as u64).to_le_bytes());
        }
        let result = hasher.finalize();

        let mut hash = [0u8; 32];
        hash.copy_from_slice(&result);
        hash
    }

    /// Total cost as a float
    #[inline]
    pub fn total_cost(&self) -> f64 {
        f64::from_bits(self.total_cost_bits)
    }

    /// Assignment root as a hex string
    pub fn assignment_root_hex(&self) -> String {
        hex::encode(self.assignment_root)
    }

    /// Check whether `assignment` hashes to this receipt's root
    pub fn matches_assignment(&self, assignment: &[usize]) -> bool {
        assignment.len() as u64 == self.size && Self::compute_root(assignment) == self.assignment_root
    }

    /// SSZ-encode the receipt
    pub fn to_bytes(&self) -> crate::error::Result<Vec<u8>> {
        ssz_rs::serialize(self).map_err(|e| MatchingError::Serialize(format!("{:?}", e)))
    }
}
