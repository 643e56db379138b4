//! Square cost matrix.
//!
//! `cost(i, j)` is the cost of matching left-local-id `i` to right-local-id `j`.
//! Entries are stored row-major in a single `Vec<f64>`. The matrix is validated
//! once at construction and never mutated afterwards.
//!
//! Potentials and path lengths are sums of up to a few `n` entries, so each
//! entry must stay below [`CostMatrix::magnitude_limit`] for them to remain
//! finite.

use crate::error::{MatchingError, Result};

/// Immutable n×n matrix of finite real weights.
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    /// Nodes per side
    n: usize,

    /// Row-major cells, `n * n` entries
    cells: Vec<f64>,
}

impl CostMatrix {
    /// Build a matrix from rows
    ///
    /// # Errors
    ///
    /// * `NotSquare` - if any row length differs from the row count
    /// * `NonFiniteCost` - if any entry is NaN or infinite
    /// * `CostOutOfRange` - if any entry's magnitude exceeds
    ///   [`magnitude_limit`](Self::magnitude_limit)
    ///
    /// # Example
    ///
    /// ```
    /// use bipartite_match::types::CostMatrix;
    ///
    /// let matrix = CostMatrix::from_rows(&[[3.0, 5.0], [5.0, 8.0]]).unwrap();
    /// assert_eq!(matrix.size(), 2);
    /// assert_eq!(matrix.cost(1, 0), 5.0);
    ///
    /// assert!(CostMatrix::from_rows(&[vec![4.0], vec![0.0]]).is_err());
    /// ```
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let n = rows.len();
        let mut cells = Vec::with_capacity(n * n);
        let limit = Self::magnitude_limit(n);

        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != n {
                return Err(MatchingError::NotSquare {
                    rows: n,
                    row,
                    len: values.len(),
                });
            }
            if let Some(col) = values.iter().position(|v| !v.is_finite()) {
                return Err(MatchingError::NonFiniteCost { row, col });
            }
            if let Some(col) = values.iter().position(|v| v.abs() > limit) {
                return Err(MatchingError::CostOutOfRange { row, col, limit });
            }
            cells.extend_from_slice(values);
        }

        Ok(Self { n, cells })
    }

    /// Largest entry magnitude accepted for an n×n matrix
    ///
    /// Every potential, distance and total stays within `8 * (n + 1)` entries'
    /// worth of magnitude, so this keeps all of them finite.
    pub fn magnitude_limit(n: usize) -> f64 {
        f64::MAX / (8.0 * (n as f64 + 1.0))
    }

    /// Nodes per side
    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Cost of matching left `row` to right `col`
    #[inline]
    pub fn cost(&self, row: usize, col: usize) -> f64 {
        self.cells[row * self.n + col]
    }

    /// Smallest entry of a column
    ///
    /// Returns `f64::INFINITY` for an empty matrix.
    pub fn column_min(&self, col: usize) -> f64 {
        (0..self.n)
            .map(|row| self.cost(row, col))
            .fold(f64::INFINITY, f64::min)
    }

    /// Total cost of an assignment where `assignment[i]` is the column for row `i`
    ///
    /// # Panics
    ///
    /// Panics if the assignment length is not `n` or a column is out of range.
    pub fn assignment_cost(&self, assignment: &[usize]) -> f64 {
        assert_eq!(assignment.len(), self.n, "assignment length mismatch");
        assignment
            .iter()
            .enumerate()
            .map(|(row, &col)| self.cost(row, col))
            .sum()
    }
}
