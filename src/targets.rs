//! Declared per-row and per-column occupied-cell counts.

use crate::common::SolverError;
use alloc::vec::Vec;

/// Row and column targets for an N×N puzzle. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Targets {
    rows: Vec<usize>,
    cols: Vec<usize>,
}

impl Targets {
    /// Pair up row and column targets, rejecting non-square or empty grids.
    pub fn new(rows: Vec<usize>, cols: Vec<usize>) -> Result<Self, SolverError> {
        if rows.len() != cols.len() {
            return Err(SolverError::TargetMismatch {
                rows: rows.len(),
                cols: cols.len(),
            });
        }
        if rows.is_empty() {
            return Err(SolverError::EmptyGrid);
        }
        Ok(Self { rows, cols })
    }

    /// Side length N.
    #[inline]
    pub fn n(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    #[inline]
    pub fn cols(&self) -> &[usize] {
        &self.cols
    }
}
