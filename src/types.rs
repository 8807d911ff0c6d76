// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a counting session.
//!
//! These types define how a partially built matrix is represented. A matrix
//! is never materialized row by row; the only thing the recursion needs is
//! how many zeros and ones each column is still owed. Two partial matrices
//! with the same quotas have the same number of completions, which is what
//! makes memoization pay off.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **QuotaState**: `remaining_rows` is always an exact integer. Every
//!   applied row removes exactly one unit from each of the n columns, so the
//!   total owed is always a multiple of n. Off-by-one here means the
//!   recursion never bottoms out.
//!
//! - **ColumnQuota**: components may go negative, but only as the result of
//!   [`QuotaState::apply_row`] on a column that was already exhausted.
//!   Negative means "this branch places more zeros (or ones) than the column
//!   can take" and contributes nothing; it is a pruning signal, never an
//!   error.
//!
//! - **RowPattern**: exactly half the bits are ones. [`crate::RowPatterns`]
//!   is the only producer, so the counting path never sees an unbalanced row.

use std::error::Error;
use std::fmt;

/// Zeros and ones still owed to a single column.
///
/// Signed on purpose: applying a row to an exhausted column drives a
/// component below zero, and `QuotaState::is_valid` uses that to recognize
/// dead branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColumnQuota {
    /// Zeros this column still needs.
    pub zeros: i32,
    /// Ones this column still needs.
    pub ones: i32,
}

impl ColumnQuota {
    /// Both components are still non-negative.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.zeros >= 0 && self.ones >= 0
    }

    /// The column is owed nothing more.
    #[inline]
    pub fn is_settled(self) -> bool {
        self.zeros == 0 && self.ones == 0
    }
}

/// Per-column quotas for a matrix under construction.
///
/// Equality and hashing are element-wise in column order. Column-permuted
/// states compare unequal here; the memo layer collapses them through
/// [`QuotaState::canonical`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuotaState {
    columns: Vec<ColumnQuota>,
}

impl QuotaState {
    /// The starting state for an n×n matrix: every column owed n/2 of each.
    ///
    /// Odd sizes are rejected up front; "half zeros per column" does not
    /// exist for them.
    pub fn initial(n: usize) -> Result<Self, CountError> {
        if n % 2 != 0 {
            return Err(CountError::OddSize { n });
        }
        let half = (n / 2) as i32;
        Ok(QuotaState {
            columns: vec![
                ColumnQuota {
                    zeros: half,
                    ones: half,
                };
                n
            ],
        })
    }

    /// Build a state directly from column quotas.
    pub fn from_columns(columns: Vec<ColumnQuota>) -> Self {
        QuotaState { columns }
    }

    /// Number of columns (the matrix width).
    #[inline]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// The per-column quotas, in column order.
    #[inline]
    pub fn columns(&self) -> &[ColumnQuota] {
        &self.columns
    }

    /// No column has been over-drawn.
    pub fn is_valid(&self) -> bool {
        self.columns.iter().all(|c| c.is_valid())
    }

    /// Every column is owed exactly nothing: the matrix is finished.
    pub fn is_complete(&self) -> bool {
        self.columns.iter().all(|c| c.is_settled())
    }

    /// Rows still to be placed, derived from the total owed.
    ///
    /// Meaningful for valid states; each placed row removes exactly one unit
    /// per column, so the total owed is `remaining_rows * width`. A
    /// zero-column state has nothing left to place.
    pub fn remaining_rows(&self) -> usize {
        if self.columns.is_empty() {
            return 0;
        }
        let owed: i32 = self.columns.iter().map(|c| c.zeros + c.ones).sum();
        owed as usize / self.columns.len()
    }

    /// The state after placing `row` as the next matrix row.
    ///
    /// Column i loses a zero if `row` has a 0 there, otherwise a one. The
    /// parent is untouched; parent and child stay independently usable, so
    /// the candidate loop in the engine can keep branching off the same
    /// parent.
    pub fn apply_row(&self, row: &RowPattern) -> QuotaState {
        debug_assert_eq!(row.len(), self.columns.len());
        let columns = self
            .columns
            .iter()
            .zip(row.bits())
            .map(|(&quota, &bit)| {
                if bit == 0 {
                    ColumnQuota {
                        zeros: quota.zeros - 1,
                        ..quota
                    }
                } else {
                    ColumnQuota {
                        ones: quota.ones - 1,
                        ..quota
                    }
                }
            })
            .collect();
        QuotaState { columns }
    }

    /// The memo key: the same quotas with column order normalized away.
    ///
    /// Reordering columns permutes the row candidates bijectively, so
    /// column-permuted states have identical completion counts. Sorting the
    /// pairs lets all of them share one memo entry.
    pub fn canonical(&self) -> QuotaState {
        let mut columns = self.columns.clone();
        columns.sort_unstable();
        QuotaState { columns }
    }
}

/// One full matrix row: an arrangement of n/2 zeros and n/2 ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowPattern(Vec<u8>);

impl RowPattern {
    pub(crate) fn new(bits: Vec<u8>) -> Self {
        RowPattern(bits)
    }

    /// The bits, one per column, each 0 or 1.
    #[inline]
    pub fn bits(&self) -> &[u8] {
        &self.0
    }

    /// Row width.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RowPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.0 {
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}

/// Error type for bad counting requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountError {
    /// The requested matrix size is odd, so per-column quotas of n/2 do not
    /// exist.
    OddSize { n: usize },
}

impl fmt::Display for CountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountError::OddSize { n } => {
                write!(
                    f,
                    "matrix size {} is odd; balanced rows and columns need exactly n/2 zeros and n/2 ones",
                    n
                )
            }
        }
    }
}

impl Error for CountError {}
