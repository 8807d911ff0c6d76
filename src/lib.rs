//! Exact counts of balanced 0/1 matrices.
//!
//! An n×n binary matrix is *balanced* when every row and every column holds
//! exactly n/2 zeros and n/2 ones (so n must be even). This crate computes
//! how many balanced matrices exist for a given n: exactly, as
//! arbitrary-precision integers, bounded only by memory and patience. The
//! state space grows super-exponentially; n=8 already counts 116963796250
//! matrices.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌───────────────┐
//! │  types.rs   │────▶│ patterns.rs  │────▶│  counter.rs   │
//! │ (QuotaState,│     │ (RowPatterns │     │ (CountSession │
//! │  RowPattern)│     │  generator)  │     │  memo + count)│
//! └─────────────┘     └──────────────┘     └───────────────┘
//! ```
//!
//! # How it counts
//!
//! Rows are placed one at a time. A partial matrix is summarized by its
//! [`QuotaState`]: how many zeros and ones each column still needs. For each
//! candidate next row ([`RowPatterns`] enumerates the C(n, n/2) distinct
//! arrangements), the engine recurses on the decremented state, pruning any
//! branch that over-draws a column. Identical quota states are reached by
//! many row orders, so completion counts are memoized per state, with
//! column order normalized away, since permuting columns cannot change the
//! count.
//!
//! # Usage
//!
//! ```
//! use balanza::count_balanced_arrays;
//!
//! let count = count_balanced_arrays(4).unwrap();
//! assert_eq!(count.to_string(), "90");
//!
//! assert!(count_balanced_arrays(3).is_err());
//! ```

pub mod counter;
pub mod patterns;
pub mod types;

// Re-exports for public API
pub use counter::CountSession;
pub use patterns::RowPatterns;
pub use types::{ColumnQuota, CountError, QuotaState, RowPattern};

use num_bigint::BigUint;

/// Exact number of n×n balanced 0/1 matrices.
///
/// Builds the initial all-columns-owed state, runs a fresh [`CountSession`]
/// over it, and returns the exact count. Fails with [`CountError::OddSize`]
/// when `n` is odd; that is the only error path. Callers that sweep many
/// sizes and want to keep memo entries warm can drive a [`CountSession`]
/// directly instead.
pub fn count_balanced_arrays(n: usize) -> Result<BigUint, CountError> {
    let initial = QuotaState::initial(n)?;
    let mut session = CountSession::new();
    Ok(session.completions(&initial))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_rejects_odd_sizes() {
        assert_eq!(
            count_balanced_arrays(3),
            Err(CountError::OddSize { n: 3 })
        );
    }

    #[test]
    fn test_driver_smallest_sizes() {
        assert_eq!(count_balanced_arrays(0).unwrap(), BigUint::from(1u8));
        assert_eq!(count_balanced_arrays(2).unwrap(), BigUint::from(2u8));
    }
}
