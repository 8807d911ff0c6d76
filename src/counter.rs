// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The memoized recursion that does the actual counting.
//!
//! Rows are placed one at a time. After any prefix of rows, the only thing
//! that determines how many completions remain is the vector of per-column
//! quotas, so that vector is the memo key. Different row orders reach the
//! same quotas constantly, which is why the memo table turns a hopeless
//! search into a tractable one.
//!
//! Keys are canonicalized (column pairs sorted) before lookup and store:
//! column-permuted states have identical counts, so they share an entry.
//! Entries are written once and never updated; the recursion always consults
//! the table before computing.
//!
//! Counts overflow any fixed-width integer almost immediately (n=8 is
//! already eleven digits), so all arithmetic is [`BigUint`].

use std::collections::HashMap;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::patterns::RowPatterns;
use crate::types::QuotaState;

/// One counting session: the memo table plus the recursion that fills it.
///
/// A session is created per top-level computation and dropped with it; no
/// global state. Keeping one session alive across repeated calls is safe and
/// amortizes lookups for states that recur.
#[derive(Debug, Default)]
pub struct CountSession {
    memo: HashMap<QuotaState, BigUint>,
}

impl CountSession {
    pub fn new() -> Self {
        CountSession {
            memo: HashMap::new(),
        }
    }

    /// Number of distinct ways to finish the matrix from `state`.
    ///
    /// "Finish" means placing exactly [`QuotaState::remaining_rows`] more
    /// balanced rows so that every column quota lands on exactly zero. An
    /// invalid state has no completions; an exhausted valid state has one
    /// (the empty completion) only if it is settled everywhere.
    pub fn completions(&mut self, state: &QuotaState) -> BigUint {
        let key = state.canonical();
        if let Some(hit) = self.memo.get(&key) {
            return hit.clone();
        }

        let result = if !state.is_valid() {
            BigUint::zero()
        } else if state.remaining_rows() == 0 {
            if state.is_complete() {
                BigUint::from(1u8)
            } else {
                BigUint::zero()
            }
        } else {
            let mut total = BigUint::zero();
            for row in RowPatterns::new(state.width()) {
                let child = state.apply_row(&row);
                // An over-drawn child contributes nothing; skip the recursion.
                if child.is_valid() {
                    total += self.completions(&child);
                }
            }
            total
        };

        self.memo.insert(key, result.clone());
        result
    }

    /// How many distinct states this session has resolved.
    #[inline]
    pub fn memo_len(&self) -> usize {
        self.memo.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColumnQuota;

    #[test]
    fn test_smallest_sizes() {
        let mut session = CountSession::new();
        let empty = QuotaState::initial(0).unwrap();
        assert_eq!(session.completions(&empty), BigUint::from(1u8));

        let mut session = CountSession::new();
        let two = QuotaState::initial(2).unwrap();
        assert_eq!(session.completions(&two), BigUint::from(2u8));
    }

    #[test]
    fn test_memo_is_write_once() {
        let mut session = CountSession::new();
        let state = QuotaState::initial(4).unwrap();
        let first = session.completions(&state);
        let resolved = session.memo_len();

        // A fresh but equal state must hit the stored entry, not recompute.
        let again = QuotaState::initial(4).unwrap();
        let second = session.completions(&again);
        assert_eq!(first, second);
        assert_eq!(session.memo_len(), resolved);
    }

    #[test]
    fn test_invalid_state_counts_zero() {
        let mut session = CountSession::new();
        let state = QuotaState::from_columns(vec![
            ColumnQuota { zeros: -1, ones: 1 },
            ColumnQuota { zeros: 1, ones: 1 },
        ]);
        assert_eq!(session.completions(&state), BigUint::zero());
    }

    #[test]
    fn test_session_reuse_across_sizes() {
        // Keys from different widths never collide, so one session can serve
        // a whole sweep.
        let mut session = CountSession::new();
        let two = QuotaState::initial(2).unwrap();
        let four = QuotaState::initial(4).unwrap();
        assert_eq!(session.completions(&two), BigUint::from(2u8));
        assert_eq!(session.completions(&four), BigUint::from(90u8));
        assert_eq!(session.completions(&two), BigUint::from(2u8));
    }
}
