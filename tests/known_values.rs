//! End-to-end checks against the published counts.
//!
//! These values come from the exhaustive enumeration literature for balanced
//! 0/1 matrices and were cross-checked against an independent
//! implementation. If any of them drifts, the engine is wrong; there is no
//! tolerance on exact counting.

use balanza::{count_balanced_arrays, CountError};
use num_bigint::BigUint;

const KNOWN: &[(usize, &str)] = &[
    (0, "1"),
    (2, "2"),
    (4, "90"),
    (6, "297200"),
    (8, "116963796250"),
];

#[test]
fn counts_match_known_values() {
    for &(n, want) in KNOWN {
        let got = count_balanced_arrays(n).unwrap();
        assert_eq!(got.to_string(), want, "count for n={}", n);
    }
}

#[test]
fn counts_grow_strictly() {
    let counts: Vec<BigUint> = [2usize, 4, 6, 8]
        .iter()
        .map(|&n| count_balanced_arrays(n).unwrap())
        .collect();
    for pair in counts.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn odd_sizes_fail_with_odd_size_error() {
    for n in [1usize, 3, 5, 7, 9] {
        assert_eq!(count_balanced_arrays(n), Err(CountError::OddSize { n }));
    }
}

#[test]
fn counting_is_deterministic_across_runs() {
    let first = count_balanced_arrays(6).unwrap();
    let second = count_balanced_arrays(6).unwrap();
    assert_eq!(first, second);
}
