// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards subsets enumeration.
//!
//! Subsets are visited in colexicographic order using Algorithm L from
//! TAOCP 4a, a visit can start from any subset using the combinatorial number
//! system so that the subsets range can be split between parallel tasks.
use crate::value::HAND_SIZE;

/// Maximum number of distinct cards in a pool.
pub const MAX_POOL: usize = 52;

/// Creates the table for nck(n, k) for n <= 52 and k <= 5.
const fn make_nck() -> [[usize; HAND_SIZE + 1]; MAX_POOL + 1] {
    let mut t = [[0usize; HAND_SIZE + 1]; MAX_POOL + 1];
    let mut n = 0;

    while n <= MAX_POOL {
        // base case nck(n, 0) = 1
        t[n][0] = 1;

        let mut k = 1;
        while k <= HAND_SIZE && k <= n {
            // nck(n, k) = nck(n-1, k-1) + nck(n-1, k)
            t[n][k] = t[n - 1][k - 1] + t[n - 1][k];
            k += 1;
        }

        n += 1;
    }

    t
}

const NCKS: [[usize; HAND_SIZE + 1]; MAX_POOL + 1] = make_nck();

/// Returns the binomial coefficient for n choose k.
///
/// Panics if n > 52 or k > 5.
#[inline]
pub(crate) fn nck(n: usize, k: usize) -> usize {
    assert!(n <= MAX_POOL, "n={n} must be 0 <= n <= {MAX_POOL}");
    assert!(k <= HAND_SIZE, "k={k} must be 0 <= k <= {HAND_SIZE}");
    NCKS[n][k]
}

/// Converts a colex rank to the positions of its five elements in ascending
/// order (see Theorem L pg. 260 Knuth 4a).
///
/// Panics if nth >= nck(52, 5).
pub(crate) fn nth_subset(mut nth: usize) -> [usize; HAND_SIZE] {
    let mut out = [0; HAND_SIZE];
    for k in (0..HAND_SIZE).rev() {
        // Largest c with nck(c, k + 1) <= nth.
        let mut c = k;
        while nck(c + 1, k + 1) <= nth {
            c += 1;
        }

        out[k] = c;
        nth -= nck(c, k + 1);
    }

    out
}

/// Calls `f` with the positions of `count` five elements subsets of `0..n`
/// starting from the `nth` subset.
///
/// Stops early after the last subset. Panics if n > 52.
pub fn for_each_subset<F>(n: usize, nth: usize, count: usize, mut f: F)
where
    F: FnMut(&[usize; HAND_SIZE]),
{
    if count == 0 || nth >= nck(n, HAND_SIZE) {
        return;
    }

    // Algorithm L, c[1..=k] holds the subset and c[k + 1] = n, c[k + 2] = 0
    // are sentinels.
    let mut c = [0usize; HAND_SIZE + 3];
    c[1..=HAND_SIZE].copy_from_slice(&nth_subset(nth));
    c[HAND_SIZE + 1] = n;

    let mut subset = [0usize; HAND_SIZE];
    let mut counter = 1;
    loop {
        subset.copy_from_slice(&c[1..=HAND_SIZE]);
        f(&subset);

        counter += 1;
        if counter > count {
            break;
        }

        let mut j = 1;
        while c[j] + 1 == c[j + 1] {
            c[j] = j - 1;
            j += 1;
        }

        if j > HAND_SIZE {
            break;
        }

        c[j] += 1;
    }
}
