// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the derived arrays and the parsers.
//!
//! These are debug-mode assertions. They:
//!
//! 1. Are **zero-cost in release builds** (the bodies sit behind
//!    `cfg!(debug_assertions)`)
//! 2. Provide **early failure detection** during development and in tests
//! 3. Check the data model invariants exactly, not approximately
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function            | Invariant                                       |
//! |------------------------------|-------------------------------------------------|
//! | `check_sentinel_terminated`  | `T[n-1] = 0` and no other zero                  |
//! | `check_suffix_array_sorted`  | `T[SA[i-1]..] < T[SA[i]..]` for all i           |
//! | `check_inverse`              | `ISA[SA[i]] = i`                                |
//! | `check_lcp_correct`          | `LCP[i] = lcp(T[SA[i-1]..], T[SA[i]..])`        |
//! | `check_phrases_cover`        | phrases tile `[0, n')` left to right            |
//!
//! # Usage
//!
//! ```ignore
//! let sa = build_suffix_array(&text);
//! // In debug builds, this panics if SA is not sorted
//! check_suffix_array_sorted(text.as_bytes(), &sa);
//! ```

use crate::int_vector::IntArray;
use crate::measures::Phrase;
use crate::text::SENTINEL;

/// Check that `text` ends with the only sentinel.
#[inline]
pub fn check_sentinel_terminated(text: &[u8]) {
    if cfg!(debug_assertions) {
        debug_assert_eq!(
            text.last(),
            Some(&SENTINEL),
            "Contract violation: text must end with the sentinel"
        );
        let interior = text[..text.len().saturating_sub(1)]
            .iter()
            .position(|&b| b == SENTINEL);
        debug_assert!(
            interior.is_none(),
            "Contract violation: interior sentinel at {:?}",
            interior
        );
    }
}

/// Check that `sa` sorts the suffixes of `text` strictly.
///
/// Uses the rank of the next suffix to decide ties on the first byte, which
/// makes the check exact in O(n) instead of comparing whole suffixes:
/// `T[a..] < T[b..]` iff `T[a] < T[b]`, or `T[a] = T[b]` and
/// `rank(a + 1) < rank(b + 1)`.
///
/// # Panics (debug builds only)
/// Panics if `sa` is not a permutation or any adjacent pair is out of order.
#[inline]
pub fn check_suffix_array_sorted<A: IntArray + ?Sized>(text: &[u8], sa: &A) {
    if !cfg!(debug_assertions) {
        return;
    }
    check_sentinel_terminated(text);

    let n = text.len();
    debug_assert_eq!(
        sa.len(),
        n,
        "Contract violation: sa.len() {} != text.len() {}",
        sa.len(),
        n
    );

    let mut rank = vec![usize::MAX; n];
    for i in 0..n {
        let pos = sa.get(i);
        debug_assert!(pos < n, "Contract violation: sa[{}] = {} >= n", i, pos);
        debug_assert!(
            rank[pos] == usize::MAX,
            "Contract violation: position {} appears twice in sa",
            pos
        );
        rank[pos] = i;
    }

    for i in 1..n {
        let a = sa.get(i - 1);
        let b = sa.get(i);
        let ordered = text[a] < text[b] || (text[a] == text[b] && rank[a + 1] < rank[b + 1]);
        debug_assert!(
            ordered,
            "Contract violation: suffix array not sorted at {} (positions {} and {})",
            i,
            a,
            b
        );
    }
}

/// Check that `isa` inverts `sa`.
#[inline]
pub fn check_inverse<A, B>(sa: &A, isa: &B)
where
    A: IntArray + ?Sized,
    B: IntArray + ?Sized,
{
    if cfg!(debug_assertions) {
        debug_assert_eq!(sa.len(), isa.len(), "Contract violation: sa/isa length");
        for i in 0..sa.len() {
            debug_assert_eq!(
                isa.get(sa.get(i)),
                i,
                "Contract violation: isa[sa[{}]] != {}",
                i,
                i
            );
        }
    }
}

/// Check every LCP entry against a direct comparison.
///
/// O(n + Σ lcp), debug builds only.
#[inline]
pub fn check_lcp_correct<A, B>(text: &[u8], sa: &A, lcp: &B)
where
    A: IntArray + ?Sized,
    B: IntArray + ?Sized,
{
    if !cfg!(debug_assertions) {
        return;
    }
    debug_assert_eq!(
        lcp.len(),
        sa.len(),
        "Contract violation: lcp.len() {} != sa.len() {}",
        lcp.len(),
        sa.len()
    );
    if lcp.is_empty() {
        return;
    }
    debug_assert_eq!(lcp.get(0), 0, "Contract violation: lcp[0] != 0");

    for i in 1..sa.len() {
        let a = &text[sa.get(i - 1)..];
        let b = &text[sa.get(i)..];
        let direct = a.iter().zip(b).take_while(|(x, y)| x == y).count();
        debug_assert_eq!(
            lcp.get(i),
            direct,
            "Contract violation: lcp[{}] = {} but suffixes share {}",
            i,
            lcp.get(i),
            direct
        );
    }
}

/// Check that a parse is a left-to-right tiling of `[0, n)` with non-empty phrases.
#[inline]
pub fn check_phrases_cover(phrases: &[Phrase], n: usize) {
    if cfg!(debug_assertions) {
        let mut expected_start = 0;
        for (k, phrase) in phrases.iter().enumerate() {
            debug_assert_eq!(
                phrase.start, expected_start,
                "Contract violation: phrase {} starts at {} instead of {}",
                k, phrase.start, expected_start
            );
            debug_assert!(phrase.len > 0, "Contract violation: phrase {} is empty", k);
            expected_start += phrase.len;
        }
        debug_assert_eq!(
            expected_start, n,
            "Contract violation: phrases cover {} of {} bytes",
            expected_start, n
        );
    }
}
