// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! LCP array construction with the PHI algorithm.
//!
//! `lcp[i]` is the length of the longest common prefix of the suffixes at
//! `sa[i - 1]` and `sa[i]`; `lcp[0] = 0`.
//!
//! Comparing every adjacent pair directly costs O(n²) on repetitive texts.
//! PHI walks the suffixes in *text* order instead, where the permuted LCP
//! shrinks by at most one per step, so the total work is O(n):
//!
//! ```text
//! phi[sa[i]] = sa[i - 1]                 (predecessor in SA order)
//! plcp[i]    = lcp(T[i..], T[phi[i]..])  (plcp[i] >= plcp[i - 1] - 1)
//! lcp[i]     = plcp[sa[i]]
//! ```
//!
//! # References
//!
//! - Kärkkäinen, Manzini, Puglisi (2009): "Permuted Longest-Common-Prefix Array"

use crate::contracts::check_lcp_correct;
use crate::int_vector::{IntArray, IntVector};
use crate::text::Text;

const NONE: usize = usize::MAX;

/// Build the LCP array of `text` from its suffix array.
pub fn build_lcp<A: IntArray + ?Sized>(text: &Text, sa: &A) -> IntVector {
    let lcp = lcp_phi(text.as_bytes(), sa);
    let lcp = IntVector::from_values(&lcp);
    check_lcp_correct(text.as_bytes(), sa, &lcp);
    lcp
}

/// PHI algorithm over plain vectors; `phi` is reused for PLCP in place.
fn lcp_phi<A: IntArray + ?Sized>(text: &[u8], sa: &A) -> Vec<usize> {
    let n = sa.len();
    if n == 0 {
        return Vec::new();
    }

    let mut phi = vec![NONE; n];
    for i in 1..n {
        phi[sa.get(i)] = sa.get(i - 1);
    }

    let mut l = 0usize;
    for i in 0..n {
        let j = phi[i];
        if j == NONE {
            phi[i] = 0;
            l = 0;
            continue;
        }
        while i + l < n && j + l < n && text[i + l] == text[j + l] {
            l += 1;
        }
        phi[i] = l;
        l = l.saturating_sub(1);
    }

    let plcp = phi;
    (0..n).map(|i| plcp[sa.get(i)]).collect()
}
