// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Substring complexity δ = max over k of d_k / k.
//!
//! `d_k` is the number of distinct length-k substrings of the body. It falls
//! out of the LCP array in one pass: group the SA adjacencies by their LCP,
//! `D[l + 1] = #{ i >= 1 : lcp[i] = l }`, then
//!
//! ```text
//! d_1 = D[1]
//! d_k = d_(k-1) + D[k] - 1        for k = 2 ..= n'
//! ```
//!
//! Each step loses the one length-(k-1) substring ending at the sentinel and
//! gains one per adjacency whose shared prefix stops exactly at k - 1.

use crate::int_vector::IntArray;

/// Histogram `D[l + 1]` of LCP values over SA positions `1..n`.
fn lcp_histogram<A: IntArray + ?Sized>(lcp: &A) -> Vec<usize> {
    let n = lcp.len();
    let mut d = vec![0usize; n + 1];
    for i in 1..n {
        d[lcp.get(i) + 1] += 1;
    }
    d
}

/// δ of the text whose (sentinel-terminated) LCP array is `lcp`.
///
/// 0 for an empty body.
pub fn delta<A: IntArray + ?Sized>(lcp: &A) -> f64 {
    let n = lcp.len();
    if n < 2 {
        return 0.0;
    }
    let d = lcp_histogram(lcp);

    let mut x = d[1];
    let mut best = x as f64;
    for (k, &new) in d.iter().enumerate().take(n).skip(2) {
        x = x + new - 1;
        best = best.max(x as f64 / k as f64);
    }
    best
}

/// `d_k` for `k = 1..=n'`, in order.
pub fn substring_complexity_profile<A: IntArray + ?Sized>(lcp: &A) -> Vec<usize> {
    let n = lcp.len();
    if n < 2 {
        return Vec::new();
    }
    let d = lcp_histogram(lcp);

    let mut profile = Vec::with_capacity(n - 1);
    let mut x = d[1];
    profile.push(x);
    for &new in &d[2..n] {
        x = x + new - 1;
        profile.push(x);
    }
    profile
}
