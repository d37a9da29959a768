// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Run boundaries of the Burrows-Wheeler transform.
//!
//! `BWT[i]` is the byte preceding suffix `SA[i]` (cyclically, so the suffix
//! starting at 0 contributes the sentinel). It is read on the fly from SA;
//! the transform itself is never materialised.
//!
//! ```text
//! T = banana$      SA = 6 5 3 1 0 4 2
//!                 BWT = a n n b $ a a
//!                         ^   ^ ^        boundaries counted: 3
//! ```
//!
//! The count skips the boundary that directly follows the sentinel, i.e. it
//! counts `i` with `BWT[i] != BWT[i-1]` and `BWT[i-1] != $`. For banana the
//! boundary `$ → a` is not counted, giving r = 3.

use crate::int_vector::IntArray;
use crate::text::SENTINEL;

/// r: BWT run boundaries of the sentinel-terminated `text`, excluding the one
/// right after the sentinel.
pub fn bwt_runs<A: IntArray + ?Sized>(text: &[u8], sa: &A) -> usize {
    let n = text.len();
    if sa.is_empty() {
        return 0;
    }

    let bwt = |i: usize| {
        let j = sa.get(i);
        if j > 0 {
            text[j - 1]
        } else {
            text[n - 1]
        }
    };

    let mut r = 0;
    let mut last = bwt(0);
    for i in 1..sa.len() {
        let c = bwt(i);
        if last != SENTINEL && c != last {
            r += 1;
        }
        last = c;
    }
    r
}
