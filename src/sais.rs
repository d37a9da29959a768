// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! SA-IS: Suffix Array by Induced Sorting
//!
//! Linear-time O(n) suffix array construction algorithm.
//!
//! # Algorithm Overview
//!
//! ```text
//! Input: "banana$"   ($ = sentinel, value 0, already part of the text)
//!
//! Step 1: Classify suffixes
//! ┌───┬───┬───┬───┬───┬───┬───┐
//! │ b │ a │ n │ a │ n │ a │ $ │
//! ├───┼───┼───┼───┼───┼───┼───┤
//! │ L │ S │ L │ S │ L │ L │ S │   (S = smaller than next, L = larger)
//! └───┴───┴───┴───┴───┴───┴───┘
//!
//! Step 2: Find LMS (Leftmost S-type) suffixes
//!         LMS = S-type preceded by L-type
//!         Positions: 1, 3, 6
//!
//! Step 3: Induced sorting
//!         - Place LMS suffixes at bucket tails
//!         - Induce L-type positions (left-to-right)
//!         - Induce S-type positions (right-to-left)
//!
//! Step 4: If LMS substrings not unique, recurse on reduced problem
//!
//! Step 5: Use sorted LMS order to induce final suffix array
//!
//! Output: [6, 5, 3, 1, 0, 4, 2]
//! ```
//!
//! The byte pass and the recursive pass over LMS names run the same code:
//! everything is generic over the symbol type.
//!
//! # Complexity
//!
//! - Time: O(n)
//! - Space: O(n)
//!
//! # References
//!
//! - Nong, Zhang, Chan (2009): "Linear Suffix Array Construction by Almost Pure Induced-Sorting"
//! - <https://doi.org/10.1109/DCC.2009.42>

use crate::contracts::{check_inverse, check_suffix_array_sorted};
use crate::int_vector::{IntArray, IntVector};
use crate::text::{Text, SENTINEL};

/// Suffix type classification.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum SuffixType {
    /// S-type: suffix is lexicographically smaller than the next suffix
    S,
    /// L-type: suffix is lexicographically larger than the next suffix
    L,
}

const EMPTY: usize = usize::MAX;

/// Build the suffix array of a sentinel-terminated byte string.
///
/// `text` must end with [`SENTINEL`] and contain it nowhere else; the
/// sentinel suffix then sorts first, so `sa[0] == text.len() - 1`.
pub fn sais(text: &[u8]) -> Vec<usize> {
    debug_assert!(
        text.last() == Some(&SENTINEL),
        "sais input must end with the sentinel"
    );
    sais_inner(text, 256)
}

/// Build SA for a [`Text`] and pack it to `⌈log₂ n⌉` bits per entry.
pub fn build_suffix_array(text: &Text) -> IntVector {
    let sa = sais(text.as_bytes());
    let sa = IntVector::from_values(&sa);
    check_suffix_array_sorted(text.as_bytes(), &sa);
    sa
}

/// Invert a suffix array: `isa[sa[i]] = i`.
pub fn inverse_suffix_array<A: IntArray + ?Sized>(sa: &A) -> IntVector {
    let n = sa.len();
    let mut isa = IntVector::new(n, crate::int_vector::bits_for(n.saturating_sub(1) as u64));
    for i in 0..n {
        isa.set(sa.get(i), i as u64);
    }
    check_inverse(sa, &isa);
    isa
}

/// Core SA-IS over any integer alphabet `0..alphabet_size`.
fn sais_inner<T>(text: &[T], alphabet_size: usize) -> Vec<usize>
where
    T: Copy + Ord + Into<usize>,
{
    let n = text.len();
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![0];
    }
    if n == 2 {
        return if text[0] < text[1] {
            vec![0, 1]
        } else {
            vec![1, 0]
        };
    }

    // Step 1: Classify suffixes
    let types = classify_suffixes(text);

    // Step 2: Find LMS positions
    let lms_positions: Vec<usize> = (1..n).filter(|&i| is_lms(&types, i)).collect();

    if lms_positions.is_empty() {
        // Only reachable for reduced strings without a smaller tail; sort directly
        let mut sa: Vec<usize> = (0..n).collect();
        sa.sort_by(|&a, &b| text[a..].cmp(&text[b..]));
        return sa;
    }

    // Step 3: Bucket sort setup
    let bucket_sizes = compute_bucket_sizes(text, alphabet_size);

    // Step 4: First induced sort to determine LMS order
    let mut sa = vec![EMPTY; n];
    induce(&mut sa, text, &types, &bucket_sizes, &lms_positions);

    // Step 5: Name LMS substrings
    let mut name = 0usize;
    let mut prev_pos: Option<usize> = None;
    let mut lms_names = vec![0usize; n];

    for &pos in &sa {
        if pos == EMPTY || !is_lms(&types, pos) {
            continue;
        }

        // Check if different from previous LMS substring
        if let Some(prev) = prev_pos {
            if !lms_substrings_equal(text, &types, prev, pos) {
                name += 1;
            }
        }

        lms_names[pos] = name;
        prev_pos = Some(pos);
    }

    let unique_count = name + 1;

    // Step 6: Build reduced string from LMS names (in text order)
    let reduced: Vec<usize> = lms_positions.iter().map(|&pos| lms_names[pos]).collect();

    // Step 7: Recursively sort if not all unique
    let sorted_lms_indices = if unique_count < lms_positions.len() {
        sais_inner(&reduced, unique_count)
    } else {
        // All unique: the names themselves give the order
        let mut order: Vec<usize> = (0..reduced.len()).collect();
        order.sort_by_key(|&i| reduced[i]);
        order
    };

    // Step 8: Final induced sort with correctly ordered LMS suffixes
    let sorted_lms: Vec<usize> = sorted_lms_indices
        .iter()
        .map(|&i| lms_positions[i])
        .collect();

    sa.fill(EMPTY);
    induce(&mut sa, text, &types, &bucket_sizes, &sorted_lms);

    sa
}

/// Place `lms` (in the given order) at bucket tails, then induce L and S.
fn induce<T>(
    sa: &mut [usize],
    text: &[T],
    types: &[SuffixType],
    bucket_sizes: &[usize],
    lms: &[usize],
) where
    T: Copy + Into<usize>,
{
    let n = sa.len();

    // Place LMS suffixes
    let mut tails = compute_bucket_tails(bucket_sizes);
    for &pos in lms.iter().rev() {
        let c: usize = text[pos].into();
        tails[c] -= 1;
        sa[tails[c]] = pos;
    }

    // Induce L-type
    let mut heads = compute_bucket_heads(bucket_sizes);
    for i in 0..n {
        if sa[i] == EMPTY || sa[i] == 0 {
            continue;
        }
        let j = sa[i] - 1;
        if types[j] == SuffixType::L {
            let c: usize = text[j].into();
            sa[heads[c]] = j;
            heads[c] += 1;
        }
    }

    // Induce S-type
    let mut tails = compute_bucket_tails(bucket_sizes);
    for i in (0..n).rev() {
        if sa[i] == EMPTY || sa[i] == 0 {
            continue;
        }
        let j = sa[i] - 1;
        if types[j] == SuffixType::S {
            let c: usize = text[j].into();
            tails[c] -= 1;
            sa[tails[c]] = j;
        }
    }
}

/// Classify each suffix as S-type or L-type.
fn classify_suffixes<T: Copy + Ord>(text: &[T]) -> Vec<SuffixType> {
    let n = text.len();
    let mut types = vec![SuffixType::S; n];

    // Last position is always S-type (sentinel)
    for i in (0..n - 1).rev() {
        types[i] = if text[i] > text[i + 1] {
            SuffixType::L
        } else if text[i] < text[i + 1] {
            SuffixType::S
        } else {
            types[i + 1]
        };
    }

    types
}

/// Check if position i is an LMS position.
#[inline]
fn is_lms(types: &[SuffixType], i: usize) -> bool {
    i > 0 && types[i] == SuffixType::S && types[i - 1] == SuffixType::L
}

fn compute_bucket_sizes<T: Copy + Into<usize>>(text: &[T], alphabet_size: usize) -> Vec<usize> {
    let mut sizes = vec![0; alphabet_size];
    for &c in text {
        sizes[c.into()] += 1;
    }
    sizes
}

fn compute_bucket_heads(sizes: &[usize]) -> Vec<usize> {
    let mut heads = vec![0; sizes.len()];
    let mut sum = 0;
    for (i, &size) in sizes.iter().enumerate() {
        heads[i] = sum;
        sum += size;
    }
    heads
}

fn compute_bucket_tails(sizes: &[usize]) -> Vec<usize> {
    let mut tails = vec![0; sizes.len()];
    let mut sum = 0;
    for (i, &size) in sizes.iter().enumerate() {
        sum += size;
        tails[i] = sum;
    }
    tails
}

/// Compare two LMS substrings for equality (symbols and types).
fn lms_substrings_equal<T: Copy + Eq>(text: &[T], types: &[SuffixType], i: usize, j: usize) -> bool {
    if i == j {
        return true;
    }

    let n = text.len();
    let mut k = 0;

    loop {
        let pi = i + k;
        let pj = j + k;

        if pi >= n || pj >= n {
            return pi >= n && pj >= n;
        }

        if text[pi] != text[pj] || types[pi] != types[pj] {
            return false;
        }

        // After first character, check if both reached next LMS
        if k > 0 {
            let lms_i = is_lms(types, pi);
            let lms_j = is_lms(types, pj);
            if lms_i && lms_j {
                return true;
            }
            if lms_i != lms_j {
                return false;
            }
        }

        k += 1;
    }
}
