// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Greedy LZ77 parsing with previous/next smaller values on the suffix array.
//!
//! From position `i` the next phrase is the longest prefix of `T[i..n')` that
//! also starts at some earlier position `j < i` (the copy may run past `i`),
//! or a single literal byte when no earlier position shares even one byte.
//!
//! # Why two candidates suffice
//!
//! Among all suffixes starting before `i`, the one sharing the longest prefix
//! with `T[i..]` is adjacent to `T[i..]` once the later suffixes are removed
//! from SA order. Those two neighbours are exactly the previous and next
//! smaller values around `ISA[i]`:
//!
//! ```text
//!  SA index   ...  psv  ...  ISA[i]  ...  nsv  ...
//!  SA value         < i  (all > i)   i   (all > i)  < i
//! ```
//!
//! The answer is the larger of `lce(i, SA[psv])` and `lce(i, SA[nsv])`,
//! found by direct byte comparison. No suffix tree, no RMQ.
//!
//! # Finding the neighbours
//!
//! | Method  | Extra memory       | Cost per phrase                     |
//! |---------|--------------------|-------------------------------------|
//! | `Scan`  | none               | walk SA outwards from `ISA[i]`      |
//! | `Stack` | two n-entry arrays | O(1) lookup after an O(n) stack pass |
//!
//! Both produce the same parse.

use std::fmt;
use std::str::FromStr;

use super::Phrase;
use crate::contracts::check_phrases_cover;
use crate::int_vector::{bits_for, IntArray, IntVector};

/// How the PSV/NSV neighbours of a suffix are located.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lz77Method {
    /// Walk the suffix array outwards from `ISA[i]` for every phrase.
    Scan,
    /// Precompute PSV/NSV for every SA index with a monotone stack.
    #[default]
    Stack,
}

impl fmt::Display for Lz77Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lz77Method::Scan => write!(f, "scan"),
            Lz77Method::Stack => write!(f, "stack"),
        }
    }
}

impl FromStr for Lz77Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "scan" => Ok(Lz77Method::Scan),
            "stack" => Ok(Lz77Method::Stack),
            other => Err(format!(
                "unknown LZ77 method '{}' (expected 'scan' or 'stack')",
                other
            )),
        }
    }
}

/// One LZ77 phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Factor {
    pub start: usize,
    pub len: usize,
    /// Earlier start position the phrase copies from; `None` for a literal.
    pub source: Option<usize>,
}

impl Factor {
    #[inline]
    pub fn phrase(&self) -> Phrase {
        Phrase {
            start: self.start,
            len: self.len,
        }
    }
}

/// Previous and next smaller values of every suffix array entry.
///
/// `psv(p)` is the largest `q < p` with `SA[q] < SA[p]`, `nsv(p)` the
/// smallest `q > p` with `SA[q] < SA[p]`. Both are stored bit-packed with
/// `n` standing for "none".
pub struct SmallerValues {
    psv: IntVector,
    nsv: IntVector,
    none: usize,
}

impl SmallerValues {
    /// One left-to-right monotone stack pass over SA, O(n).
    pub fn new<A: IntArray + ?Sized>(sa: &A) -> Self {
        let n = sa.len();
        let width = bits_for(n as u64);
        let mut psv = IntVector::new(n, width);
        let mut nsv = IntVector::new(n, width);
        let mut stack: Vec<usize> = Vec::new();

        for p in 0..n {
            let value = sa.get(p);
            // Everything on the stack above `value` has found its next smaller value
            while let Some(&top) = stack.last() {
                if sa.get(top) < value {
                    break;
                }
                nsv.set(top, p as u64);
                stack.pop();
            }
            psv.set(p, stack.last().map_or(n, |&q| q) as u64);
            stack.push(p);
        }
        for p in stack {
            nsv.set(p, n as u64);
        }

        Self { psv, nsv, none: n }
    }

    #[inline]
    pub fn psv(&self, p: usize) -> Option<usize> {
        let q = self.psv.get(p) as usize;
        (q != self.none).then_some(q)
    }

    #[inline]
    pub fn nsv(&self, p: usize) -> Option<usize> {
        let q = self.nsv.get(p) as usize;
        (q != self.none).then_some(q)
    }
}

/// Length of the common prefix of `body[i..]` and `body[j..]`.
#[inline]
fn lce(body: &[u8], i: usize, j: usize) -> usize {
    body[i..]
        .iter()
        .zip(&body[j..])
        .take_while(|(a, b)| a == b)
        .count()
}

/// Pick the better of the two candidate sources for position `i`.
#[inline]
fn best_source(body: &[u8], i: usize, candidates: [Option<usize>; 2]) -> (usize, Option<usize>) {
    let mut best = (0, None);
    for j in candidates.into_iter().flatten() {
        let l = lce(body, i, j);
        if l > best.0 {
            best = (l, Some(j));
        }
    }
    best
}

/// Walk SA outwards from `p = ISA[i]` to the nearest entries below `i`.
fn scan_neighbours<A: IntArray + ?Sized>(sa: &A, p: usize, i: usize) -> [Option<usize>; 2] {
    let psv = (0..p).rev().map(|q| sa.get(q)).find(|&j| j < i);
    let nsv = (p + 1..sa.len()).map(|q| sa.get(q)).find(|&j| j < i);
    [psv, nsv]
}

/// Run the greedy parse of the sentinel-terminated `text`, calling `emit`
/// once per phrase.
fn parse_with<S, I>(text: &[u8], sa: &S, isa: &I, method: Lz77Method, mut emit: impl FnMut(Factor))
where
    S: IntArray + ?Sized,
    I: IntArray + ?Sized,
{
    let n = text.len();
    if n <= 1 {
        return;
    }
    let body = &text[..n - 1];

    let smaller = match method {
        Lz77Method::Stack => Some(SmallerValues::new(sa)),
        Lz77Method::Scan => None,
    };

    let mut i = 0;
    while i < body.len() {
        let p = isa.get(i);
        let candidates = match &smaller {
            Some(sv) => [sv.psv(p).map(|q| sa.get(q)), sv.nsv(p).map(|q| sa.get(q))],
            None => scan_neighbours(sa, p, i),
        };

        let (longest, source) = best_source(body, i, candidates);
        let len = longest.max(1);
        emit(Factor {
            start: i,
            len,
            source,
        });
        i += len;
    }
}

/// z77 with the plain SA scan for PSV/NSV.
pub fn lz77_phrases<S, I>(text: &[u8], sa: &S, isa: &I) -> usize
where
    S: IntArray + ?Sized,
    I: IntArray + ?Sized,
{
    let mut z = 0;
    parse_with(text, sa, isa, Lz77Method::Scan, |_| z += 1);
    z
}

/// z77 with precomputed PSV/NSV arrays.
pub fn lz77_phrases_stack<S, I>(text: &[u8], sa: &S, isa: &I) -> usize
where
    S: IntArray + ?Sized,
    I: IntArray + ?Sized,
{
    let mut z = 0;
    parse_with(text, sa, isa, Lz77Method::Stack, |_| z += 1);
    z
}

/// The phrases of the greedy LZ77 parse, in text order.
pub fn lz77_parse<S, I>(text: &[u8], sa: &S, isa: &I, method: Lz77Method) -> Vec<Factor>
where
    S: IntArray + ?Sized,
    I: IntArray + ?Sized,
{
    let mut factors = Vec::new();
    parse_with(text, sa, isa, method, |f| factors.push(f));
    let phrases: Vec<Phrase> = factors.iter().map(Factor::phrase).collect();
    check_phrases_cover(&phrases, text.len().saturating_sub(1));
    factors
}
