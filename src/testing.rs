// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests, benches and
//! fuzz targets.
//!
//! This module is always compiled but hidden from documentation.
//! The helpers panic on bad input; they are for tests only.

#![doc(hidden)]

use crate::lcp::build_lcp;
use crate::sais::{build_suffix_array, inverse_suffix_array};
use crate::text::{Text, SENTINEL};

/// Replace zero bytes so arbitrary input becomes a valid body.
pub fn strip_zeros(bytes: &[u8]) -> Vec<u8> {
    bytes
        .iter()
        .map(|&b| if b == SENTINEL { 1 } else { b })
        .collect()
}

/// A sentinel-terminated text for `body`.
///
/// # Panics
/// Panics if `body` contains a zero byte anywhere but at the end.
pub fn text(body: &[u8]) -> Text {
    match Text::from_bytes(body.to_vec()) {
        Ok(text) => text,
        Err(e) => panic!("invalid test text: {}", e),
    }
}

/// A text together with its derived arrays, as plain vectors.
pub struct Arrays {
    pub text: Text,
    pub sa: Vec<usize>,
    pub isa: Vec<usize>,
    pub lcp: Vec<usize>,
}

/// Build SA, ISA and LCP for `body`.
pub fn arrays(body: &[u8]) -> Arrays {
    let text = text(body);
    let sa = build_suffix_array(&text);
    let isa = inverse_suffix_array(&sa).to_vec();
    let lcp = build_lcp(&text, &sa).to_vec();
    Arrays {
        text,
        sa: sa.to_vec(),
        isa,
        lcp,
    }
}

/// `a` repeated `n` times.
pub fn unary(n: usize) -> Vec<u8> {
    vec![b'a'; n]
}

/// The Fibonacci word prefix of length `n` over {a, b}.
///
/// Highly repetitive: z77 and r grow logarithmically.
pub fn fibonacci_word(n: usize) -> Vec<u8> {
    let mut prev = b"a".to_vec();
    let mut cur = b"ab".to_vec();
    while cur.len() < n {
        let next = [cur.as_slice(), prev.as_slice()].concat();
        prev = cur;
        cur = next;
    }
    cur.truncate(n);
    cur
}

/// Deterministic pseudo-random bytes from `b'a'..b'a' + sigma` (xorshift64).
pub fn random_text(len: usize, sigma: u8, seed: u64) -> Vec<u8> {
    let sigma = sigma.clamp(1, 26) as u64;
    let mut state = seed | 1;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            b'a' + (state % sigma) as u8
        })
        .collect()
}
