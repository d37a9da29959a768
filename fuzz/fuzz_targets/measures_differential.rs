// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Differential checks between kernels that must agree.
//!
//! - Scan and stack LZ77 produce the same parse.
//! - Both parses tile the body and every copy really matches its source.
//! - The d_k profile ends at 1 and δ is its maximum ratio.

#![no_main]

use libfuzzer_sys::fuzz_target;
use repmeasure::testing::{arrays, strip_zeros};
use repmeasure::{
    delta, lz77_parse, lz78_parse, substring_complexity_profile, Lz77Method,
};

fuzz_target!(|data: &[u8]| {
    if data.len() > 4096 {
        return;
    }
    let body = strip_zeros(data);
    let a = arrays(&body);
    let bytes = a.text.as_bytes();

    let scan = lz77_parse(bytes, &a.sa, &a.isa, Lz77Method::Scan);
    let stack = lz77_parse(bytes, &a.sa, &a.isa, Lz77Method::Stack);
    assert_eq!(scan, stack);
    for f in &stack {
        if let Some(j) = f.source {
            assert!(j < f.start);
            assert_eq!(body[j..j + f.len], body[f.start..f.start + f.len]);
        }
    }

    let covered: usize = lz78_parse(&body).iter().map(|p| p.len).sum();
    assert_eq!(covered, body.len());

    let profile = substring_complexity_profile(&a.lcp);
    if let Some(&last) = profile.last() {
        assert_eq!(last, 1);
        let best = profile
            .iter()
            .enumerate()
            .map(|(k, &d)| d as f64 / (k + 1) as f64)
            .fold(0.0, f64::max);
        assert_eq!(best, delta(&a.lcp));
    }
});
