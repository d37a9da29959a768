// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Validation of loaded suffix arrays and LCP arrays.
//!
//! The suffix array check is exact, so anything it accepts must be the
//! array SA-IS builds. The LCP check is a bound check; anything it accepts
//! must at least be safe to feed to the δ kernel.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use repmeasure::testing::strip_zeros;
use repmeasure::{build_suffix_array, delta, validate_lcp, validate_suffix_array, Text};

#[derive(Arbitrary, Debug)]
struct Input {
    body: Vec<u8>,
    sa: Vec<u16>,
    lcp: Vec<u16>,
}

fuzz_target!(|input: Input| {
    let Ok(text) = Text::from_bytes(strip_zeros(&input.body)) else {
        return;
    };
    let sa: Vec<usize> = input.sa.iter().map(|&v| v as usize).collect();
    let lcp: Vec<usize> = input.lcp.iter().map(|&v| v as usize).collect();

    if validate_suffix_array(text.as_bytes(), &sa).is_ok() {
        assert_eq!(sa, build_suffix_array(&text).to_vec());

        if validate_lcp(text.as_bytes(), &sa, &lcp).is_ok() {
            let d = delta(&lcp);
            assert!(d.is_finite() && d >= 0.0);
        }
    }
});
