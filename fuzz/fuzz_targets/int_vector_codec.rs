// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! int_vector file parsing under adversarial input.
//!
//! Array files come from the command line, so a corrupt or hostile one must
//! end in an error, never a panic or a huge allocation: headers announcing
//! 2^64 bits, widths of 0 or 200, bit lengths that do not divide evenly.

#![no_main]

use libfuzzer_sys::fuzz_target;
use repmeasure::IntVector;

fuzz_target!(|data: &[u8]| {
    let Ok(v) = IntVector::read_from(&mut &data[..]) else {
        return;
    };

    // Whatever parsed must serialize back to the bytes it came from
    let mut bytes = Vec::new();
    v.write_to(&mut bytes).unwrap();
    assert_eq!(&bytes[..], &data[..bytes.len()]);

    for i in 0..v.len() {
        let _ = v.get(i);
    }
});
