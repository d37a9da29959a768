// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The measure kernels.
//!
//! Each kernel reads the text and at most one or two derived arrays, and
//! returns a scalar:
//!
//! | Kernel    | Reads          | Produces        |
//! |-----------|----------------|-----------------|
//! | `entropy` | T              | σ, H₀           |
//! | `bwt`     | T, SA          | r               |
//! | `lz78`    | T              | z78             |
//! | `lz77`    | T, SA, ISA     | z77             |
//! | `delta`   | LCP            | δ               |
//!
//! The parsers also expose their phrase lists (`lz78_parse`, `lz77_parse`)
//! for inspection and testing; the counting entry points never materialise
//! them.

pub mod bwt;
pub mod delta;
pub mod entropy;
pub mod lz77;
pub mod lz78;

pub use bwt::bwt_runs;
pub use delta::{delta, substring_complexity_profile};
pub use entropy::{alphabet_and_entropy, Histogram};
pub use lz77::{
    lz77_parse, lz77_phrases, lz77_phrases_stack, Factor, Lz77Method, SmallerValues,
};
pub use lz78::{lz78_parse, lz78_phrases, NodeId, Trie};

/// A phrase of a parse: `len` bytes starting at text position `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Phrase {
    pub start: usize,
    pub len: usize,
}

impl Phrase {
    /// Exclusive end position.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// The phrase's bytes within `text`.
    #[inline]
    pub fn bytes<'a>(&self, text: &'a [u8]) -> &'a [u8] {
        &text[self.start..self.end()]
    }
}
