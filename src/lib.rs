// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String-complexity measures of a byte string, computed from its suffix array.
//!
//! For a text `T` of `n'` bytes this crate computes the alphabet size σ, the
//! empirical entropy H₀, the number `r` of BWT runs, the LZ78 and LZ77 parse
//! sizes `z78` and `z77`, and the substring complexity δ. The text is closed
//! by a zero sentinel, so it must not contain zero bytes itself.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐    ┌───────────┐    ┌──────────┐
//! │ text.rs  │───▶│  sais.rs  │───▶│  lcp.rs  │
//! │ (Text,   │    │ (SA, ISA) │    │  (PHI)   │
//! │ sentinel)│    └───────────┘    └──────────┘
//! └──────────┘          │                │
//!       │               ▼                ▼
//!       │     ┌─────────────────────────────────┐
//!       └────▶│            measures/            │
//!             │ entropy · bwt · lz78 · lz77 · δ │
//!             └─────────────────────────────────┘
//!                             │
//!                             ▼
//!             ┌─────────────────────────────────┐
//!             │           pipeline.rs           │
//!             │  Measurer: phase order, cache,  │
//!             │  loaded-array validation        │
//!             └─────────────────────────────────┘
//! ```
//!
//! Arrays are stored bit-packed in [`IntVector`] and can be written to and
//! read from disk, so a suffix array built once can be reused.
//!
//! # Usage
//!
//! ```ignore
//! use repmeasure::{Measurer, Options};
//!
//! let report = Measurer::new(Options::default()).run(Path::new("input.txt"))?;
//! println!("{}", report); // RESULT file=input.txt n=... sigma=... ...
//! ```

pub mod cache;
pub mod contracts;
pub mod int_vector;
pub mod lcp;
pub mod measures;
pub mod pipeline;
pub mod sais;
pub mod text;
mod types;
pub mod verify;

pub mod testing;

pub use cache::Cache;
pub use int_vector::{IntArray, IntVector};
pub use lcp::build_lcp;
pub use measures::{
    alphabet_and_entropy, bwt_runs, delta, lz77_parse, lz77_phrases, lz77_phrases_stack,
    lz78_parse, lz78_phrases, substring_complexity_profile, Factor, Lz77Method, Phrase,
};
pub use pipeline::{measure_file, Measurer, Observer, Options, Phase, Silent};
pub use sais::{build_suffix_array, inverse_suffix_array};
pub use text::{load_text, Text, SENTINEL};
pub use types::{MeasureError, Report};
pub use verify::{validate_lcp, validate_suffix_array, InvariantError};
