// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the repmeasure command-line interface.
//!
//! One command, positional arguments in the order the measurement needs
//! them: the input file, an optional prefix length, and optional precomputed
//! suffix array and LCP files. Everything else is a flag.

pub mod display;
pub mod progress;

use std::path::PathBuf;

use clap::Parser;
use repmeasure::{Lz77Method, Options};

#[derive(Parser, Debug)]
#[command(
    name = "repmeasure",
    about = "Compute string-complexity measures (σ, H₀, r, z78, z77, δ) of a file",
    version
)]
pub struct Cli {
    /// Input file (must not contain zero bytes, except one at the very end)
    pub file: PathBuf,

    /// Only measure the first PREFIX bytes (0 or absent: the whole file)
    pub prefix: Option<u64>,

    /// Precomputed suffix array (int_vector file) to use instead of building one
    pub sa_path: Option<PathBuf>,

    /// Precomputed LCP array (int_vector file) to use instead of building one
    pub lcp_path: Option<PathBuf>,

    /// Print the report as a JSON object instead of the RESULT line
    #[arg(long)]
    pub json: bool,

    /// Suppress progress output on stderr
    #[arg(short, long)]
    pub quiet: bool,

    /// Directory in which the temporary array cache is created
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Write the suffix array used by this run to PATH
    #[arg(long, value_name = "PATH")]
    pub save_sa: Option<PathBuf>,

    /// Write the LCP array used by this run to PATH
    #[arg(long, value_name = "PATH")]
    pub save_lcp: Option<PathBuf>,

    /// How the LZ77 parse finds its previous/next smaller values
    ///
    /// `stack` precomputes both arrays in one pass; `scan` walks the suffix
    /// array for every phrase and needs no extra memory.
    #[arg(long, value_name = "METHOD", default_value_t = Lz77Method::Stack)]
    pub lz77_method: Lz77Method,
}

impl Cli {
    pub fn options(&self) -> Options {
        Options {
            prefix: self.prefix,
            sa_path: self.sa_path.clone(),
            lcp_path: self.lcp_path.clone(),
            cache_dir: self.cache_dir.clone(),
            save_sa: self.save_sa.clone(),
            save_lcp: self.save_lcp.clone(),
            lz77_method: self.lz77_method,
        }
    }
}
