// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! End-to-end measurement of one file.
//!
//! ```text
//!  A load text ─▶ B SA (+ISA) ─▶ D σ, H₀ ─▶ E r ─▶ F z78
//!                                                   │
//!          H δ ◀── G z77 ◀── C LCP ◀────────────────┘
//! ```
//!
//! Phases run strictly in this order and each reads only what earlier
//! phases produced. Memory is bounded by spilling through a [`Cache`]:
//!
//! - ISA is built with SA, written out at once and read back only for G.
//! - LCP is written out as soon as C finishes; SA and ISA are gone before
//!   H reads LCP back.
//!
//! Precomputed SA/LCP files are validated before use. They are inputs, so
//! they are never written to or removed.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::cache::Cache;
use crate::int_vector::IntVector;
use crate::lcp::build_lcp;
use crate::measures::{
    alphabet_and_entropy, bwt_runs, delta, lz77_phrases, lz77_phrases_stack, lz78_phrases,
    Lz77Method,
};
use crate::sais::{build_suffix_array, inverse_suffix_array};
use crate::text::{load_text, Text};
use crate::types::{MeasureError, Report};
use crate::verify::{validate_lcp, validate_suffix_array};

const ISA_KEY: &str = "isa";
const LCP_KEY: &str = "lcp";

/// The stages of a run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    LoadText,
    SuffixArray,
    Histogram,
    BwtRuns,
    Lz78,
    Lcp,
    Lz77,
    Delta,
}

impl Phase {
    pub const ALL: [Phase; 8] = [
        Phase::LoadText,
        Phase::SuffixArray,
        Phase::Histogram,
        Phase::BwtRuns,
        Phase::Lz78,
        Phase::Lcp,
        Phase::Lz77,
        Phase::Delta,
    ];

    /// Short human-readable name, used for progress output.
    pub fn label(self) -> &'static str {
        match self {
            Phase::LoadText => "loading text",
            Phase::SuffixArray => "suffix array",
            Phase::Histogram => "alphabet and entropy",
            Phase::BwtRuns => "BWT runs",
            Phase::Lz78 => "LZ78 parse",
            Phase::Lcp => "LCP array",
            Phase::Lz77 => "LZ77 parse",
            Phase::Delta => "delta",
        }
    }
}

/// Hooks called around every phase. All default to doing nothing.
///
/// Every `phase_started` is followed by exactly one of `phase_finished` or
/// `phase_failed`. After a failure no further phase starts.
pub trait Observer {
    fn phase_started(&mut self, _phase: Phase) {}
    fn phase_finished(&mut self, _phase: Phase, _elapsed: Duration) {}
    fn phase_failed(&mut self, _phase: Phase) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Observer for Silent {}

/// Knobs for a run. The default measures the whole file from scratch.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Read only this many bytes (`None` or 0: whole file).
    pub prefix: Option<u64>,
    /// Use this suffix array instead of building one.
    pub sa_path: Option<PathBuf>,
    /// Use this LCP array instead of building one.
    pub lcp_path: Option<PathBuf>,
    /// Parent directory for the scratch cache (system temp dir otherwise).
    pub cache_dir: Option<PathBuf>,
    /// Write the suffix array of this run here.
    pub save_sa: Option<PathBuf>,
    /// Write the LCP array of this run here.
    pub save_lcp: Option<PathBuf>,
    pub lz77_method: Lz77Method,
}

/// Runs the phases for one input and reports every phase to an [`Observer`].
pub struct Measurer<O: Observer = Silent> {
    options: Options,
    observer: O,
}

impl Measurer<Silent> {
    pub fn new(options: Options) -> Self {
        Self::with_observer(options, Silent)
    }
}

impl<O: Observer> Measurer<O> {
    pub fn with_observer(options: Options, observer: O) -> Self {
        Self { options, observer }
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Load `path` (honouring the prefix) and measure it.
    pub fn run(&mut self, path: &Path) -> Result<Report, MeasureError> {
        let prefix = self.options.prefix;
        let text = timed(&mut self.observer, Phase::LoadText, || {
            load_text(path, prefix)
        })?;
        self.run_text(&path.display().to_string(), &text)
    }

    /// Measure an already loaded text; `file` only labels the report.
    pub fn run_text(&mut self, file: &str, text: &Text) -> Result<Report, MeasureError> {
        let options = &self.options;
        let observer = &mut self.observer;
        let cache = Cache::new(options.cache_dir.as_deref())?;

        // B
        let sa = timed(observer, Phase::SuffixArray, || {
            let sa = match &options.sa_path {
                Some(path) => load_suffix_array(path, text)?,
                None => build_suffix_array(text),
            };
            cache.store(ISA_KEY, &inverse_suffix_array(&sa))?;
            Ok(sa)
        })?;
        if let Some(path) = &options.save_sa {
            sa.store(path).map_err(|e| MeasureError::io(path, e))?;
        }

        // D, E, F
        let (sigma, h0) = timed(observer, Phase::Histogram, || {
            Ok(alphabet_and_entropy(text.body()))
        })?;
        let r = timed(observer, Phase::BwtRuns, || Ok(bwt_runs(text.as_bytes(), &sa)))?;
        let z78 = timed(observer, Phase::Lz78, || Ok(lz78_phrases(text.body())))?;

        // C
        timed(observer, Phase::Lcp, || {
            let lcp = match &options.lcp_path {
                Some(path) => load_lcp(path, text, &sa)?,
                None => build_lcp(text, &sa),
            };
            if let Some(path) = &options.save_lcp {
                lcp.store(path).map_err(|e| MeasureError::io(path, e))?;
            }
            cache.store(LCP_KEY, &lcp)
        })?;

        // G
        let z77 = timed(observer, Phase::Lz77, || {
            let isa = cache.load(ISA_KEY)?;
            let z77 = match options.lz77_method {
                Lz77Method::Scan => lz77_phrases(text.as_bytes(), &sa, &isa),
                Lz77Method::Stack => lz77_phrases_stack(text.as_bytes(), &sa, &isa),
            };
            cache.remove(ISA_KEY)?;
            Ok(z77)
        })?;
        drop(sa);

        // H
        let delta = timed(observer, Phase::Delta, || {
            let lcp = cache.load(LCP_KEY)?;
            let delta = delta(&lcp);
            cache.remove(LCP_KEY)?;
            Ok(delta)
        })?;

        Ok(Report {
            file: file.to_string(),
            n: text.body_len(),
            sigma,
            h0,
            r,
            z78,
            z77,
            delta,
        })
    }
}

/// Measure `path` with default options and no progress output.
pub fn measure_file(path: &Path) -> Result<Report, MeasureError> {
    Measurer::new(Options::default()).run(path)
}

fn timed<O, T>(
    observer: &mut O,
    phase: Phase,
    f: impl FnOnce() -> Result<T, MeasureError>,
) -> Result<T, MeasureError>
where
    O: Observer,
{
    observer.phase_started(phase);
    let start = Instant::now();
    match f() {
        Ok(result) => {
            observer.phase_finished(phase, start.elapsed());
            Ok(result)
        }
        Err(e) => {
            observer.phase_failed(phase);
            Err(e)
        }
    }
}

fn load_suffix_array(path: &Path, text: &Text) -> Result<IntVector, MeasureError> {
    let sa = IntVector::load(path).map_err(|e| MeasureError::io(path, e))?;
    validate_suffix_array(text.as_bytes(), &sa).map_err(|source| MeasureError::InvalidArray {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(sa)
}

fn load_lcp(path: &Path, text: &Text, sa: &IntVector) -> Result<IntVector, MeasureError> {
    let lcp = IntVector::load(path).map_err(|e| MeasureError::io(path, e))?;
    validate_lcp(text.as_bytes(), sa, &lcp).map_err(|source| MeasureError::InvalidArray {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(lcp)
}
