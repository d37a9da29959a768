// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core types shared by the measures, the pipeline and the CLI.
//!
//! `Report` is the one thing a run produces. `MeasureError` is the one thing
//! a run can fail with. Everything in between is plain integer arrays.

use std::fmt;
use std::io;
use std::path::PathBuf;

use serde::Serialize;

use crate::verify::InvariantError;

/// The bundle of measures computed for one text.
///
/// `Display` renders the single `RESULT` line; `Serialize` renders the same
/// fields for `--json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Path of the input file as given on the command line.
    pub file: String,
    /// Text length without the sentinel.
    pub n: usize,
    /// Number of distinct bytes.
    pub sigma: usize,
    /// Zeroth-order empirical entropy in bits per symbol.
    pub h0: f64,
    /// Run boundaries of the BWT (sentinel adjacency excluded).
    pub r: usize,
    /// LZ78 phrase count.
    pub z78: usize,
    /// Greedy LZ77 phrase count.
    pub z77: usize,
    /// Substring complexity.
    pub delta: f64,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RESULT file={} n={} sigma={} h0={:.6} r={} z78={} z77={} delta={:.6}",
            self.file, self.n, self.sigma, self.h0, self.r, self.z78, self.z77, self.delta
        )
    }
}

/// Why a run failed.
#[derive(Debug)]
pub enum MeasureError {
    /// The text contains a zero byte before its last position.
    InteriorZero { position: usize },
    /// Reading or writing a file failed (input text, array file or cache).
    Io { path: PathBuf, source: io::Error },
    /// A precomputed array loaded from disk does not fit the text.
    InvalidArray {
        path: PathBuf,
        source: InvariantError,
    },
}

impl MeasureError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        MeasureError::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit status for this failure.
    ///
    /// Interior zeros get their own status (-2) so scripts can tell a bad
    /// input apart from a broken environment.
    pub fn exit_code(&self) -> i32 {
        match self {
            MeasureError::InteriorZero { .. } => -2,
            MeasureError::Io { .. } | MeasureError::InvalidArray { .. } => 1,
        }
    }
}

impl fmt::Display for MeasureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeasureError::InteriorZero { position } => write!(
                f,
                "the input file must not contain any zero bytes (found one at offset {})",
                position
            ),
            MeasureError::Io { path, source } => {
                write!(f, "{}: {}", path.display(), source)
            }
            MeasureError::InvalidArray { path, source } => {
                write!(f, "{}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for MeasureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MeasureError::InteriorZero { .. } => None,
            MeasureError::Io { source, .. } => Some(source),
            MeasureError::InvalidArray { source, .. } => Some(source),
        }
    }
}
