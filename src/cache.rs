// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scratch directory for arrays spilled to disk during a run.
//!
//! The pipeline holds SA, ISA and LCP in memory together only while it has
//! to. Before the δ kernel runs, the LCP is written out here and SA/ISA are
//! dropped, so the peak is never all three plus the δ counters.
//!
//! The directory is owned by the `Cache` value and removed with everything
//! in it on drop, including when a run fails halfway. Files passed in by the
//! user (`SA_PATH`, `LCP_PATH`) never live here and are never removed.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::int_vector::IntVector;
use crate::types::MeasureError;

/// A run-scoped directory of named `IntVector` files.
pub struct Cache {
    dir: TempDir,
}

impl Cache {
    /// Create a fresh cache under the system temp dir, or under `parent`.
    pub fn new(parent: Option<&Path>) -> Result<Self, MeasureError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("repmeasure-");
        let dir = match parent {
            Some(parent) => builder
                .tempdir_in(parent)
                .map_err(|e| MeasureError::io(parent, e))?,
            None => builder
                .tempdir()
                .map_err(|e| MeasureError::io(std::env::temp_dir(), e))?,
        };
        Ok(Self { dir })
    }

    /// File path used for the array called `name`.
    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(format!("{}.iv", name))
    }

    /// Write `values` under `name`, replacing any earlier version.
    pub fn store(&self, name: &str, values: &IntVector) -> Result<(), MeasureError> {
        let path = self.file(name);
        values.store(&path).map_err(|e| MeasureError::io(path, e))
    }

    pub fn load(&self, name: &str) -> Result<IntVector, MeasureError> {
        let path = self.file(name);
        IntVector::load(&path).map_err(|e| MeasureError::io(path, e))
    }

    /// Delete the array called `name`; a missing entry is not an error.
    pub fn remove(&self, name: &str) -> Result<(), MeasureError> {
        let path = self.file(name);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(MeasureError::io(path, e)),
        }
    }
}
