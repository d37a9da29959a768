// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text loading.
//!
//! Every measure works on the same byte string: the (possibly truncated) file
//! contents followed by exactly one sentinel byte `0`. The sentinel sorts
//! before every other byte, which is what makes the suffix array well defined.
//!
//! ```text
//! file:  m i s s i s s i p p i
//! text:  m i s s i s s i p p i $      ($ = 0, n = 12, n' = 11)
//! ```
//!
//! # INVARIANTS
//!
//! 1. **SENTINEL_LAST**: `bytes[n - 1] == 0`
//! 2. **SENTINEL_UNIQUE**: no other position holds `0`

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::types::MeasureError;

/// The terminal symbol, strictly smaller than every byte in the text.
pub const SENTINEL: u8 = 0;

/// An immutable text with its sentinel appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    bytes: Vec<u8>,
}

impl Text {
    /// Wrap raw file contents.
    ///
    /// A trailing zero byte is taken as the sentinel; otherwise one is
    /// appended. Any other zero byte is rejected.
    pub fn from_bytes(mut bytes: Vec<u8>) -> Result<Self, MeasureError> {
        let body_len = match bytes.last() {
            Some(&SENTINEL) => bytes.len() - 1,
            _ => bytes.len(),
        };

        if let Some(position) = bytes[..body_len].iter().position(|&b| b == SENTINEL) {
            return Err(MeasureError::InteriorZero { position });
        }

        if body_len == bytes.len() {
            bytes.push(SENTINEL);
        }

        Ok(Self { bytes })
    }

    /// All `n` bytes, sentinel included.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The `n'` bytes of the original text, sentinel excluded.
    #[inline]
    pub fn body(&self) -> &[u8] {
        &self.bytes[..self.bytes.len() - 1]
    }

    /// `n`, the length including the sentinel. Never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `n'`, the length the measures are reported for.
    #[inline]
    pub fn body_len(&self) -> usize {
        self.bytes.len() - 1
    }

    /// True when the file was empty (only the sentinel remains).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.body_len() == 0
    }
}

/// Read at most `prefix` bytes of `path` (the whole file for `None` or 0).
pub fn load_text(path: &Path, prefix: Option<u64>) -> Result<Text, MeasureError> {
    let file = File::open(path).map_err(|e| MeasureError::io(path, e))?;

    let limit = prefix.filter(|&p| p > 0).unwrap_or(u64::MAX);
    let mut bytes = Vec::new();
    file.take(limit)
        .read_to_end(&mut bytes)
        .map_err(|e| MeasureError::io(path, e))?;

    Text::from_bytes(bytes)
}
