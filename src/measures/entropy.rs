// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Alphabet size σ and zeroth-order empirical entropy H₀.
//!
//! ```text
//! H₀(T) = Σ_c (n_c / n') · log₂(n' / n_c)      over bytes c with n_c > 0
//! ```
//!
//! The sentinel is not part of the text for this purpose.

/// Byte frequencies of a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [usize; 256],
    total: usize,
}

impl Histogram {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut counts = [0usize; 256];
        for &b in bytes {
            counts[b as usize] += 1;
        }
        Self {
            counts,
            total: bytes.len(),
        }
    }

    #[inline]
    pub fn count(&self, byte: u8) -> usize {
        self.counts[byte as usize]
    }

    /// Number of bytes counted (n').
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// σ: how many byte values occur at least once.
    pub fn alphabet_size(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// H₀ in bits per symbol; 0 for the empty text.
    pub fn entropy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let n = self.total as f64;
        self.counts
            .iter()
            .filter(|&&c| c > 0)
            .map(|&c| {
                let c = c as f64;
                (c / n) * (n / c).log2()
            })
            .sum()
    }
}

/// σ and H₀ of `body` (the text without its sentinel).
pub fn alphabet_and_entropy(body: &[u8]) -> (usize, f64) {
    let hist = Histogram::from_bytes(body);
    (hist.alphabet_size(), hist.entropy())
}
