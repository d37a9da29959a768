// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Validation of arrays that come from outside the process.
//!
//! A suffix array or LCP array loaded from disk may belong to a different
//! file, a different prefix length, or be plain garbage. Feeding one of those
//! to the kernels would produce confident nonsense (or an index panic), so
//! loaded arrays are checked once, up front, in release builds too.
//!
//! | Check                    | Cost  | Catches                              |
//! |--------------------------|-------|--------------------------------------|
//! | `validate_suffix_array`  | O(n)  | wrong length, range, duplicates, order |
//! | `validate_lcp`           | O(n)  | wrong length, impossible values      |
//!
//! The suffix array check is exact. The LCP check is not (an exact check
//! costs as much as rebuilding the array) but rejects everything that would
//! make the δ kernel index out of bounds.

use std::fmt;

use crate::int_vector::IntArray;
use crate::text::SENTINEL;

/// Error type for invariant violations in loaded arrays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// Array length differs from the text length `n`.
    LengthMismatch {
        array: &'static str,
        expected: usize,
        actual: usize,
    },
    /// An entry is not a valid text position.
    OutOfRange {
        array: &'static str,
        position: usize,
        value: usize,
        bound: usize,
    },
    /// The same text position appears twice in the suffix array.
    DuplicateEntry { position: usize, value: usize },
    /// Adjacent suffixes are not in strictly increasing order.
    UnsortedSuffixArray { position: usize },
    /// `lcp[i]` claims more shared bytes than the two suffixes could share.
    ImpossibleLcp {
        position: usize,
        value: usize,
        bound: usize,
    },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::LengthMismatch {
                array,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{} has {} entries but the text has {} (sentinel included)",
                    array, actual, expected
                )
            }
            InvariantError::OutOfRange {
                array,
                position,
                value,
                bound,
            } => {
                write!(f, "{}[{}] = {} >= {}", array, position, value, bound)
            }
            InvariantError::DuplicateEntry { position, value } => {
                write!(f, "sa[{}] = {} appears more than once", position, value)
            }
            InvariantError::UnsortedSuffixArray { position } => {
                write!(f, "suffix array not sorted at position {}", position)
            }
            InvariantError::ImpossibleLcp {
                position,
                value,
                bound,
            } => {
                write!(
                    f,
                    "lcp[{}] = {} but the suffixes can share at most {}",
                    position, value, bound
                )
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// Check that `sa` is the suffix array of the sentinel-terminated `text`.
///
/// Exact: a permutation whose adjacent pairs are strictly ordered, decided
/// with the rank of the following suffix (see `contracts`).
pub fn validate_suffix_array<A: IntArray + ?Sized>(
    text: &[u8],
    sa: &A,
) -> Result<(), InvariantError> {
    let n = text.len();
    if sa.len() != n {
        return Err(InvariantError::LengthMismatch {
            array: "sa",
            expected: n,
            actual: sa.len(),
        });
    }

    let mut rank = vec![usize::MAX; n];
    for i in 0..n {
        let value = sa.get(i);
        if value >= n {
            return Err(InvariantError::OutOfRange {
                array: "sa",
                position: i,
                value,
                bound: n,
            });
        }
        if rank[value] != usize::MAX {
            return Err(InvariantError::DuplicateEntry { position: i, value });
        }
        rank[value] = i;
    }

    for i in 1..n {
        let a = sa.get(i - 1);
        let b = sa.get(i);
        let ordered = text[a] < text[b]
            || (text[a] == text[b] && text[a] != SENTINEL && rank[a + 1] < rank[b + 1]);
        if !ordered {
            return Err(InvariantError::UnsortedSuffixArray { position: i });
        }
    }

    Ok(())
}

/// Check that `lcp` is plausible for `text` and its (valid) suffix array.
///
/// Rejects wrong lengths and any value that exceeds what the two suffixes
/// can share: `lcp[i] <= n - 1 - max(sa[i-1], sa[i])` (the sentinel never
/// matches), and `lcp[i] = 0` whenever the first bytes differ.
pub fn validate_lcp<A, B>(text: &[u8], sa: &A, lcp: &B) -> Result<(), InvariantError>
where
    A: IntArray + ?Sized,
    B: IntArray + ?Sized,
{
    let n = text.len();
    if lcp.len() != n {
        return Err(InvariantError::LengthMismatch {
            array: "lcp",
            expected: n,
            actual: lcp.len(),
        });
    }

    for i in 1..n {
        let a = sa.get(i - 1);
        let b = sa.get(i);
        let value = lcp.get(i);
        let bound = if text[a] == text[b] {
            n - 1 - a.max(b)
        } else {
            0
        };
        if value > bound {
            return Err(InvariantError::ImpossibleLcp {
                position: i,
                value,
                bound,
            });
        }
    }

    Ok(())
}
