// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bit-packed integer vectors and their on-disk format.
//!
//! SA, ISA and LCP hold values below `n`, so each entry needs only
//! `w = ⌈log₂ n⌉` bits instead of a full machine word. `IntVector` packs the
//! entries back to back into `u64` words, least significant bit first:
//!
//! ```text
//! width = 3, values = [5, 1, 6, 2]
//!
//! word 0:  ... 010 110 001 101
//!              [3] [2] [1] [0]
//! ```
//!
//! # File format
//!
//! The layout matches the sdsl `int_vector<0>` serialization, so arrays
//! produced by sdsl tools load directly:
//!
//! | Offset | Size        | Field                                  |
//! |--------|-------------|----------------------------------------|
//! | 0      | 8           | bit length `len * width` (u64 LE)      |
//! | 8      | 1           | width in bits (1..=64)                 |
//! | 9      | 8 * words   | packed data, `words = ⌈bits / 64⌉`     |

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Largest entry width.
pub const MAX_WIDTH: u8 = 64;

/// Size of the file header (bit length + width).
pub const HEADER_SIZE: usize = 9;

/// Read-only random access to an integer array.
///
/// The measures only ever need `len` and `get`, so they accept anything that
/// provides those: packed vectors in production, plain slices in tests.
pub trait IntArray {
    fn len(&self) -> usize;

    fn get(&self, index: usize) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IntArray for [usize] {
    #[inline]
    fn len(&self) -> usize {
        <[usize]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> usize {
        self[index]
    }
}

impl IntArray for Vec<usize> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> usize {
        self[index]
    }
}

/// Number of bits needed to store `max` (at least 1).
#[inline]
pub fn bits_for(max: u64) -> u8 {
    (64 - max.leading_zeros()).max(1) as u8
}

#[inline]
fn mask(width: u8) -> u64 {
    if width == MAX_WIDTH {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

#[inline]
fn words_for(bits: u64) -> usize {
    bits.div_ceil(64) as usize
}

/// A fixed-length vector of `width`-bit unsigned integers.
#[derive(Clone, PartialEq, Eq)]
pub struct IntVector {
    width: u8,
    len: usize,
    words: Vec<u64>,
}

impl IntVector {
    /// A zero-filled vector of `len` entries, `width` bits each.
    ///
    /// # Panics
    /// Panics if `width` is not in `1..=64`.
    pub fn new(len: usize, width: u8) -> Self {
        assert!(
            (1..=MAX_WIDTH).contains(&width),
            "int vector width {} out of range 1..=64",
            width
        );
        Self {
            width,
            len,
            words: vec![0; words_for(len as u64 * width as u64)],
        }
    }

    /// Pack `values` using the narrowest width that fits the largest one.
    pub fn from_values(values: &[usize]) -> Self {
        let max = values.iter().copied().max().unwrap_or(0);
        let mut vector = Self::new(values.len(), bits_for(max as u64));
        for (i, &v) in values.iter().enumerate() {
            vector.set(i, v as u64);
        }
        vector
    }

    #[inline]
    pub fn width(&self) -> u8 {
        self.width
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Read entry `index`.
    #[inline]
    pub fn get(&self, index: usize) -> u64 {
        debug_assert!(index < self.len, "index {} >= len {}", index, self.len);
        let bit = index as u64 * self.width as u64;
        let word = (bit >> 6) as usize;
        let offset = (bit & 63) as u32;

        let mut value = self.words[word] >> offset;
        if offset + self.width as u32 > 64 {
            value |= self.words[word + 1] << (64 - offset);
        }
        value & mask(self.width)
    }

    /// Overwrite entry `index`. Bits of `value` above `width` are dropped.
    #[inline]
    pub fn set(&mut self, index: usize, value: u64) {
        debug_assert!(index < self.len, "index {} >= len {}", index, self.len);
        let m = mask(self.width);
        let value = value & m;
        let bit = index as u64 * self.width as u64;
        let word = (bit >> 6) as usize;
        let offset = (bit & 63) as u32;

        self.words[word] = (self.words[word] & !(m << offset)) | (value << offset);
        if offset + self.width as u32 > 64 {
            let spill = 64 - offset;
            let high_mask = m >> spill;
            self.words[word + 1] = (self.words[word + 1] & !high_mask) | (value >> spill);
        }
    }

    /// Iterate over all entries in order.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        (0..self.len).map(move |i| self.get(i))
    }

    /// Largest entry (0 for an empty vector).
    pub fn max_value(&self) -> u64 {
        self.iter().max().unwrap_or(0)
    }

    /// Unpack into a plain vector.
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().map(|v| v as usize).collect()
    }

    /// Serialize in the sdsl-compatible format.
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        let bits = self.len as u64 * self.width as u64;
        w.write_all(&bits.to_le_bytes())?;
        w.write_all(&[self.width])?;
        for word in &self.words {
            w.write_all(&word.to_le_bytes())?;
        }
        Ok(())
    }

    /// Deserialize from the sdsl-compatible format.
    ///
    /// Returns an error if:
    /// - The header is truncated or the width is outside `1..=64`
    /// - The bit length is not a multiple of the width
    /// - Fewer data words follow than the header announces
    pub fn read_from<R: Read>(r: &mut R) -> io::Result<Self> {
        let mut header = [0u8; HEADER_SIZE];
        r.read_exact(&mut header)?;

        let mut bits_bytes = [0u8; 8];
        bits_bytes.copy_from_slice(&header[..8]);
        let bits = u64::from_le_bytes(bits_bytes);
        let width = header[8];

        if width == 0 || width > MAX_WIDTH {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("int vector width {} out of range 1..=64", width),
            ));
        }
        if bits % width as u64 != 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("bit length {} is not a multiple of width {}", bits, width),
            ));
        }
        let len = usize::try_from(bits / width as u64).map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("int vector of {} bits does not fit in memory", bits),
            )
        })?;

        // Grow the buffer only as data actually arrives, so a corrupt header
        // cannot trigger a huge allocation up front.
        let words = words_for(bits);
        let expected = words as u64 * 8;
        let mut data = Vec::new();
        r.take(expected).read_to_end(&mut data)?;
        if (data.len() as u64) < expected {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!(
                    "int vector truncated: expected {} data bytes, found {}",
                    expected,
                    data.len()
                ),
            ));
        }

        let words = data
            .chunks_exact(8)
            .map(|chunk| {
                let mut word = [0u8; 8];
                word.copy_from_slice(chunk);
                u64::from_le_bytes(word)
            })
            .collect();

        Ok(Self { width, len, words })
    }

    /// Write to `path`, replacing any existing file.
    pub fn store(&self, path: &Path) -> io::Result<()> {
        let mut w = BufWriter::new(File::create(path)?);
        self.write_to(&mut w)?;
        w.flush()
    }

    /// Read a vector previously written by [`IntVector::store`] (or sdsl).
    pub fn load(path: &Path) -> io::Result<Self> {
        let mut r = BufReader::new(File::open(path)?);
        Self::read_from(&mut r)
    }
}

impl IntArray for IntVector {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn get(&self, index: usize) -> usize {
        IntVector::get(self, index) as usize
    }
}

impl std::fmt::Debug for IntVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const SHOWN: usize = 16;
        let mut list = f.debug_list();
        list.entries(self.iter().take(SHOWN));
        if self.len > SHOWN {
            list.entry(&format_args!("... {} more", self.len - SHOWN));
        }
        list.finish()?;
        write!(f, " (width {})", self.width)
    }
}
