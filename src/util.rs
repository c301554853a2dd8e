//! Shared utilities

use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{RasterError, Result};

/// Source of uniform indices for the collage composer.
///
/// Passed explicitly so a fixed seed (or a scripted sequence in tests)
/// reproduces the same collage.
pub trait RandomSource {
    /// Uniform index in `0..len`. `len` is always non-zero.
    fn next_index(&mut self, len: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_index(&mut self, len: usize) -> usize {
        (**self).next_index(len)
    }
}

/// Simple deterministic RNG using xorshift64
pub struct Rng {
    state: u64,
}

impl Rng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self { state: seed.max(1) } // Ensure non-zero
    }

    /// Seed from the wall clock, for runs without a configured seed
    pub fn from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x9E37_79B9_7F4A_7C15);
        Self::new(nanos)
    }

    /// Get the next random u64
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Uniform u64 in `0..bound` by rejection, so small bounds carry no modulo bias
    pub fn below(&mut self, bound: u64) -> u64 {
        debug_assert!(bound > 0, "below: bound must be non-zero");
        let zone = u64::MAX - (u64::MAX % bound);
        loop {
            let v = self.next_u64();
            if v < zone {
                return v % bound;
            }
        }
    }
}

impl RandomSource for Rng {
    fn next_index(&mut self, len: usize) -> usize {
        self.below(len as u64) as usize
    }
}

/// Replays a fixed list of indices, wrapping around. Indices are reduced modulo `len`.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<usize>,
    pos: usize,
}

impl SequenceSource {
    /// Fails on an empty list, which would have nothing to replay
    pub fn new(values: Vec<usize>) -> Result<Self> {
        if values.is_empty() {
            return Err(RasterError::InvalidParameter(
                "sequence source needs at least one value".into(),
            ));
        }
        Ok(Self { values, pos: 0 })
    }
}

impl RandomSource for SequenceSource {
    fn next_index(&mut self, len: usize) -> usize {
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v % len
    }
}
