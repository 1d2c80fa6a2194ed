//! Derived draws.
//!
//! Wider integers, bounded integers, floats and permutations, all built on
//! `Tinymt32::next_u32`. Bounded draws use rejection sampling, so they may
//! consume more than one step of the underlying sequence.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::error::{Error, Result};
use crate::generator::Tinymt32;

impl Tinymt32 {
    /// Returns a 64-bit value made of two draws, the first in the low word.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let lo = self.next_u32() as u64;
        let hi = self.next_u32() as u64;
        (hi << 32) | lo
    }

    /// Returns a non-negative 63-bit integer.
    pub fn int63(&mut self) -> i64 {
        (self.next_u64() >> 1) as i64
    }

    /// Returns a non-negative 31-bit integer.
    pub fn int31(&mut self) -> i32 {
        (self.next_u32() >> 1) as i32
    }

    /// Returns a uniform value in `[0, bound)`.
    pub fn below(&mut self, bound: u32) -> Result<u32> {
        if bound == 0 {
            return Err(Error::EmptyRange { low: 0, high: 0 });
        }
        Ok(self.sample_below(bound))
    }

    /// Returns a uniform value in `[low, high)`.
    pub fn range(&mut self, low: u32, high: u32) -> Result<u32> {
        if low >= high {
            return Err(Error::EmptyRange { low, high });
        }
        Ok(low + self.sample_below(high - low))
    }

    /// Returns a float in `[0.0, 1.0)` with 53 random bits.
    pub fn float64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Returns a float in `[0.0, 1.0)` with 24 random bits.
    pub fn float32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Shuffles `items` in place (Fisher-Yates).
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.index(i + 1);
            items.swap(i, j);
        }
    }

    /// Returns a random permutation of `0..n`.
    pub fn perm(&mut self, n: usize) -> Vec<usize> {
        let mut result: Vec<usize> = (0..n).collect();
        self.shuffle(&mut result);
        result
    }

    /// Uniform in `[0, bound)` for `bound > 0`.
    ///
    /// Draws below `2^32 mod bound` are rejected so every residue is
    /// equally likely.
    fn sample_below(&mut self, bound: u32) -> u32 {
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let r = self.next_u32();
            if r >= threshold {
                return r % bound;
            }
        }
    }

    fn sample_below_u64(&mut self, bound: u64) -> u64 {
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let r = self.next_u64();
            if r >= threshold {
                return r % bound;
            }
        }
    }

    /// Uniform index in `[0, bound)` for `bound > 0`.
    fn index(&mut self, bound: usize) -> usize {
        match u32::try_from(bound) {
            Ok(b) => self.sample_below(b) as usize,
            Err(_) => self.sample_below_u64(bound as u64) as usize,
        }
    }
}
