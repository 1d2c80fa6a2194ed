//! The TinyMT32 generator.
//!
//! A generator is an owned value. There is no process-wide instance: callers
//! keep one `Tinymt32` per stream and pass it by `&mut` to draw from it.

use crate::error::{Error, Result};
use crate::params::{
    INIT_MULTIPLIER, MASK, MAT1, MAT2, MIN_LOOP, PRE_LOOP, SH0, SH1, SH8, STATE_WORDS, TMAT,
};

/// TinyMT32 pseudo-random number generator.
///
/// Holds 127 bits of state in four 32-bit words plus a private copy of the
/// parameter set. Not safe for concurrent use without external locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tinymt32 {
    status: [u32; STATE_WORDS],
    mat1: u32,
    mat2: u32,
    tmat: u32,
}

impl Tinymt32 {
    /// Creates a generator seeded with `seed`.
    ///
    /// Every 32-bit seed is valid. Equal seeds produce equal sequences.
    pub fn new(seed: u32) -> Self {
        let mut rng = Self {
            status: [seed, MAT1, MAT2, TMAT],
            mat1: MAT1,
            mat2: MAT2,
            tmat: TMAT,
        };

        for i in 1..MIN_LOOP {
            let prev = rng.status[((i - 1) & 3) as usize];
            rng.status[(i & 3) as usize] ^=
                i.wrapping_add(INIT_MULTIPLIER.wrapping_mul(prev ^ (prev >> 30)));
        }

        // No period certification: no seed reaches the all-zero state
        // under this parameter set.
        for _ in 0..PRE_LOOP {
            rng.next_state();
        }

        rng
    }

    /// Resumes a generator from words previously returned by [`state`].
    ///
    /// Fails with [`Error::DegenerateState`] when the low 127 bits are all
    /// zero, since such a generator would never leave that state.
    ///
    /// [`state`]: Tinymt32::state
    pub fn from_state(status: [u32; STATE_WORDS]) -> Result<Self> {
        if status[0] & MASK == 0 && status[1..].iter().all(|&w| w == 0) {
            return Err(Error::DegenerateState);
        }
        Ok(Self {
            status,
            mat1: MAT1,
            mat2: MAT2,
            tmat: TMAT,
        })
    }

    /// Returns a copy of the internal state words.
    #[inline]
    pub fn state(&self) -> [u32; STATE_WORDS] {
        self.status
    }

    /// Advances the state and returns the next 32-bit value.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.next_state();
        self.temper()
    }

    /// Advances the internal state by one step.
    pub(crate) fn next_state(&mut self) {
        let mut y = self.status[3];
        let mut x = (self.status[0] & MASK) ^ self.status[1] ^ self.status[2];
        x ^= x << SH0;
        y ^= (y >> SH0) ^ x;
        self.status[0] = self.status[1];
        self.status[1] = self.status[2];
        self.status[2] = x ^ (y << SH1);
        self.status[3] = y;
        // Branch instead of `-(y & 1) & mat` masking.
        if y & 1 != 0 {
            self.status[1] ^= self.mat1;
            self.status[2] ^= self.mat2;
        }
    }

    /// Computes the output for the current state without mutating it.
    pub(crate) fn temper(&self) -> u32 {
        let mut t0 = self.status[3];
        let t1 = self.status[0].wrapping_add(self.status[2] >> SH8);
        t0 ^= t1;
        if t1 & 1 != 0 {
            t0 ^= self.tmat;
        }
        t0
    }
}
