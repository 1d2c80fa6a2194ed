//! # tinymt-core
//!
//! TinyMT32 pseudo-random number generator as published in RFC 8682,
//! `no_std` compatible.
//!
//! This crate provides:
//! - `Tinymt32` - The generator: seeding, state advance, tempering
//! - `params` - The fixed parameter set and algorithm constants
//! - `draw` - Integers, ranges, floats and permutations built on `next_u32`
//! - `Error` - Failures of the bounded draws and state restore
//! - `rng` - `rand_core` integration (`rand_core` feature)
//!
//! The output is predictable from the internal state. Never use it for
//! keys, nonces or anything else that has to stay secret.
//!
//! ```
//! use tinymt_core::Tinymt32;
//!
//! let mut rng = Tinymt32::new(1);
//! assert_eq!(rng.next_u32(), 2545341989);
//! assert_eq!(rng.next_u32(), 981918433);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod params;
pub mod generator;
pub mod error;
pub mod draw;
#[cfg(feature = "rand_core")]
pub mod rng;

pub use generator::Tinymt32;
pub use error::{Error, Result};
#[cfg(feature = "rand_core")]
pub use rng::Tinymt32Seed;
