//! Errors of the bounded draws and raw state restore.
//!
//! Seeding and `next_u32` never fail; only the helpers layered on top of
//! them can.

use thiserror::Error;

/// Result type of fallible generator operations.
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The low 127 bits of a restored state are all zero.
    #[error("degenerate state: low 127 bits are all zero")]
    DegenerateState,

    /// A bounded draw was asked for an empty interval.
    #[error("empty range: [{low}, {high})")]
    EmptyRange { low: u32, high: u32 },
}
