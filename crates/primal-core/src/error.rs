// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use thiserror::Error;

/// Errors produced by sieving and by the prime queries.
#[derive(Debug, Error)]
pub enum PrimalError {
    /// Prime indices are 1-based; there is no 0th prime.
    #[error("Prime indices start at 1; there is no prime #0.")]
    InvalidIndex,
    /// The sieve table for this ceiling cannot be addressed or allocated.
    #[error("Sieve ceiling {ceiling} is too large to allocate.")]
    CeilingTooLarge {
        /// Ceiling that was requested.
        ceiling: u64,
    },
    /// Writing query output failed.
    #[error("failed to write output")]
    Io(#[from] std::io::Error),
}
