// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! primal-core: prime sieving, primality classification and prime queries.
//!
//! The crate is split leaf-first:
//!
//! - [`sieve`](mod@sieve) produces every prime up to an inclusive ceiling.
//! - [`primality`] classifies a single number, with a cheap fast path ahead of
//!   one of two interchangeable fallbacks ([`Strategy`]).
//! - [`query`] renders the three user-facing queries (list, index, test) as
//!   line-oriented text on any [`std::io::Write`] sink.
//!
//! Everything is synchronous and allocation-bounded by the requested ceiling.
//! Nothing is cached between calls.
#![forbid(unsafe_code)]

mod error;
pub mod primality;
pub mod query;
pub mod sieve;

pub use error::PrimalError;
pub use primality::{
    classify, classify_with, division_test, is_prime, preliminary_check, sieve_test, Primality,
    Strategy,
};
pub use query::{estimate_ceiling, index, list, nth_prime, test, QueryOptions, Retry};
pub use sieve::{sieve, PrimeSequence};
