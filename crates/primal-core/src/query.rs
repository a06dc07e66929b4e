// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The three user-facing queries: list, index and test.
//!
//! Each query writes human-readable lines to a caller-supplied sink and
//! returns the value it computed. Callers that print to a terminal should wrap
//! stdout in a `BufWriter`; `list` emits one line per prime.

use std::io::Write;

use tracing::{debug, info};

use crate::{classify_with, sieve, Primality, PrimalError, Strategy};

/// Smallest ceiling the index search will sieve to.
pub const MIN_CEILING: u64 = 15;

/// Line written before each index retry when notices are enabled.
pub const RETRY_NOTICE: &str = "Increasing sieve ceiling by 10%...";

/// Knobs shared by the queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// Fallback used by [`test`].
    pub strategy: Strategy,
    /// Write [`RETRY_NOTICE`] before each index retry.
    pub retry_notice: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            retry_notice: true,
        }
    }
}

/// One failed attempt of the index search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Retry {
    /// 1-based attempt number that came up short.
    pub attempt: u32,
    /// Ceiling that was sieved.
    pub ceiling: u64,
    /// Primes found up to `ceiling`.
    pub found: usize,
    /// Ceiling the next attempt will use.
    pub next_ceiling: u64,
}

/// Write `Prime #k = p` for every prime up to `ceiling`.
///
/// Returns the number of lines written.
pub fn list<W: Write>(out: &mut W, ceiling: u64) -> Result<usize, PrimalError> {
    let primes = sieve(ceiling)?;
    for (position, prime) in (1u64..).zip(&primes) {
        writeln!(out, "Prime #{position} = {prime}")?;
    }
    Ok(primes.len())
}

/// Write `Prime #n = p` for the `n`-th prime (1-based) and return it.
pub fn index<W: Write>(out: &mut W, n: u64, options: &QueryOptions) -> Result<u64, PrimalError> {
    write_index(out, n, estimate_ceiling(n), options)
}

/// Write `<number> is prime.` (or composite, or neither) and return the class.
pub fn test<W: Write>(
    out: &mut W,
    number: u64,
    options: &QueryOptions,
) -> Result<Primality, PrimalError> {
    let primality = classify_with(number, options.strategy)?;
    writeln!(out, "{number} is {primality}.")?;
    Ok(primality)
}

/// Prime-number-theorem estimate of the `n`-th prime: `n·ln n + n·ln ln n`.
///
/// Saturates into `u64`; the degenerate inputs 0 and 1 estimate to 0, which
/// the search lifts to [`MIN_CEILING`].
pub fn estimate_ceiling(n: u64) -> u64 {
    let n = n as f64;
    let ln = n.ln();
    // Float-to-int `as` saturates and sends NaN to 0.
    (n * ln + n * ln.ln()) as u64
}

/// Find the `n`-th prime (1-based), growing the ceiling by 10% until the
/// sieve reaches it.
///
/// `on_retry` runs before every regrowth; returning an error aborts the
/// search.
pub fn nth_prime<F>(n: u64, on_retry: F) -> Result<u64, PrimalError>
where
    F: FnMut(&Retry) -> Result<(), PrimalError>,
{
    search(n, estimate_ceiling(n), on_retry)
}

fn write_index<W: Write>(
    out: &mut W,
    n: u64,
    estimate: u64,
    options: &QueryOptions,
) -> Result<u64, PrimalError> {
    let prime = search(n, estimate, |_| {
        if options.retry_notice {
            writeln!(out, "{RETRY_NOTICE}")?;
        }
        Ok(())
    })?;
    writeln!(out, "Prime #{n} = {prime}")?;
    Ok(prime)
}

fn search<F>(n: u64, estimate: u64, mut on_retry: F) -> Result<u64, PrimalError>
where
    F: FnMut(&Retry) -> Result<(), PrimalError>,
{
    if n == 0 {
        return Err(PrimalError::InvalidIndex);
    }

    let mut floor = MIN_CEILING;
    let mut attempt: u32 = 1;
    loop {
        let ceiling = estimate.max(floor);
        let primes = sieve(ceiling)?;
        if let Some(prime) = primes.nth(n) {
            debug!(n, ceiling, attempt, prime, "found nth prime");
            return Ok(prime);
        }

        let next_ceiling = grow(ceiling).ok_or(PrimalError::CeilingTooLarge { ceiling })?;
        let retry = Retry {
            attempt,
            ceiling,
            found: primes.len(),
            next_ceiling,
        };
        info!(
            n,
            ceiling,
            found = retry.found,
            next_ceiling,
            "sieve ceiling too low, retrying"
        );
        on_retry(&retry)?;

        floor = next_ceiling;
        attempt = attempt.saturating_add(1);
    }
}

/// `trunc(ceiling × 1.1)`, or `None` once the ceiling can no longer grow.
fn grow(ceiling: u64) -> Option<u64> {
    let next = (ceiling as f64 * 1.1) as u64;
    (next > ceiling).then_some(next)
}
