// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Sieve of Eratosthenes over the inclusive range `[0, ceiling]`.
//!
//! The table is one `bool` per integer. Evens above 2 are cleared up front, so
//! the marking loop only visits odd candidates and odd multiples (`i²`, then
//! steps of `2i`).

use tracing::debug;

use crate::PrimalError;

/// Strictly increasing sequence holding exactly the primes in `[2, ceiling]`.
///
/// Built fresh by every [`sieve`] call and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PrimeSequence(Vec<u64>);

impl PrimeSequence {
    /// Number of primes in the sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the ceiling was below 2.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// View the primes as a slice.
    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    /// Iterate the primes in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, u64> {
        self.0.iter()
    }

    /// The prime at 1-based position `index` (`nth(1) == Some(2)`).
    ///
    /// Returns `None` for `index == 0` and for positions past the end.
    pub fn nth(&self, index: u64) -> Option<u64> {
        let offset = usize::try_from(index.checked_sub(1)?).ok()?;
        self.0.get(offset).copied()
    }

    /// Largest prime in the sequence.
    pub fn last(&self) -> Option<u64> {
        self.0.last().copied()
    }

    /// Membership test (binary search; the sequence is sorted).
    pub fn contains(&self, number: u64) -> bool {
        self.0.binary_search(&number).is_ok()
    }

    /// Consume the sequence and return the backing vector.
    pub fn into_vec(self) -> Vec<u64> {
        self.0
    }
}

impl<'a> IntoIterator for &'a PrimeSequence {
    type Item = &'a u64;
    type IntoIter = std::slice::Iter<'a, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Compute every prime `<= ceiling`.
///
/// Ceilings below 2 yield an empty sequence. The only failure is a table that
/// cannot be addressed or allocated, reported as
/// [`PrimalError::CeilingTooLarge`]; no partial result is returned.
pub fn sieve(ceiling: u64) -> Result<PrimeSequence, PrimalError> {
    if ceiling < 2 {
        return Ok(PrimeSequence::default());
    }

    let too_large = || PrimalError::CeilingTooLarge { ceiling };
    let top = usize::try_from(ceiling).map_err(|_| too_large())?;
    let len = top.checked_add(1).ok_or_else(too_large)?;

    let mut is_prime: Vec<bool> = Vec::new();
    is_prime.try_reserve_exact(len).map_err(|_| too_large())?;
    is_prime.resize(len, true);

    // 0 and 1 are neither prime nor composite.
    is_prime[0] = false;
    is_prime[1] = false;

    // 2 stays; every other even is composite.
    for flag in is_prime.iter_mut().skip(4).step_by(2) {
        *flag = false;
    }

    // `i <= top / i` is `i * i <= ceiling` without overflow.
    let mut i = 3;
    while i <= top / i {
        if is_prime[i] {
            for flag in is_prime.iter_mut().skip(i * i).step_by(2 * i) {
                *flag = false;
            }
        }
        i += 2;
    }

    let mut primes = Vec::new();
    primes
        .try_reserve_exact(prime_count_bound(ceiling))
        .map_err(|_| too_large())?;
    primes.push(2);
    primes.extend(
        is_prime
            .iter()
            .enumerate()
            .skip(3)
            .step_by(2)
            .filter(|&(_, &flag)| flag)
            .map(|(n, _)| n as u64),
    );

    debug!(ceiling, count = primes.len(), "sieve complete");
    Ok(PrimeSequence(primes))
}

/// Upper bound on π(ceiling), used only to pre-size the output.
///
/// Rosser–Schoenfeld: π(x) < 1.25506·x/ln x for x > 1. Below 17 a constant
/// covers every case (π(16) = 6).
fn prime_count_bound(ceiling: u64) -> usize {
    if ceiling < 17 {
        return 7;
    }
    let x = ceiling as f64;
    (1.25506 * x / x.ln()) as usize + 1
}
