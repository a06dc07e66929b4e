// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Primality classification.
//!
//! Every classification starts with [`preliminary_check`], which settles 0–3
//! and multiples of 2 or 3 without any real work. Survivors go to exactly one
//! fallback, chosen by [`Strategy`]:
//!
//! - [`Strategy::TrialDivision`] is O(√n) time and O(1) space. It is the
//!   default because isolated queries never need the whole table.
//! - [`Strategy::Sieve`] builds the full table up to `n` and checks whether
//!   `n` is its last entry. Only worth it when that table is wanted anyway.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::{sieve, PrimalError};

/// Tri-state classification of a non-negative integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primality {
    /// 0 and 1.
    Neither,
    /// Has a divisor other than 1 and itself.
    Composite,
    /// Exactly two divisors.
    Prime,
}

impl fmt::Display for Primality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Neither => "neither prime nor composite",
            Self::Composite => "composite",
            Self::Prime => "prime",
        })
    }
}

/// Fallback used once the preliminary check is inconclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Strategy {
    /// Divide by 6k ± 1 candidates up to √n.
    #[default]
    TrialDivision,
    /// Sieve up to `n` and look for `n` at the end of the table.
    Sieve,
}

impl Strategy {
    /// Name used on the command line and in preferences.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TrialDivision => "trial-division",
            Self::Sieve => "sieve",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown primality strategy `{0}` (expected `trial-division` or `sieve`)")]
pub struct ParseStrategyError(String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trial-division" | "division" => Ok(Self::TrialDivision),
            "sieve" => Ok(Self::Sieve),
            other => Err(ParseStrategyError(other.to_owned())),
        }
    }
}

/// Settle the easy cases; `None` means the number needs a real test.
pub fn preliminary_check(number: u64) -> Option<Primality> {
    match number {
        0 | 1 => Some(Primality::Neither),
        2 | 3 => Some(Primality::Prime),
        n if n % 2 == 0 || n % 3 == 0 => Some(Primality::Composite),
        _ => None,
    }
}

/// Classify by trial division over 6k ± 1 candidates.
pub fn division_test(number: u64) -> Primality {
    if let Some(result) = preliminary_check(number) {
        return result;
    }

    // Loop while i² <= n; the square of a prime is composite.
    let mut i: u64 = 5;
    while i <= number / i {
        if number % i == 0 || number % (i + 2) == 0 {
            return Primality::Composite;
        }
        i += 6;
    }
    Primality::Prime
}

/// Classify by sieving up to `number`.
pub fn sieve_test(number: u64) -> Result<Primality, PrimalError> {
    if let Some(result) = preliminary_check(number) {
        return Ok(result);
    }

    let primes = sieve(number)?;
    if primes.last() == Some(number) {
        Ok(Primality::Prime)
    } else {
        Ok(Primality::Composite)
    }
}

/// Classify with the given fallback strategy.
pub fn classify_with(number: u64, strategy: Strategy) -> Result<Primality, PrimalError> {
    match strategy {
        Strategy::TrialDivision => Ok(division_test(number)),
        Strategy::Sieve => sieve_test(number),
    }
}

/// Classify with the default strategy (trial division, which cannot fail).
pub fn classify(number: u64) -> Primality {
    division_test(number)
}

/// `true` iff `number` is prime.
pub fn is_prime(number: u64) -> bool {
    classify(number) == Primality::Prime
}
