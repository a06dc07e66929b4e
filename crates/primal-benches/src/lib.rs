// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared inputs for the primal-core benchmarks.

/// Sieve ceilings, one decade apart.
pub const CEILINGS: [u64; 5] = [1_000, 10_000, 100_000, 1_000_000, 10_000_000];

/// Primes of increasing size; the worst case for trial division.
pub const PRIMES: [u64; 5] = [7_919, 104_729, 1_299_709, 15_485_863, 179_424_673];

/// Odd composites near [`PRIMES`] that survive the 2/3 fast path.
pub fn near_composites() -> Vec<u64> {
    PRIMES
        .iter()
        .map(|&p| {
            let mut n = p + 2;
            while primal_core::preliminary_check(n).is_some() || primal_core::is_prime(n) {
                n += 2;
            }
            n
        })
        .collect()
}
