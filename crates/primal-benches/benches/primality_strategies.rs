// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
// criterion_group!/criterion_main! expand to undocumented functions that cannot
// carry #[allow] (attributes on macro invocations are ignored). Crate-level
// suppress is required for benchmark binaries using Criterion.
#![allow(missing_docs)]
//! Trial division against the sieve fallback for single queries.
//!
//! The sieve fallback allocates a table as large as the number itself, so
//! it is only measured up to the fourth sample prime.
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use primal_benches::{near_composites, PRIMES};
use primal_core::{classify_with, Strategy};

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify_prime");
    group.sample_size(20);
    for (i, &p) in PRIMES.iter().enumerate() {
        group.bench_with_input(BenchmarkId::new("trial-division", p), &p, |b, &p| {
            b.iter(|| black_box(classify_with(black_box(p), Strategy::TrialDivision).ok()));
        });
        if i < 4 {
            group.bench_with_input(BenchmarkId::new("sieve", p), &p, |b, &p| {
                b.iter(|| black_box(classify_with(black_box(p), Strategy::Sieve).ok()));
            });
        }
    }
    group.finish();

    let mut group = c.benchmark_group("classify_composite");
    for n in near_composites() {
        group.bench_with_input(BenchmarkId::new("trial-division", n), &n, |b, &n| {
            b.iter(|| black_box(classify_with(black_box(n), Strategy::TrialDivision).ok()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
