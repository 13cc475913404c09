//! Benchmarks for annuity and bond pricing.
//!
//! Run with: cargo bench -p actuary-bonds

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use actuary_bonds::Bond;
use actuary_core::prelude::*;

fn bench_annuities(c: &mut Criterion) {
    let mut group = c.benchmark_group("annuity_present_value");

    for kind in [
        AnnuityKind::Immediate,
        AnnuityKind::Due,
        AnnuityKind::Perpetuity,
    ] {
        let annuity = AnnuityVariant::new(kind, 0.05, 360).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(kind), &annuity, |b, a| {
            b.iter(|| black_box(a).present_value())
        });
    }

    group.finish();
}

fn bench_bond_price(c: &mut Criterion) {
    let mut group = c.benchmark_group("bond_price");

    for periods in [10_i64, 100, 1_000] {
        let bond = Bond::new(100.0, 100.0, 0.05, 0.04, periods).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(periods), &bond, |b, bond| {
            b.iter(|| black_box(bond).price())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_annuities, bench_bond_price);
criterion_main!(benches);
