use crate::common::{configure_criterion, simulate_db_query};
use criterion::{criterion_group, BenchmarkId, Criterion};
use outcome_rail::traits::{OutcomeIterExt, OutcomeTuple};
use outcome_rail::{Error, Outcome, UnitOutcome};
use std::hint::black_box;

pub fn bench_collect_all_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation/collect_all");

    for size in [10u64, 100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| (1..=size).map(simulate_db_query).collect_all())
        });
    }

    group.finish();
}

pub fn bench_sequence_vs_collect_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");

    group.bench_function("sequence_short_circuit", |b| {
        b.iter(|| (1..=200u64).map(simulate_db_query).sequence())
    });

    group.bench_function("collect_all_full_scan", |b| {
        b.iter(|| (1..=200u64).map(simulate_db_query).collect_all())
    });

    group.bench_function("bind_all_units", |b| {
        b.iter(|| UnitOutcome::bind_all((1..=200u64).map(simulate_db_query)))
    });

    group.finish();
}

pub fn bench_tuple_accumulation(c: &mut Criterion) {
    c.bench_function("aggregation/tuple_bind_all_append", |b| {
        b.iter(|| {
            (
                Outcome::success(black_box("Ada")),
                Outcome::success(black_box(36)),
                Outcome::<&str>::failure(Error::validation("Email", "email is required")),
            )
                .bind_all_append(|(name, age, email)| (name, age, email))
        })
    });
}

criterion_group! {
    name = aggregation_benches;
    config = configure_criterion();
    targets =
        bench_collect_all_scaling,
        bench_sequence_vs_collect_all,
        bench_tuple_accumulation,
}
