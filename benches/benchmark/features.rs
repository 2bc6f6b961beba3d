use crate::common::configure_criterion;
use criterion::{criterion_group, Criterion};
use outcome_rail::{Error, Outcome};
use std::hint::black_box;

pub fn bench_serde_round_trip(c: &mut Criterion) {
    let failed: Outcome<u32> = Error::combine([
        Error::validation("Name.Empty", "name is required"),
        Error::validation("Email.Invalid", "email is invalid"),
    ])
    .map_or_else(|| Outcome::success(0), Outcome::Failure);
    let json = serde_json::to_string(&failed).unwrap();

    c.bench_function("serde/outcome_serialize", |b| {
        b.iter(|| serde_json::to_string(black_box(&failed)).unwrap())
    });

    c.bench_function("serde/outcome_deserialize", |b| {
        b.iter(|| {
            serde_json::from_str::<Outcome<u32>>(black_box(&json))
                .unwrap()
        })
    });
}

criterion_group! {
    name = serde_benches;
    config = configure_criterion();
    targets = bench_serde_round_trip
}
