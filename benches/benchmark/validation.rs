use crate::common::{configure_criterion, realistic_user_data, UserData};
use criterion::{criterion_group, Criterion};
use outcome_rail::validation::EnsureBuilder;
use outcome_rail::{ensure_all, Error, Outcome, UnitOutcome};
use std::hint::black_box;

fn validate_fail_fast(user: &UserData) -> Outcome<i32> {
    EnsureBuilder::new(user.age)
        .greater_than_or_equal(18)
        .less_than(120)
        .build()
}

fn validate_accumulating(user: &UserData) -> UnitOutcome {
    ensure_all!(
        user.age >= 18 => Error::validation("Age.Minor", "must be an adult"),
        user.email.contains('@') => Error::validation("Email.Invalid", "email is invalid"),
        !user.username.is_empty() => Error::validation("Name.Empty", "name is required"),
    )
}

pub fn bench_ensure_builder(c: &mut Criterion) {
    let users = realistic_user_data();
    let mut group = c.benchmark_group("validation");

    group.bench_function("ensure_builder_valid", |b| {
        b.iter(|| validate_fail_fast(black_box(&users[30])))
    });

    group.bench_function("ensure_builder_invalid", |b| {
        b.iter(|| validate_fail_fast(black_box(&users[1])))
    });

    group.bench_function("string_rules", |b| {
        b.iter(|| {
            EnsureBuilder::new(black_box(users[42].email.as_str()))
                .not_blank()
                .length_between(3, 64)
                .email_shaped()
                .build()
        })
    });

    group.finish();
}

pub fn bench_ensure_all(c: &mut Criterion) {
    let users = realistic_user_data();
    let mut group = c.benchmark_group("validation");

    group.bench_function("ensure_all_valid", |b| {
        b.iter(|| validate_accumulating(black_box(&users[30])))
    });

    // users[7] is a minor with a malformed email
    group.bench_function("ensure_all_two_failures", |b| {
        b.iter(|| validate_accumulating(black_box(&users[7])))
    });

    group.finish();
}

criterion_group! {
    name = validation_benches;
    config = configure_criterion();
    targets = bench_ensure_builder, bench_ensure_all
}
