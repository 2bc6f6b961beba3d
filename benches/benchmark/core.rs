use crate::common::{configure_criterion, simulate_auth_check, simulate_db_query};
use criterion::{criterion_group, Criterion};
use outcome_rail::{Error, Maybe, Outcome};
use std::hint::black_box;

pub fn bench_error_creation(c: &mut Criterion) {
    c.bench_function("core/error_creation_static", |b| {
        b.iter(|| black_box(Error::validation("Name.Empty", "name is required")))
    });

    c.bench_function("core/error_creation_formatted", |b| {
        b.iter(|| {
            black_box(Error::validation(
                "Age.Range",
                format!("age {} is out of range", black_box(200)),
            ))
        })
    });
}

pub fn bench_maybe_chain(c: &mut Criterion) {
    c.bench_function("core/maybe_map_filter_bind", |b| {
        b.iter(|| {
            black_box(Maybe::some(black_box(21)))
                .map(|v| v * 2)
                .filter(|v| v % 2 == 0)
                .bind(|v| {
                    if v > 40 {
                        Maybe::some(v)
                    } else {
                        Maybe::none()
                    }
                })
        })
    });
}

pub fn bench_outcome_pipeline(c: &mut Criterion) {
    c.bench_function("core/pipeline_success", |b| {
        b.iter(|| {
            simulate_db_query(black_box(42))
                .bind(simulate_auth_check)
                .map(|u| u.user_id)
        })
    });

    c.bench_function("core/pipeline_failure", |b| {
        b.iter(|| {
            simulate_db_query(black_box(100))
                .bind(simulate_auth_check)
                .map(|u| u.user_id)
        })
    });

    c.bench_function("core/result_baseline", |b| {
        b.iter(|| {
            simulate_db_query(black_box(42))
                .into_result()
                .and_then(|u| simulate_auth_check(u).into_result())
                .map(|u| u.user_id)
        })
    });
}

pub fn bench_outcome_clone(c: &mut Criterion) {
    let failed: Outcome<u64> =
        Outcome::failure(Error::conflict("User.Exists", "user already exists"));

    c.bench_function("core/outcome_clone_failure", |b| {
        b.iter(|| black_box(failed.clone()))
    });
}

criterion_group! {
    name = core_benches;
    config = configure_criterion();
    targets =
        bench_error_creation,
        bench_maybe_chain,
        bench_outcome_pipeline,
        bench_outcome_clone,
}
