use criterion::{black_box, criterion_group, criterion_main, Criterion};

use roadtrip::math::quadrature::QuadratureConfig;
use roadtrip::trip::solver::expected_braking_loss;

fn bench_expected_braking_loss(c: &mut Criterion) {
    let config = QuadratureConfig {
        abs_tol: 1e-6,
        rel_tol: 1e-6,
        max_evaluations: 100_000,
    };

    c.bench_function("expected_braking_loss", |b| {
        b.iter(|| expected_braking_loss(black_box(1.25), &config).unwrap())
    });
}

criterion_group!(benches, bench_expected_braking_loss);
criterion_main!(benches);
