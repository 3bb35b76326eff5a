use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tarebench::{calibration, measure};

fn bench_measure(c: &mut Criterion) {
    // Pay for calibration outside the timed region.
    calibration();

    let mut group = c.benchmark_group("tarebench");
    group.sample_size(20);

    group.bench_function("measure_10k_noop", |b| {
        b.iter(|| {
            // Small iteration counts keep each sample short; the per-call
            // figure is what matters, not the batch.
            black_box(measure(10_000, || {}))
        });
    });

    group.bench_function("measure_10k_wrapping_mul", |b| {
        b.iter(|| {
            black_box(measure(10_000, || {
                black_box(0xdead_beefu64.wrapping_mul(31));
            }))
        });
    });
    group.finish();
}

criterion_group!(benches, bench_measure);
criterion_main!(benches);
