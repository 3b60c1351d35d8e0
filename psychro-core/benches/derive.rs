use criterion::{black_box, criterion_group, criterion_main, Criterion};
use psychro_core::{find_dew_point, Psychrometer};

fn bench_derive(c: &mut Criterion) {
    let engine = Psychrometer::default();

    c.bench_function("derive_room_air", |b| {
        b.iter(|| engine.derive(black_box(25.0), black_box(18.0)))
    });

    c.bench_function("derive_below_freezing", |b| {
        b.iter(|| engine.derive(black_box(-10.0), black_box(-12.0)))
    });

    c.bench_function("dew_point_bisection", |b| {
        b.iter(|| find_dew_point(black_box(101_325.0), black_box(1608.18)))
    });
}

criterion_group!(benches, bench_derive);
criterion_main!(benches);
