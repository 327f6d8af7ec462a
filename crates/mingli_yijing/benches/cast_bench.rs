use criterion::{Criterion, black_box, criterion_group, criterion_main};

use mingli_time::LocalDateTime;
use mingli_yijing::{SeededSource, cast_by_coins, cast_by_time, cast_personalized};

fn bench_casts(c: &mut Criterion) {
    let src = SeededSource::new(42);
    let t = LocalDateTime::new(1990, 1, 15, 14, 30).unwrap();

    let mut group = c.benchmark_group("cast");
    group.bench_function("coins", |b| b.iter(|| cast_by_coins(black_box(&src))));
    group.bench_function("time", |b| {
        b.iter(|| cast_by_time(black_box(&t), Some("bench"), &src))
    });
    group.bench_function("personalized", |b| {
        b.iter(|| cast_personalized("事业发展如何？", black_box(&t), Some("bench"), &src))
    });
    group.finish();
}

criterion_group!(benches, bench_casts);
criterion_main!(benches);
