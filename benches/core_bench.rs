use chaikin_editor::{generate_steps, ControlPoint, PointSet};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn build_control_polygon(count: usize) -> Vec<ControlPoint> {
    (0..count)
        .map(|i| {
            let x = (i * 37 % 800) as i32;
            let y = (i * 53 % 600) as i32;
            ControlPoint::new(x, y)
        })
        .collect()
}

fn bench_generate_steps(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_steps");

    for &count in &[2usize, 10, 50] {
        let points = build_control_polygon(count);

        group.bench_with_input(BenchmarkId::from_parameter(count), &points, |b, points| {
            b.iter(|| {
                let steps = generate_steps(black_box(points));
                black_box(steps.len())
            })
        });
    }

    group.finish();
}

fn bench_find_near(c: &mut Criterion) {
    let set: PointSet = build_control_polygon(1_000).into_iter().collect();

    c.bench_function("find_near_miss_1000", |b| {
        b.iter(|| black_box(set.find_near(black_box(ControlPoint::new(-500, -500)), 10.0)))
    });
}

criterion_group!(core_benches, bench_generate_steps, bench_find_near);
criterion_main!(core_benches);
