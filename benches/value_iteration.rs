use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gridmdp::{GridWorld, ValueIterationConfig};

fn bench_value_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("value_iteration");
    let config = ValueIterationConfig {
        epsilon: 1e-6,
        max_sweeps: None,
    };

    for &size in &[3usize, 10, 30] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut world = GridWorld::new(size, size, -1.0, -3.0, 10.0).unwrap();
                world.value_iterate_with(black_box(&config)).unwrap()
            });
        });
    }

    group.finish();
}

fn bench_single_sweep(c: &mut Criterion) {
    let mut world = GridWorld::new(30, 30, -1.0, -3.0, 10.0).unwrap();
    c.bench_function("sweep_30x30", |b| b.iter(|| black_box(world.sweep())));
}

criterion_group!(benches, bench_value_iteration, bench_single_sweep);
criterion_main!(benches);
