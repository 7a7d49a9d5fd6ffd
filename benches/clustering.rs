use criterion::{black_box, criterion_group, criterion_main, Criterion};
use huddle::cluster::{Clustering, Dbscan, JarvisPatrick};
use rand::prelude::*;

fn synthetic(n: usize, d: usize) -> Vec<Vec<f32>> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..n)
        .map(|_| (0..d).map(|_| rng.random::<f32>()).collect())
        .collect()
}

fn bench_jarvis_patrick(c: &mut Criterion) {
    let mut group = c.benchmark_group("jarvis_patrick");
    let data = synthetic(1000, 6);

    group.bench_function("fit_n1000_d6_m8_p3", |b| {
        b.iter(|| {
            let model = JarvisPatrick::new(8, 3);
            model.fit(black_box(&data)).unwrap();
        })
    });

    group.finish();
}

fn bench_dbscan(c: &mut Criterion) {
    let mut group = c.benchmark_group("dbscan");
    let data = synthetic(1000, 3);

    group.bench_function("fit_n1000_d3_eps0.1_minpts5", |b| {
        b.iter(|| {
            let model = Dbscan::new(0.1, 5);
            model.fit(black_box(&data)).unwrap();
        })
    });

    group.finish();
}

criterion_group!(benches, bench_jarvis_patrick, bench_dbscan);
criterion_main!(benches);
