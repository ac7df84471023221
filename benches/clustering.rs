use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quakeclump::cluster::{assign, Kmeans};
use quakeclump::PointStore;
use rand::prelude::*;

fn synthetic_store(n: usize) -> PointStore {
    let mut rng = StdRng::seed_from_u64(42);
    PointStore::from_coords((0..n).map(|_| {
        [
            -128.6 + rng.random::<f64>() * 14.5,
            38.6 + rng.random::<f64>() * 12.7,
        ]
    }))
}

fn bench_kmeans(c: &mut Criterion) {
    let mut group = c.benchmark_group("kmeans");

    let store = synthetic_store(5000);
    let k = 6;

    group.bench_function("fit_n5000_k6_i7", |b| {
        b.iter(|| {
            let model = Kmeans::new(k).with_iterations(7).with_seed(42);
            model.fit(black_box(&store)).unwrap();
        })
    });

    let centroids: Vec<[f64; 2]> = store.iter().take(k).map(|r| r.coords).collect();
    group.bench_function("assign_n5000_k6", |b| {
        b.iter(|| assign(black_box(&centroids), black_box(&store)))
    });

    group.finish();
}

criterion_group!(benches, bench_kmeans);
criterion_main!(benches);
