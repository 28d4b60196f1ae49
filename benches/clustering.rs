use criterion::{black_box, criterion_group, criterion_main, Criterion};
use denscan::{Dbscan, Result, SpatialIndex};
use rand::prelude::*;

fn euclidean(a: &[f64; 2], b: &[f64; 2]) -> Result<f64> {
    Ok(((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2)).sqrt())
}

fn bench_dbscan(c: &mut Criterion) {
    let mut group = c.benchmark_group("dbscan");

    // Generate synthetic data
    let mut rng = StdRng::seed_from_u64(42);
    let n = 1000;

    let data: Vec<[f64; 2]> = (0..n)
        .map(|_| [rng.random::<f64>() * 10.0, rng.random::<f64>() * 10.0])
        .collect();

    let dbscan = Dbscan::new(0.3, 4);

    group.bench_function("exhaustive_n1000_d2", |b| {
        b.iter(|| dbscan.cluster(black_box(&data), euclidean).unwrap())
    });

    group.bench_function("indexed_n1000_d2", |b| {
        let index = SpatialIndex::build(&data);
        b.iter(|| dbscan.cluster_indexed(black_box(&data), &index).unwrap())
    });

    group.bench_function("index_build_n1000_d2", |b| {
        b.iter(|| SpatialIndex::<2>::build(black_box(&data)))
    });

    group.finish();
}

criterion_group!(benches, bench_dbscan);
criterion_main!(benches);
