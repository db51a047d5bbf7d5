use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use genkmeans_rs::{Clustering, Euclidean, KMeansConfig, Recolor, Rgb};
use ndarray::Array2;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use std::time::Duration;

fn random_points(n: usize) -> Vec<(f64, f64)> {
    let data = Array2::random((n, 2), Uniform::new(-100.0, 100.0));
    data.outer_iter().map(|row| (row[0], row[1])).collect()
}

fn benchmark_kmeans_varying_samples(c: &mut Criterion) {
    let mut group = c.benchmark_group("kmeans_samples");
    group.sample_size(10);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    let k = 8;
    let sample_sizes = [1_000, 5_000, 20_000];

    for n_samples in sample_sizes.iter() {
        group.throughput(Throughput::Elements(*n_samples as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(n_samples),
            n_samples,
            |b, &n_samples| {
                let points = random_points(n_samples);
                let config = KMeansConfig::new(k).with_seed(42);

                b.iter(|| {
                    Clustering::new(black_box(points.clone()), Euclidean, config.clone()).unwrap()
                });
            },
        );
    }
    group.finish();
}

fn benchmark_kmeans_varying_clusters(c: &mut Criterion) {
    let mut group = c.benchmark_group("kmeans_clusters");
    group.sample_size(10);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    let points = random_points(5_000);
    let cluster_counts = [4, 16, 64];

    for k in cluster_counts.iter() {
        group.throughput(Throughput::Elements(*k as u64));
        group.bench_with_input(BenchmarkId::from_parameter(k), k, |b, &k| {
            let config = KMeansConfig::new(k).with_seed(42);

            b.iter(|| {
                Clustering::new(black_box(points.clone()), Euclidean, config.clone()).unwrap()
            });
        });
    }
    group.finish();
}

fn benchmark_ndarray_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("kmeans_rows");
    group.sample_size(10);

    let n_features = 32;
    let data = Array2::random((2_000, n_features), Uniform::new(-1.0, 1.0));
    let config = KMeansConfig::new(16).with_iterations(5);

    group.bench_function("2000x32_k16", |b| {
        b.iter(|| Clustering::from_rows(black_box(&data.view()), config.clone()).unwrap());
    });
    group.finish();
}

fn benchmark_recolor(c: &mut Criterion) {
    let mut group = c.benchmark_group("recolor");
    group.sample_size(10);

    let (width, height) = (128u32, 128u32);
    let noise = Array2::random(((width * height) as usize, 3), Uniform::new(0u8, 255));
    let pixels: Vec<Rgb> = noise
        .outer_iter()
        .map(|px| Rgb::new(px[0], px[1], px[2]))
        .collect();

    group.bench_function("128x128_k8", |b| {
        b.iter(|| {
            let filter = Recolor::new(
                width,
                height,
                black_box(pixels.clone()),
                KMeansConfig::new(8).with_seed(1),
            )
            .unwrap();
            filter.render()
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_kmeans_varying_samples,
    benchmark_kmeans_varying_clusters,
    benchmark_ndarray_rows,
    benchmark_recolor
);
criterion_main!(benches);
