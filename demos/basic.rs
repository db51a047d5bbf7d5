//! Basic example demonstrating genkmeans-rs usage
//!
//! Run with: cargo run --example basic --release

use genkmeans_rs::{Clustering, Euclidean, KMeansConfig};
use ndarray::Array2;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;

fn main() {
    println!("=== genkmeans-rs example ===\n");

    // Generate synthetic data: 3 clusters in 2D for easy visualization
    let n_samples = 300;
    let centers = [(-5.0, -5.0), (0.0, 5.0), (5.0, -5.0)];

    println!("Generating {} planar points...", n_samples);

    let noise = Array2::random((n_samples, 2), Uniform::new(-1.0, 1.0));
    let points: Vec<(f64, f64)> = (0..n_samples)
        .map(|i| {
            let (cx, cy) = centers[i % 3];
            (cx + noise[[i, 0]], cy + noise[[i, 1]])
        })
        .collect();

    println!("True cluster centers:");
    for (i, (x, y)) in centers.iter().enumerate() {
        println!("  Cluster {}: ({:.2}, {:.2})", i, x, y);
    }
    println!();

    let config = KMeansConfig::new(3).with_seed(42).with_verbose(true);

    println!("Running k-means with k=3...\n");

    let clustering =
        Clustering::new(points.clone(), Euclidean, config).expect("Clustering failed");

    println!("\nLearned labels:");
    for (i, (x, y)) in clustering.labels().iter().enumerate() {
        println!("  Label {}: ({:.4}, {:.4})", i, x, y);
    }
    println!();

    println!("Cluster distribution:");
    for i in 0..clustering.k() {
        let count = clustering.cluster(i).len();
        println!(
            "  Cluster {}: {} samples ({:.1}%)",
            i,
            count,
            (count as f64 / n_samples as f64) * 100.0
        );
    }
    println!();

    if let Some(round) = clustering.moves().iter().position(|&m| m == 0) {
        println!("Settled after round {}", round + 1);
    }
    println!("Variance: {:.4}\n", clustering.variance());

    println!("First 10 sample assignments:");
    for (i, p) in points.iter().take(10).enumerate() {
        println!(
            "  Sample {} at ({:.2}, {:.2}) -> Cluster {}",
            i,
            p.0,
            p.1,
            clustering.map(p)
        );
    }

    println!("\n=== Done! ===");
}
