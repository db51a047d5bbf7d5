//! Separation test: cluster four noisy sprays of planar points
//!
//! Points are scattered around (+/-100, +/-100) with radii 25, 50, 70 and 110,
//! clustered into `k` groups, and each cluster is summarized on stdout.
//!
//! Usage: `separation [k] [seed]` (defaults: k = 4, seed = 0)

use genkmeans_rs::{Clustering, Euclidean, KMeansConfig};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::env;

/// Generate `n` points about `(x, y)` within radius `r`
fn spray(rng: &mut ChaCha8Rng, n: usize, x: f64, y: f64, r: f64) -> Vec<(f64, f64)> {
    (0..n)
        .map(|_| {
            let theta = rng.gen_range(0.0..std::f64::consts::TAU);
            let dr = rng.gen_range(0.0..r);
            (x + dr * theta.cos(), y + dr * theta.sin())
        })
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() > 3 {
        eprintln!("Usage: {} [k] [seed]", args[0]);
        std::process::exit(1);
    }

    let k: usize = args.get(1).map(|s| s.parse::<usize>()).transpose()?.unwrap_or(4);
    let seed: u64 = args.get(2).map(|s| s.parse::<u64>()).transpose()?.unwrap_or(0);

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut points = spray(&mut rng, 100, 100.0, 100.0, 25.0);
    points.extend(spray(&mut rng, 100, -100.0, 100.0, 50.0));
    points.extend(spray(&mut rng, 100, -100.0, -100.0, 70.0));
    points.extend(spray(&mut rng, 100, 100.0, -100.0, 110.0));

    let config = KMeansConfig::new(k).with_seed(seed).with_verbose(true);
    let clustering = Clustering::with_rng(points, Euclidean, config, &mut rng)?;

    println!("Separation test (k={})", k);
    for i in 0..clustering.k() {
        let (x, y) = *clustering.label(i);
        println!(
            "  Cluster {}: center ({:.2}, {:.2}), {} points",
            i,
            x,
            y,
            clustering.cluster(i).len()
        );
    }
    println!("Variance: {:.4}", clustering.variance());

    Ok(())
}
