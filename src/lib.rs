//! # genkmeans-rs
//!
//! Lloyd-style k-means clustering over any value type, driven by a
//! caller-supplied distance and mean.
//!
//! ## Features
//!
//! - **Generic values**: anything with a [`Strategy`] (a distance and a mean)
//!   can be clustered: scalars, planar points, `ndarray` vectors, RGB colors
//! - **Reproducible**: initial labels come from a seeded `ChaCha8Rng`, or from
//!   any `rand::Rng` you pass in, or are given explicitly
//! - **Parallel assignment**: the nearest-label step of each round uses rayon,
//!   with identical results to a sequential run
//! - **Color quantization**: [`Recolor`] repaints an image with `k` colors
//!
//! ## Example
//!
//! ```rust
//! use genkmeans_rs::{Clustering, Euclidean, KMeansConfig};
//!
//! let points = vec![(0.0, 0.0), (0.0, 1.0), (10.0, 10.0), (10.0, 11.0)];
//! let clustering = Clustering::new(points, Euclidean, KMeansConfig::new(2)).unwrap();
//!
//! assert_eq!(clustering.k(), 2);
//! assert_eq!(clustering.map(&(0.2, 0.2)), clustering.map(&(0.0, 1.0)));
//! ```
//!
//! ## Custom Strategies
//!
//! ```rust
//! use genkmeans_rs::{from_fns, Clustering, KMeansConfig};
//!
//! let words: Vec<String> = ["a", "an", "ant", "elephant", "elephants"]
//!     .iter()
//!     .map(|w| w.to_string())
//!     .collect();
//! let by_length = from_fns(
//!     |a: &String, b: &String| (a.len() as f64 - b.len() as f64).abs(),
//!     |ws: &[String]| {
//!         let avg = ws.iter().map(|w| w.len()).sum::<usize>() / ws.len();
//!         ws.iter().min_by_key(|w| w.len().abs_diff(avg)).unwrap().clone()
//!     },
//! );
//!
//! let config = KMeansConfig::new(2).with_iterations(5);
//! let clustering = Clustering::new(words, by_length, config).unwrap();
//! assert_eq!(clustering.map(&"at".to_string()), clustering.map(&"ant".to_string()));
//! ```

mod algorithm;
mod color;
mod config;
mod distance;
mod error;
mod kmeans;
mod strategy;

pub use color::{clamp, ColorMetric, Recolor, Rgb};
pub use config::KMeansConfig;
pub use distance::Euclidean;
pub use error::KMeansError;
pub use kmeans::Clustering;
pub use strategy::{from_fns, FnStrategy, Strategy};
