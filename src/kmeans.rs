use crate::algorithm::{self, default_max_draws, lloyd, nearest, sample_labels, validate};
use crate::config::KMeansConfig;
use crate::distance::Euclidean;
use crate::error::KMeansError;
use crate::strategy::Strategy;
use ndarray::{Array1, ArrayView2};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;

/// A finished k-means clustering of a collection of values.
///
/// Construction runs the whole algorithm: distinct initial labels are drawn
/// at random, every value is assigned to its nearest label, labels become
/// cluster means, and `config.iterations` refinement rounds follow. The
/// result is read-only afterwards, so it can be shared between threads and
/// queried with [`classify`](Clustering::classify) without locking.
///
/// # Example
///
/// ```
/// use genkmeans_rs::{Clustering, Euclidean, KMeansConfig};
///
/// let points = vec![(0.0, 0.0), (0.0, 1.0), (10.0, 10.0), (10.0, 11.0)];
/// let config = KMeansConfig::new(2).with_iterations(5).with_seed(7);
///
/// let clustering = Clustering::new(points, Euclidean, config).unwrap();
/// let near_origin = clustering.classify(&(1.0, 1.0));
/// assert!((near_origin.0 - 0.0).abs() < 1e-9);
/// assert!((near_origin.1 - 0.5).abs() < 1e-9);
/// ```
pub struct Clustering<V, S> {
    /// Model configuration
    config: KMeansConfig,

    /// Distance and mean over the value domain
    strategy: S,

    /// Number of clustered values
    n: usize,

    /// Current representative of each cluster
    labels: Vec<V>,

    /// Partition of the input, one member list per label
    clusters: Vec<Vec<V>>,

    /// Values that changed cluster in each refinement round
    moves: Vec<usize>,
}

impl<V, S> Clustering<V, S>
where
    V: Clone + PartialEq + Send + Sync,
    S: Strategy<V> + Sync,
{
    /// Cluster `values` with initial labels drawn from a `ChaCha8Rng` seeded
    /// with `config.seed`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `values` is empty, `config.k` is 0, or
    /// `values` holds fewer than `config.k` distinct values.
    pub fn new(values: Vec<V>, strategy: S, config: KMeansConfig) -> Result<Self, KMeansError> {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::with_rng(values, strategy, config, &mut rng)
    }

    /// Cluster `values`, drawing the initial labels from `rng`.
    ///
    /// `config.seed` is ignored.
    pub fn with_rng<R: Rng>(
        values: Vec<V>,
        strategy: S,
        config: KMeansConfig,
        rng: &mut R,
    ) -> Result<Self, KMeansError> {
        validate(&values, config.k)?;

        let max_draws = config
            .max_draws
            .unwrap_or_else(|| default_max_draws(values.len()));
        let labels = sample_labels(&values, config.k, max_draws, rng)?;

        Ok(Self::run(values, labels, strategy, config))
    }

    /// Cluster `values` starting from caller-chosen labels.
    ///
    /// No randomness is involved, so two calls with the same arguments give
    /// identical clusterings. The labels need not be members of `values`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `values` is empty, `labels` is empty, or
    /// the number of labels differs from `config.k`.
    pub fn from_labels(
        values: Vec<V>,
        labels: Vec<V>,
        strategy: S,
        config: KMeansConfig,
    ) -> Result<Self, KMeansError> {
        if values.is_empty() {
            return Err(KMeansError::InvalidArgument(
                "cannot cluster an empty collection".to_string(),
            ));
        }

        if labels.is_empty() || labels.len() != config.k {
            return Err(KMeansError::InvalidArgument(format!(
                "Expected {} initial labels, got {}",
                config.k,
                labels.len()
            )));
        }

        Ok(Self::run(values, labels, strategy, config))
    }

    fn run(values: Vec<V>, labels: Vec<V>, strategy: S, config: KMeansConfig) -> Self {
        let result = lloyd(&values, labels, &strategy, &config);

        Self {
            n: values.len(),
            config,
            strategy,
            labels: result.labels,
            clusters: result.clusters,
            moves: result.moves,
        }
    }
}

impl<V, S> Clustering<V, S>
where
    V: Clone,
    S: Strategy<V>,
{
    /// Index of the cluster whose label is nearest to `value`.
    ///
    /// Ties go to the lowest index. `value` is not added to any cluster.
    pub fn map(&self, value: &V) -> usize {
        nearest(&self.strategy, &self.labels, value)
    }

    /// Label of the cluster nearest to `value`
    pub fn classify(&self, value: &V) -> &V {
        &self.labels[self.map(value)]
    }

    /// Label of cluster `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= k`.
    pub fn label(&self, i: usize) -> &V {
        &self.labels[i]
    }

    /// All labels, indexed by cluster
    pub fn labels(&self) -> &[V] {
        &self.labels
    }

    /// Copy of the members of cluster `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= k`.
    pub fn cluster(&self, i: usize) -> Vec<V> {
        self.clusters[i].clone()
    }

    /// Members of every cluster, indexed by cluster
    pub fn clusters(&self) -> &[Vec<V>] {
        &self.clusters
    }

    /// Number of values that changed cluster in each refinement round.
    ///
    /// All configured rounds always run; callers wanting to know when the
    /// clustering settled can look for the first zero.
    pub fn moves(&self) -> &[usize] {
        &self.moves
    }

    /// Mean squared distance from each value to its cluster's label
    pub fn variance(&self) -> f64 {
        algorithm::variance(&self.strategy, &self.labels, &self.clusters)
    }

    /// Get the number of clusters.
    pub fn k(&self) -> usize {
        self.labels.len()
    }

    /// Get the number of clustered values.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Get the strategy.
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Get the configuration.
    pub fn config(&self) -> &KMeansConfig {
        &self.config
    }
}

impl Clustering<Array1<f64>, Euclidean> {
    /// Cluster the rows of a matrix under Euclidean distance.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` for a matrix with no columns, plus the
    /// errors of [`Clustering::new`].
    pub fn from_rows(data: &ArrayView2<f64>, config: KMeansConfig) -> Result<Self, KMeansError> {
        if data.ncols() == 0 {
            return Err(KMeansError::InvalidDimensions(
                "rows must have at least one feature".to_string(),
            ));
        }

        let rows: Vec<Array1<f64>> = data.outer_iter().map(|row| row.to_owned()).collect();
        Self::new(rows, Euclidean, config)
    }
}

impl<V: fmt::Debug, S> fmt::Display for Clustering<V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A clustering of {} values into {} clusters with means {:?}.",
            self.n,
            self.labels.len(),
            self.labels
        )
    }
}

impl<V: fmt::Debug, S> fmt::Debug for Clustering<V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Clustering")
            .field("config", &self.config)
            .field("n", &self.n)
            .field("labels", &self.labels)
            .field("moves", &self.moves)
            .finish()
    }
}
