/// Configuration for a clustering run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KMeansConfig {
    /// Number of clusters
    pub k: usize,

    /// Number of refinement rounds run after the initial assignment.
    /// Every round runs; there is no early stopping.
    pub iterations: usize,

    /// Random seed for initial label sampling
    pub seed: u64,

    /// Print per-round progress to stderr
    pub verbose: bool,

    /// Upper bound on random draws while collecting distinct initial labels.
    /// `None` derives a bound from the input size.
    pub max_draws: Option<usize>,
}

impl Default for KMeansConfig {
    fn default() -> Self {
        Self {
            k: 8,
            iterations: 10,
            seed: 0,
            verbose: false,
            max_draws: None,
        }
    }
}

impl KMeansConfig {
    /// Create a new configuration with the specified number of clusters
    pub fn new(k: usize) -> Self {
        Self {
            k,
            ..Default::default()
        }
    }

    /// Set the number of refinement rounds
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set verbose mode
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Cap the number of draws used to pick distinct initial labels
    pub fn with_max_draws(mut self, max_draws: Option<usize>) -> Self {
        self.max_draws = max_draws;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_runs_ten_rounds() {
        let config = KMeansConfig::default();
        assert_eq!(config.iterations, 10);
        assert!(!config.verbose);
        assert_eq!(config.max_draws, None);
    }

    #[test]
    fn test_builder_chain() {
        let config = KMeansConfig::new(3)
            .with_iterations(5)
            .with_seed(42)
            .with_verbose(true)
            .with_max_draws(Some(100));

        assert_eq!(config.k, 3);
        assert_eq!(config.iterations, 5);
        assert_eq!(config.seed, 42);
        assert!(config.verbose);
        assert_eq!(config.max_draws, Some(100));
    }
}
