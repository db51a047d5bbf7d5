use crate::config::KMeansConfig;
use crate::distance::squared;
use crate::error::KMeansError;
use crate::strategy::Strategy;
use rand::Rng;
use rayon::prelude::*;
use std::time::Instant;

/// Result of the k-means algorithm
pub struct KMeansResult<V> {
    pub labels: Vec<V>,
    pub clusters: Vec<Vec<V>>,
    pub moves: Vec<usize>,
}

/// Reject inputs the engine cannot cluster.
///
/// Checks that `values` is non-empty and holds at least `k >= 1` distinct
/// values, so that distinct initial labels can always be drawn.
pub fn validate<V: PartialEq>(values: &[V], k: usize) -> Result<(), KMeansError> {
    if k == 0 {
        return Err(KMeansError::InvalidArgument(
            "k must be greater than 0".to_string(),
        ));
    }

    if values.is_empty() {
        return Err(KMeansError::InvalidArgument(
            "cannot cluster an empty collection".to_string(),
        ));
    }

    let distinct = count_distinct(values, k);
    if distinct < k {
        return Err(KMeansError::InvalidArgument(format!(
            "Number of distinct values ({}) is less than k ({})",
            distinct, k
        )));
    }

    Ok(())
}

/// Count distinct values, stopping once `limit` have been seen
fn count_distinct<V: PartialEq>(values: &[V], limit: usize) -> usize {
    let mut seen: Vec<&V> = Vec::with_capacity(limit);
    for v in values {
        if seen.len() == limit {
            break;
        }
        if !seen.contains(&v) {
            seen.push(v);
        }
    }
    seen.len()
}

/// Draw values uniformly at random until `k` distinct labels are collected.
///
/// Gives up with `InvalidArgument` after `max_draws` draws.
pub fn sample_labels<V, R>(
    values: &[V],
    k: usize,
    max_draws: usize,
    rng: &mut R,
) -> Result<Vec<V>, KMeansError>
where
    V: Clone + PartialEq,
    R: Rng,
{
    let mut labels: Vec<V> = Vec::with_capacity(k);
    let mut draws = 0;

    while labels.len() < k {
        if draws == max_draws || values.is_empty() {
            return Err(KMeansError::InvalidArgument(format!(
                "could not draw {} distinct labels in {} draws",
                k, draws
            )));
        }
        draws += 1;

        let candidate = &values[rng.gen_range(0..values.len())];
        if !labels.contains(candidate) {
            labels.push(candidate.clone());
        }
    }

    Ok(labels)
}

/// Default draw cap for `sample_labels`, generous enough for `k == n`
pub fn default_max_draws(n: usize) -> usize {
    n.saturating_mul(64).max(1024)
}

/// Index of the label nearest to `value`.
///
/// Labels are scanned left to right and a later label only wins on a strictly
/// smaller distance, so ties go to the lowest index.
pub fn nearest<V, S: Strategy<V>>(strategy: &S, labels: &[V], value: &V) -> usize {
    let mut best_label = 0;
    let mut best_dist = f64::INFINITY;

    for (i, label) in labels.iter().enumerate() {
        let dist = strategy.distance(value, label);
        if dist < best_dist {
            best_dist = dist;
            best_label = i;
        }
    }

    best_label
}

/// Build the first partition, appending values in input order
pub fn assign<V, S>(strategy: &S, labels: &[V], values: &[V]) -> Vec<Vec<V>>
where
    V: Clone + Send + Sync,
    S: Strategy<V> + Sync,
{
    let assignments: Vec<usize> = values
        .par_iter()
        .map(|v| nearest(strategy, labels, v))
        .collect();

    let mut clusters: Vec<Vec<V>> = vec![Vec::new(); labels.len()];
    for (v, &c) in values.iter().zip(assignments.iter()) {
        clusters[c].push(v.clone());
    }

    clusters
}

/// Replace each non-empty cluster's label with the mean of its members.
///
/// Empty clusters keep their previous label.
pub fn relabel<V, S: Strategy<V>>(strategy: &S, labels: &mut [V], clusters: &[Vec<V>]) {
    for (label, members) in labels.iter_mut().zip(clusters.iter()) {
        if !members.is_empty() {
            *label = strategy.mean(members);
        }
    }
}

/// One refinement round: reassign every value against the current labels,
/// then relabel. Returns how many values changed cluster.
///
/// The nearest-label scatter runs in parallel; the new partition is rebuilt
/// in old-partition order and relabeling only starts once it is complete.
pub fn recluster<V, S>(strategy: &S, labels: &mut [V], clusters: &mut Vec<Vec<V>>) -> usize
where
    V: Send + Sync,
    S: Strategy<V> + Sync,
{
    let old = std::mem::take(clusters);

    let assignments: Vec<usize> = {
        let labels: &[V] = labels;
        old.par_iter()
            .flat_map_iter(|members| members.iter().map(move |v| nearest(strategy, labels, v)))
            .collect()
    };

    let mut fresh: Vec<Vec<V>> = (0..labels.len()).map(|_| Vec::new()).collect();
    let mut moved = 0;
    let mut position = 0;

    for (c, members) in old.into_iter().enumerate() {
        for v in members {
            let target = assignments[position];
            position += 1;
            if target != c {
                moved += 1;
            }
            fresh[target].push(v);
        }
    }

    *clusters = fresh;
    relabel(strategy, labels, clusters);
    moved
}

/// Mean squared distance from each value to its cluster's label
pub fn variance<V, S: Strategy<V>>(strategy: &S, labels: &[V], clusters: &[Vec<V>]) -> f64 {
    let n: usize = clusters.iter().map(Vec::len).sum();
    if n == 0 {
        return 0.0;
    }

    let total: f64 = labels
        .iter()
        .zip(clusters.iter())
        .flat_map(|(label, members)| {
            members
                .iter()
                .map(move |v| squared(strategy.distance(v, label)))
        })
        .sum();

    total / n as f64
}

/// Run Lloyd's algorithm from the given initial labels.
///
/// Assigns every value, relabels, then runs exactly `config.iterations`
/// refinement rounds, recording the moved count of each.
pub fn lloyd<V, S>(
    values: &[V],
    initial_labels: Vec<V>,
    strategy: &S,
    config: &KMeansConfig,
) -> KMeansResult<V>
where
    V: Clone + Send + Sync,
    S: Strategy<V> + Sync,
{
    let k = initial_labels.len();

    if config.verbose {
        eprintln!(
            "Clustering {} values into {} clusters ({} rounds)",
            values.len(),
            k,
            config.iterations
        );
    }

    let mut labels = initial_labels;
    let mut clusters = assign(strategy, &labels, values);
    relabel(strategy, &mut labels, &clusters);

    let mut moves = Vec::with_capacity(config.iterations);

    for round in 0..config.iterations {
        let round_start = Instant::now();
        let moved = recluster(strategy, &mut labels, &mut clusters);
        moves.push(moved);

        log::debug!("clustering round {} moved {} values", round, moved);
        if config.verbose {
            eprintln!(
                "  Round {}/{}: moved = {}, time = {:.4}s",
                round + 1,
                config.iterations,
                moved,
                round_start.elapsed().as_secs_f64()
            );
        }
    }

    let empty = clusters.iter().filter(|c| c.is_empty()).count();
    if empty > 0 {
        log::info!("{} of {} clusters ended empty", empty, k);
    }

    KMeansResult {
        labels,
        clusters,
        moves,
    }
}
