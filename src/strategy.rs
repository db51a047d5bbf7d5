/// The pair of operations a clustering needs from its value domain.
///
/// `distance` must be deterministic and total over the domain. `mean` is only
/// ever called with a non-empty slice and may synthesize a value that is not
/// one of its inputs (an averaged color, for instance). Both operations are
/// trusted: a panic inside either one unwinds through the engine unchanged.
pub trait Strategy<V> {
    /// Non-negative distance between two values
    fn distance(&self, a: &V, b: &V) -> f64;

    /// Representative of a non-empty collection of values
    fn mean(&self, values: &[V]) -> V;
}

impl<V, S: Strategy<V> + ?Sized> Strategy<V> for &S {
    fn distance(&self, a: &V, b: &V) -> f64 {
        (**self).distance(a, b)
    }

    fn mean(&self, values: &[V]) -> V {
        (**self).mean(values)
    }
}

/// A strategy assembled from two closures.
#[derive(Debug, Clone, Copy)]
pub struct FnStrategy<D, M> {
    distance: D,
    mean: M,
}

impl<V, D, M> Strategy<V> for FnStrategy<D, M>
where
    D: Fn(&V, &V) -> f64,
    M: Fn(&[V]) -> V,
{
    fn distance(&self, a: &V, b: &V) -> f64 {
        (self.distance)(a, b)
    }

    fn mean(&self, values: &[V]) -> V {
        (self.mean)(values)
    }
}

/// Build a [`Strategy`] from a distance function and a mean function.
///
/// ```
/// use genkmeans_rs::{from_fns, Strategy};
///
/// let s = from_fns(
///     |a: &i32, b: &i32| (a - b).abs() as f64,
///     |xs: &[i32]| xs.iter().sum::<i32>() / xs.len() as i32,
/// );
/// assert_eq!(s.distance(&3, &7), 4.0);
/// assert_eq!(s.mean(&[2, 4, 6]), 4);
/// ```
pub fn from_fns<V, D, M>(distance: D, mean: M) -> FnStrategy<D, M>
where
    D: Fn(&V, &V) -> f64,
    M: Fn(&[V]) -> V,
{
    FnStrategy { distance, mean }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manhattan() -> impl Strategy<(i64, i64)> {
        from_fns(
            |a: &(i64, i64), b: &(i64, i64)| ((a.0 - b.0).abs() + (a.1 - b.1).abs()) as f64,
            |pts: &[(i64, i64)]| {
                let n = pts.len() as i64;
                let (sx, sy) = pts.iter().fold((0, 0), |(x, y), p| (x + p.0, y + p.1));
                (sx / n, sy / n)
            },
        )
    }

    #[test]
    fn test_fn_strategy_forwards() {
        let s = manhattan();
        assert_eq!(s.distance(&(0, 0), &(3, 4)), 7.0);
        assert_eq!(s.mean(&[(0, 0), (4, 8)]), (2, 4));
    }

    #[test]
    fn test_reference_forwards() {
        let s = manhattan();
        let r = &s;
        assert_eq!(Strategy::distance(&r, &(1, 1), &(1, 2)), 1.0);
    }
}
