use crate::strategy::Strategy;
use ndarray::Array1;

/// Euclidean distance with an arithmetic mean.
///
/// Implemented for scalars, planar points and `ndarray` vectors, so the same
/// strategy value can drive 1-D, 2-D and n-D clusterings.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Euclidean;

impl Strategy<f64> for Euclidean {
    fn distance(&self, a: &f64, b: &f64) -> f64 {
        (a - b).abs()
    }

    fn mean(&self, values: &[f64]) -> f64 {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

impl Strategy<(f64, f64)> for Euclidean {
    fn distance(&self, a: &(f64, f64), b: &(f64, f64)) -> f64 {
        let dx = a.0 - b.0;
        let dy = a.1 - b.1;
        (dx * dx + dy * dy).sqrt()
    }

    fn mean(&self, values: &[(f64, f64)]) -> (f64, f64) {
        let n = values.len() as f64;
        let (sx, sy) = values
            .iter()
            .fold((0.0, 0.0), |(sx, sy), &(x, y)| (sx + x, sy + y));
        (sx / n, sy / n)
    }
}

impl Strategy<Array1<f64>> for Euclidean {
    fn distance(&self, a: &Array1<f64>, b: &Array1<f64>) -> f64 {
        let diff = a - b;
        diff.dot(&diff).sqrt()
    }

    fn mean(&self, values: &[Array1<f64>]) -> Array1<f64> {
        let mut sum = Array1::zeros(values[0].len());
        for v in values {
            sum += v;
        }
        sum / values.len() as f64
    }
}

/// Square of a distance, used for within-cluster dispersion
#[inline]
pub fn squared(d: f64) -> f64 {
    d * d
}
