//! Sample grids and the error curves evaluated on them.

use crate::{ApproximationConfig, Error};

/// The interval [`DOMAIN_MIN`, `DOMAIN_MAX`] covers one full period of the error,
/// which repeats for every power of four.
pub const DOMAIN_MIN: f32 = 1.0;
pub const DOMAIN_MAX: f32 = 4.0;
pub const DEFAULT_SAMPLES: usize = 512;

/// `n` evenly spaced values over `[lo, hi]`, both ends included.
///
/// Computed in double precision as `lo + i * step`, with the last value pinned to `hi`.
pub fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    match n {
        0 => vec![],
        1 => vec![lo],
        _ => {
            let step = (hi - lo) / (n - 1) as f64;
            let mut result: Vec<f64> = (0..n).map(|i| lo + step * i as f64).collect();
            result[n - 1] = hi;
            result
        }
    }
}

/// The evenly spaced grid plus `reference_point`, sorted ascending.
///
/// `reference_point` is always present exactly, even if it falls outside `[lo, hi]`
/// or coincides with a grid point (in which case it appears twice).
pub fn sample_points(lo: f32, hi: f32, n: usize, reference_point: f32) -> Vec<f32> {
    let mut points: Vec<f32> = linspace(lo as f64, hi as f64, n)
        .into_iter()
        .map(|x| x as f32)
        .collect();
    points.push(reference_point);
    points.sort_by(|a, b| a.total_cmp(b));
    points
}

/// The relative error of one approximation sampled over a grid.
#[derive(Clone, Debug)]
pub struct Curve {
    config: ApproximationConfig,
    points: Vec<(f32, f64)>,
    reference_error: f64,
}

impl Curve {
    /// Evaluates `config` at every point of `xs`, which must also contain the
    /// configuration's reference point.
    pub fn sample(config: ApproximationConfig, xs: &[f32]) -> Result<Self, Error> {
        let points = xs
            .iter()
            .map(|&x| config.evaluate(x).map(|e| (x, e)))
            .collect::<Result<Vec<_>, Error>>()?;
        let reference_error = config.evaluate(config.reference_point())?;
        log::debug!(
            "sampled {} at {} points, error at {} is {}",
            config.name(),
            points.len(),
            config.reference_point(),
            reference_error
        );
        Ok(Curve {
            config,
            points,
            reference_error,
        })
    }

    /// Samples `config` over `n` grid points in `[DOMAIN_MIN, DOMAIN_MAX]` plus its reference point.
    pub fn over_domain(config: ApproximationConfig, n: usize) -> Result<Self, Error> {
        let xs = sample_points(DOMAIN_MIN, DOMAIN_MAX, n, config.reference_point());
        Curve::sample(config, &xs)
    }

    pub fn config(&self) -> &ApproximationConfig {
        &self.config
    }

    /// `(x, relative error)` pairs in ascending `x`.
    pub fn points(&self) -> &[(f32, f64)] {
        &self.points
    }

    /// The annotated point: the reference point and the error there.
    pub fn reference(&self) -> (f32, f64) {
        (self.config.reference_point(), self.reference_error)
    }

    pub fn max_error(&self) -> f64 {
        self.points.iter().map(|p| p.1).fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::approx::{MY_BEST1, RR_BEST};

    #[test]
    fn test_linspace() {
        let xs = linspace(1.0, 4.0, 512);
        assert_eq!(xs.len(), 512);
        assert_eq!(xs[0], 1.0);
        assert_eq!(xs[511], 4.0);
        assert!((xs[1] - xs[0] - 3.0 / 511.0).abs() < 1e-12);
        assert!(linspace(1.0, 4.0, 0).is_empty());
        assert_eq!(linspace(1.0, 4.0, 1), vec![1.0]);
        assert_eq!(linspace(1.0, 4.0, 4), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_sample_points_contains_reference() {
        for r in [1.9316406f32, 0.5, 7.0, 1.0] {
            let xs = sample_points(DOMAIN_MIN, DOMAIN_MAX, DEFAULT_SAMPLES, r);
            assert_eq!(xs.len(), DEFAULT_SAMPLES + 1);
            assert!(xs.contains(&r));
            assert!(xs.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn test_reference_on_grid_is_kept_twice() {
        let xs = sample_points(DOMAIN_MIN, DOMAIN_MAX, DEFAULT_SAMPLES, 1.0);
        assert_eq!(xs[0], 1.0);
        assert_eq!(xs[1], 1.0);
    }

    #[test]
    fn test_curve() {
        let curve = Curve::over_domain(RR_BEST, DEFAULT_SAMPLES).unwrap();
        assert_eq!(curve.points().len(), DEFAULT_SAMPLES + 1);
        assert!(curve.points().iter().any(|p| p.0 == RR_BEST.reference_point()));
        let (x, e) = curve.reference();
        assert_eq!(x, 1.9316406);
        assert_eq!(e, RR_BEST.relative_error(x));
        assert!(curve.max_error() >= e);
        assert!(curve.max_error() < 1e-3);
    }

    #[test]
    fn test_curve_reference_near_minimum() {
        let curve = Curve::over_domain(MY_BEST1, DEFAULT_SAMPLES).unwrap();
        let (_, e) = curve.reference();
        assert!(e < 0.01);
    }

    #[test]
    fn test_curve_rejects_bad_points() {
        assert!(matches!(
            Curve::sample(RR_BEST, &[1.0, 0.0, 2.0]),
            Err(Error::Domain(_))
        ));
    }
}
