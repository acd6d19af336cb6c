//! Error statistics of a sampled curve, with the maximum refined between grid points.

use core::fmt;

use crate::sampling::Curve;
use crate::ApproximationConfig;

/// How many of the largest grid samples get a closer look.
const PEAKS_TO_REFINE: usize = 4;
const MAX_BISECTIONS: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ErrorSummary {
    pub max_error: f64,
    /// x position where the max error occurs.
    pub max_error_loc: f32,
    pub mean_error: f64,
    pub rms_error: f64,
}

/// Estimates the sign of the slope of the error at `x`. Not scaled by the step.
fn error_slope(config: &ApproximationConfig, x: f32) -> f64 {
    const DX: f32 = 1024.0 * f32::EPSILON;
    config.relative_error(x + DX) - config.relative_error(x - DX)
}

/// Finds the peak of the error within `(a, b)`, assuming the slope is positive at `a`
/// and negative at `b`.
fn find_peak(config: &ApproximationConfig, a: f32, b: f32) -> (f32, f64) {
    let mut l = a;
    let mut r = b;
    for _ in 0..MAX_BISECTIONS {
        let m = l + 0.5 * (r - l);
        if m <= l || m >= r {
            // l and r are adjacent floats
            break;
        }
        let slope = error_slope(config, m);
        if slope < 0.0 {
            r = m;
        } else if slope > 0.0 {
            l = m;
        } else {
            return (m, config.relative_error(m));
        }
    }
    let left = config.relative_error(l);
    let right = config.relative_error(r);
    if left > right {
        (l, left)
    } else {
        (r, right)
    }
}

impl ErrorSummary {
    /// Summarizes `curve`. The grid spacing used for bracketing peaks is derived
    /// from the number of samples. An empty curve gives NaN statistics.
    pub fn of(curve: &Curve) -> Self {
        let config = curve.config();
        let points = curve.points();
        let n = points.len() as f64;
        let mean_error = points.iter().map(|p| p.1).sum::<f64>() / n;
        let rms_error = (points.iter().map(|p| p.1 * p.1).sum::<f64>() / n).sqrt();

        let mut by_error = points.to_vec();
        by_error.sort_by(|a, b| b.1.total_cmp(&a.1));
        let (mut max_error_loc, mut max_error) = by_error
            .first()
            .copied()
            .unwrap_or((f32::NAN, f64::NAN));

        let half_width = 3.0 / points.len().max(1) as f32;
        for &(x, _) in by_error.iter().take(PEAKS_TO_REFINE) {
            let x1 = x - half_width;
            let x2 = x + half_width;
            if x1 <= 0.0 {
                continue;
            }
            // A positive left slope and a negative right slope bracket a maximum.
            if error_slope(config, x1) > 0.0 && error_slope(config, x2) < 0.0 {
                let (loc, err) = find_peak(config, x1, x2);
                if err > max_error {
                    max_error = err;
                    max_error_loc = loc;
                }
            }
        }
        log::info!(
            "{}: max error {:e} at {}, mean {:e}",
            config.name(),
            max_error,
            max_error_loc,
            mean_error
        );
        ErrorSummary {
            max_error,
            max_error_loc,
            mean_error,
            rms_error,
        }
    }
}

/// One table row: name, max error, its location, mean, rms and the constants.
pub struct SummaryRow<'a> {
    pub config: &'a ApproximationConfig,
    pub summary: ErrorSummary,
}

impl fmt::Display for SummaryRow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<12}{:<16.10}{:<12.7}{:<14.6e}{:<14.6e}{:<12x}{:<13.9}{:.9}",
            self.config.name(),
            self.summary.max_error,
            self.summary.max_error_loc,
            self.summary.mean_error,
            self.summary.rms_error,
            self.config.magic(),
            self.config.a(),
            self.config.b()
        )
    }
}

pub const SUMMARY_HEADER: &str = "name        max_error       max_at      mean          rms           magic       a            b";
