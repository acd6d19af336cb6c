use core::fmt;

use crate::Error;

/// A fast inverse square root approximation: the magic constant used for the
/// initial bit level estimate, the two coefficients of the Newton refinement step
/// and a point at which the error is annotated when plotting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ApproximationConfig {
    name: &'static str,
    /// Subtrahend of the bit pattern transform `magic - (bits(x) >> 1)`.
    magic: u32,
    /// Refinement is `a * y * (b - x * y * y)`.
    a: f32,
    b: f32,
    reference_point: f32,
}

/// Quake III Arena's constant with the textbook Newton step.
pub const QUAKE_ORIG: ApproximationConfig =
    ApproximationConfig::new("quake_orig", 0x5f3759df, 0.5, 3.0, 1.0);
/// Constants fitted for the lowest RMS error.
pub const RR_LSQ: ApproximationConfig =
    ApproximationConfig::new("rr_lsq", 0x5f1ad0a1, 0.755897697, 2.27828001, 1.0);
/// Constants fitted for the lowest max error, annotated where that max error occurs.
pub const RR_BEST: ApproximationConfig =
    ApproximationConfig::new("rr_best", 0x5f1ffff9, 0.703952253, 2.38924456, 1.9316406);
pub const MY_BEST1: ApproximationConfig =
    ApproximationConfig::new("my_best1", 0x5f1ffcee, 0.703950703, 2.389243603, 1.0);
pub const MY_BEST2: ApproximationConfig =
    ApproximationConfig::new("my_best2", 0x5f5f9f17, 0.250249714, 4.761075497, 1.0);

/// All known approximations, in plotting order.
pub const PRESETS: [ApproximationConfig; 5] = [QUAKE_ORIG, RR_LSQ, RR_BEST, MY_BEST1, MY_BEST2];

/// Names of [`PRESETS`], in the same order.
pub const PRESET_NAMES: [&str; 5] = ["quake_orig", "rr_lsq", "rr_best", "my_best1", "my_best2"];

/// The approximations plotted when nothing else is requested.
pub const DEFAULT_ENABLED: [&str; 3] = ["rr_best", "my_best1", "my_best2"];

/// Looks up one of the [`PRESETS`] by name.
pub fn preset(name: &str) -> Result<ApproximationConfig, Error> {
    PRESETS
        .iter()
        .find(|config| config.name == name)
        .copied()
        .ok_or_else(|| Error::UnknownApproximation(name.to_owned()))
}

impl fmt::Display for ApproximationConfig {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        writeln!(fmt, "{} {{", self.name)?;
        writeln!(fmt, "  magic: {:#010x},", self.magic)?;
        writeln!(fmt, "  a: {:.9},", self.a)?;
        writeln!(fmt, "  b: {:.9},", self.b)?;
        writeln!(fmt, "  reference_point: {}", self.reference_point)?;
        writeln!(fmt, "}}")?;
        Ok(())
    }
}

impl ApproximationConfig {
    /// Creates an approximation. Usable in constant expressions.
    ///
    /// # Arguments
    ///
    /// * `name` - Label used in the legend.
    /// * `magic` - The magic constant. It is not validated; a constant that does not
    /// match the single precision bit layout gives meaningless (but finite or NaN) errors.
    /// * `a` - Scale factor of the refinement step.
    /// * `b` - Offset of the refinement step.
    /// * `reference_point` - Where the error gets annotated. May lie outside the sampled range.
    pub const fn new(name: &'static str, magic: u32, a: f32, b: f32, reference_point: f32) -> Self {
        ApproximationConfig {
            name,
            magic,
            a,
            b,
            reference_point,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn magic(&self) -> u32 {
        self.magic
    }

    pub fn a(&self) -> f32 {
        self.a
    }

    pub fn b(&self) -> f32 {
        self.b
    }

    pub fn reference_point(&self) -> f32 {
        self.reference_point
    }

    /// The bit hack alone: the single precision pattern of `x` shifted right by one
    /// and subtracted from the magic constant.
    ///
    /// This only makes sense on `f32`. Doing the same on `f64` bits with a 32 bit
    /// constant gives a completely different curve.
    pub fn initial_estimate(&self, x: f32) -> f32 {
        let u = x.to_bits();
        f32::from_bits(self.magic.wrapping_sub(u >> 1))
    }

    /// The initial estimate refined by one Newton step, in single precision.
    pub fn approximate(&self, x: f32) -> f32 {
        let y = self.initial_estimate(x);
        self.a * y * (self.b - x * y * y)
    }

    /// Relative error `|approx - exact| / exact` at `x`, where the exact value
    /// `1 / sqrt(x)` is computed in double precision.
    ///
    /// No domain check is done. For `x <= 0`, subnormal or non finite `x` the
    /// result is meaningless; use [`ApproximationConfig::evaluate`] when the input
    /// is not known to be valid.
    pub fn relative_error(&self, x: f32) -> f64 {
        let y_approx = self.approximate(x) as f64;
        let y_true = 1.0 / (x as f64).sqrt();
        (y_approx - y_true).abs() / y_true
    }

    /// Same as [`ApproximationConfig::relative_error`] but rejects inputs that are
    /// not positive normal floats.
    ///
    /// # Arguments
    ///
    /// * `x` - Evaluate the error at this x value.
    pub fn evaluate(&self, x: f32) -> Result<f64, Error> {
        if !(x.is_normal() && x > 0.0) {
            return Err(Error::Domain(x));
        }
        Ok(self.relative_error(x))
    }
}
