//! invsqrt-error evaluates and plots the relative error of
//! [fast inverse square root](https://en.wikipedia.org/wiki/Fast_inverse_square_root)
//! approximations. Each approximation is the same two step recipe with different constants:
//!
//! * Reinterpret the bits of a single precision `x` as a `u32` and compute
//! `magic - (bits >> 1)`. Reinterpreted as a float again, this is a rough estimate `y` of `1/sqrt(x)`.
//! * Refine `y` with one step of Newton's method on `f(y) = 1/y² - x`, generalized to
//! `a * y * (b - x * y * y)`. The textbook step is `a = 0.5`, `b = 3.0`.
//!
//! The relative error `|approx - exact| / exact` repeats for every power of four, so sampling
//! `x` over `[1, 4]` shows all of it.
//!
//! # Basic usage
//!
//! ```
//! use invsqrt_error::approx::RR_BEST;
//!
//! // Relative error of the lowest max error constants, where that max error occurs
//! let error = RR_BEST.evaluate(1.9316406).unwrap();
//! assert!((error - 6.4999e-4).abs() < 1e-7);
//! // The error is the same a power of four further along
//! assert_eq!(error, RR_BEST.evaluate(4.0 * 1.9316406).unwrap());
//! ```
//!
//! # Custom constants
//!
//! ```
//! use invsqrt_error::ApproximationConfig;
//!
//! // Approximations can be instantiated statically.
//! const QUAKE: ApproximationConfig = ApproximationConfig::new("quake", 0x5f3759df, 0.5, 3.0, 1.0);
//!
//! // The initial estimate before refinement
//! let y = QUAKE.initial_estimate(4.0);
//! assert!((y - 0.5).abs() < 0.02);
//! // One Newton step later
//! let y = QUAKE.approximate(4.0);
//! assert!((y - 0.5).abs() < 0.001);
//!
//! // Inputs that are not positive normal floats are rejected
//! assert!(QUAKE.evaluate(0.0).is_err());
//! assert!(QUAKE.evaluate(-4.0).is_err());
//! ```
//!
//! # Plotting
//!
//! ```
//! use invsqrt_error::approx::{MY_BEST1, RR_BEST};
//! use invsqrt_error::render::{render, ChartOptions};
//! use invsqrt_error::sampling::{Curve, DEFAULT_SAMPLES};
//!
//! let curves = vec![
//!     Curve::over_domain(RR_BEST, DEFAULT_SAMPLES).unwrap(),
//!     Curve::over_domain(MY_BEST1, DEFAULT_SAMPLES).unwrap(),
//! ];
//! println!("{}", render(&curves, &ChartOptions::default()));
//! ```

pub mod approx;
pub mod driver;
mod error;
pub mod export;
pub mod options;
pub mod render;
pub mod sampling;
pub mod summary;

pub use approx::ApproximationConfig;
pub use error::Error;
