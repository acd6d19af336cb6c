use thiserror::Error;

/// Everything that can go wrong while evaluating, plotting or exporting error curves.
#[derive(Debug, Error)]
pub enum Error {
    /// The input is zero, negative, subnormal or not finite.
    #[error("x = {0} is outside the evaluation domain (positive normal f32)")]
    Domain(f32),
    #[error("unknown approximation `{0}`")]
    UnknownApproximation(String),
    #[error("invalid arguments: {0}")]
    Args(#[from] clap::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
