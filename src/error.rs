//! Errors for integration methods

use crate::Float;

/// Validation and divergence errors returned by the integrators and the
/// trajectory comparison helpers.
#[derive(Debug, Clone)]
pub enum Error {
    InvalidStepSize(Float),
    StepCountNotIntegral { span: Float, h: Float },
    TooManySteps { required: usize, nmax: usize },
    NewtonDiverged { x: Float, iterations: usize },
    LengthMismatch { expected: usize, got: usize },
    GridMismatch { expected: Float, got: Float },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidStepSize(v) => {
                write!(f, "step size h is zero or opposes the integration direction (got {})", v)
            }
            Error::StepCountNotIntegral { span, h } => write!(
                f,
                "interval span must be an integer number of steps (span {}, h {})",
                span, h
            ),
            Error::TooManySteps { required, nmax } => {
                write!(f, "grid requires {} steps but nmax is {}", required, nmax)
            }
            Error::NewtonDiverged { x, iterations } => write!(
                f,
                "Newton iteration failed to converge within {} iterations at x = {}",
                iterations, x
            ),
            Error::LengthMismatch { expected, got } => {
                write!(f, "trajectory lengths differ (expected {}, got {})", expected, got)
            }
            Error::GridMismatch { expected, got } => write!(
                f,
                "trajectories do not share a grid (expected {}, got {})",
                expected, got
            ),
        }
    }
}

impl std::error::Error for Error {}
