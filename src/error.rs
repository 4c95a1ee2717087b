//! Error types for grid-world construction and value iteration.

use thiserror::Error;

/// Errors reported by [`crate::mdp::GridWorld`] and its solvers.
///
/// Every variant describes a configuration or caller mistake. Valid
/// configurations never fail once a sweep has started, except when an
/// explicit sweep cap is exhausted.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("discount factor must lie strictly between 0 and 1, got {gamma}")]
    InvalidDiscount { gamma: f64 },

    #[error("convergence epsilon must be positive and finite, got {epsilon}")]
    InvalidEpsilon { epsilon: f64 },

    #[error("noise model must satisfy intended + 2 * drift = 1 with non-negative terms, got intended={intended}, drift={drift}")]
    InvalidNoise { intended: f64, drift: f64 },

    #[error("state ({row}, {col}) is outside the {width}x{height} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    #[error("sweep cap must allow at least one sweep")]
    InvalidSweepCap,

    #[error("value iteration did not converge within {sweeps} sweeps (last delta {delta})")]
    NotConverged { sweeps: usize, delta: f64 },
}

/// Convenience alias for results carrying the crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
