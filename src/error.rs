use thiserror::Error;

/// Errors produced by the numerical routines in this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The requested bracket or integration interval is reversed.
    #[error("invalid interval: lower bound {lower} is not below upper bound {upper}")]
    InvalidInterval { lower: f64, upper: f64 },

    /// Adaptive quadrature exhausted its evaluation budget before the
    /// error estimate met the requested tolerance.
    #[error(
        "quadrature spent {evaluations} evaluations without reaching tolerance \
         (last panel error estimate {error_estimate:.3e})"
    )]
    ToleranceNotReached {
        evaluations: usize,
        error_estimate: f64,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
