pub mod double;
pub mod gauss_kronrod;

pub use double::integrate as double_integrate;
pub use gauss_kronrod::integrate as gauss_kronrod_integrate;

/// Configuration options for adaptive quadrature.
#[derive(Debug, Clone)]
pub struct QuadratureConfig {
    /// Absolute tolerance on the value of the whole integral
    pub abs_tol: f64,
    /// Relative tolerance applied to each accepted panel
    pub rel_tol: f64,
    /// Maximum number of integrand evaluations per one-dimensional integral
    pub max_evaluations: usize,
}

impl Default for QuadratureConfig {
    fn default() -> Self {
        Self {
            abs_tol: 1e-9,
            rel_tol: 1e-9,
            max_evaluations: 100_000,
        }
    }
}

/// Result of an adaptive quadrature computation.
#[derive(Debug, Clone)]
pub struct QuadratureResult {
    /// The computed integral value
    pub value: f64,
    /// Sum of the error estimates of the accepted panels
    pub error_estimate: f64,
    /// Number of integrand evaluations performed
    pub evaluations: usize,
}
