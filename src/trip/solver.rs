use log::debug;

use crate::error::Result;
use crate::math::minimize::{brent, ScalarMinimizeConfig, ScalarMinimizeResult, ScalarObjective};
use crate::math::quadrature::{double, QuadratureConfig};
use crate::trip::cost::{interaction_cost, SPEED_MAX, SPEED_MIN};

/// Configuration for the lane-threshold search.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Quadrature settings shared by the inner and outer integrals
    pub quadrature: QuadratureConfig,
    /// Settings for the bounded search over the threshold
    pub minimize: ScalarMinimizeConfig<f64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            quadrature: QuadratureConfig::default(),
            minimize: ScalarMinimizeConfig {
                max_iterations: 500,
                // Below double-precision resolution near the optimum;
                // the bracket-width stopping rule takes over first.
                tolerance: 1e-15,
            },
        }
    }
}

/// Expected braking loss over all robot pairs for a given lane
/// threshold: the double integral of the pairwise interaction cost
/// over the full speed range.
pub fn expected_braking_loss(threshold: f64, config: &QuadratureConfig) -> Result<f64> {
    let integral = double::integrate(
        |v1, v2| interaction_cost(v1, v2, threshold),
        (SPEED_MIN, SPEED_MAX),
        (SPEED_MIN, SPEED_MAX),
        config,
    )?;
    Ok(integral.value)
}

struct BrakingLoss {
    quadrature: QuadratureConfig,
}

impl ScalarObjective<f64> for BrakingLoss {
    fn evaluate(&self, threshold: f64) -> Result<f64> {
        expected_braking_loss(threshold, &self.quadrature)
    }
}

/// Finds the lane threshold that minimizes the expected braking loss
/// over `[SPEED_MIN, SPEED_MAX]`.
///
/// The result's `converged` flag distinguishes a threshold resolved to
/// tolerance from the best estimate left over when the evaluation
/// budget runs out; callers must not treat the latter as exact.
pub fn optimal_threshold(config: &SolverConfig) -> Result<ScalarMinimizeResult<f64>> {
    let objective = BrakingLoss {
        quadrature: config.quadrature.clone(),
    };
    let result = brent::minimize(&objective, SPEED_MIN, SPEED_MAX, &config.minimize)?;
    debug!(
        "threshold search finished after {} objective evaluations (converged: {})",
        result.iterations, result.converged
    );
    Ok(result)
}
