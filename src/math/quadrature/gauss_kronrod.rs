//! Adaptive Gauss-Kronrod quadrature over a bounded interval.
//!
//! Each panel is evaluated with the 15-point Kronrod extension of the
//! 7-point Gauss rule; the difference between the two estimates drives
//! panel acceptance and bisection.

use log::debug;

use crate::error::{Error, Result};
use crate::math::quadrature::{QuadratureConfig, QuadratureResult};

// Abscissae of the 15-point Kronrod rule on [-1, 1]. Points at odd
// indices (and the midpoint) form the embedded 7-point Gauss rule.
const XGK: [f64; 8] = [
    0.991455371120813,
    0.949107912342759,
    0.864864423359769,
    0.741531185599394,
    0.586087235467691,
    0.405845151377397,
    0.207784955007898,
    0.0,
];

// Weights of the 15-point Kronrod rule.
const WGK: [f64; 8] = [
    0.022935322010529,
    0.063092092629979,
    0.104790010322250,
    0.140653259715525,
    0.169004726639267,
    0.190350578064785,
    0.204432940075298,
    0.209482141084728,
];

// Weights of the embedded 7-point Gauss rule.
const WG: [f64; 4] = [
    0.129484966168870,
    0.279705391489277,
    0.381830050505119,
    0.417959183673469,
];

/// Integrates `f` over `[lower, upper]` with adaptive Gauss-Kronrod
/// quadrature.
///
/// Panels are bisected until the error estimate of each panel meets
/// either its share of `config.abs_tol` or the per-panel relative
/// tolerance. The integrand is fallible so that nested integrals can
/// surface their own failures.
///
/// # Arguments
///
/// * `f` - The integrand to integrate
/// * `lower` - Lower bound of the integration interval
/// * `upper` - Upper bound of the integration interval
/// * `config` - Configuration options for the quadrature process
///
/// # Returns
///
/// Returns a `QuadratureResult` containing the integral value and
/// integration statistics, or an error if the bounds are reversed or
/// the evaluation budget is exhausted before the tolerance is met.
///
/// # Examples
///
/// ```
/// use roadtrip::math::quadrature::gauss_kronrod::integrate;
/// use roadtrip::math::quadrature::QuadratureConfig;
///
/// let config = QuadratureConfig::default();
/// let result = integrate(|x| Ok(x * x), 0.0, 1.0, &config).unwrap();
/// assert!((result.value - 1.0 / 3.0).abs() < 1e-12);
/// ```
pub fn integrate<F>(
    mut f: F,
    lower: f64,
    upper: f64,
    config: &QuadratureConfig,
) -> Result<QuadratureResult>
where
    F: FnMut(f64) -> Result<f64>,
{
    if lower > upper {
        return Err(Error::InvalidInterval { lower, upper });
    }
    if lower == upper {
        return Ok(QuadratureResult {
            value: 0.0,
            error_estimate: 0.0,
            evaluations: 0,
        });
    }

    let mut panels = vec![(lower, upper, config.abs_tol)];
    let mut value = 0.0;
    let mut error_estimate = 0.0;
    let mut evaluations = 0;

    while let Some((lo, hi, tol)) = panels.pop() {
        let (panel_value, panel_error) = kronrod_panel(&mut f, lo, hi)?;
        evaluations += 15;

        if evaluations > config.max_evaluations {
            debug!(
                "quadrature on [{lower}, {upper}] gave up after {evaluations} evaluations \
                 (panel [{lo}, {hi}] error estimate {panel_error:.3e})"
            );
            return Err(Error::ToleranceNotReached {
                evaluations,
                error_estimate: panel_error,
            });
        }

        let mid = 0.5 * (lo + hi);
        let accepted = panel_error <= tol
            || panel_error <= config.rel_tol * panel_value.abs()
            // panel already at machine resolution, cannot subdivide further
            || mid <= lo
            || mid >= hi;

        if accepted {
            value += panel_value;
            error_estimate += panel_error;
        } else {
            panels.push((lo, mid, 0.5 * tol));
            panels.push((mid, hi, 0.5 * tol));
        }
    }

    Ok(QuadratureResult {
        value,
        error_estimate,
        evaluations,
    })
}

/// Applies the (G7, K15) rule pair to a single panel, returning the
/// Kronrod estimate and the |K15 - G7| error estimate.
fn kronrod_panel<F>(f: &mut F, lower: f64, upper: f64) -> Result<(f64, f64)>
where
    F: FnMut(f64) -> Result<f64>,
{
    let center = 0.5 * (lower + upper);
    let half_length = 0.5 * (upper - lower);

    let f_center = f(center)?;
    let mut kronrod = WGK[7] * f_center;
    let mut gauss = WG[3] * f_center;

    for (i, &abscissa) in XGK.iter().take(7).enumerate() {
        let offset = half_length * abscissa;
        let above = f(center + offset)?;
        let below = f(center - offset)?;
        kronrod += WGK[i] * (above + below);
        if i % 2 == 1 {
            gauss += WG[i / 2] * (above + below);
        }
    }

    let value = kronrod * half_length;
    let error = ((kronrod - gauss) * half_length).abs();
    Ok((value, error))
}
