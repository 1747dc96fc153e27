use std::cell::Cell;

use crate::error::Result;
use crate::math::quadrature::{gauss_kronrod, QuadratureConfig, QuadratureResult};

/// Integrates `f` over the rectangle `x_range` x `y_range` by nesting
/// the adaptive one-dimensional rule: the inner integral over `x` is
/// itself the integrand of the outer integral over `y`.
///
/// Both levels share the same `config`. The reported evaluation count
/// is the total number of calls to `f`; the error estimate is the
/// outer rule's estimate, which treats each inner integral as exact.
///
/// # Examples
///
/// ```
/// use roadtrip::math::quadrature::double::integrate;
/// use roadtrip::math::quadrature::QuadratureConfig;
///
/// let config = QuadratureConfig::default();
/// let result = integrate(|x, y| x * y, (0.0, 1.0), (0.0, 1.0), &config).unwrap();
/// assert!((result.value - 0.25).abs() < 1e-10);
/// ```
pub fn integrate<F>(
    f: F,
    x_range: (f64, f64),
    y_range: (f64, f64),
    config: &QuadratureConfig,
) -> Result<QuadratureResult>
where
    F: Fn(f64, f64) -> f64,
{
    let evaluations = Cell::new(0usize);
    let outer = gauss_kronrod::integrate(
        |y| {
            let inner = gauss_kronrod::integrate(|x| Ok(f(x, y)), x_range.0, x_range.1, config)?;
            evaluations.set(evaluations.get() + inner.evaluations);
            Ok(inner.value)
        },
        y_range.0,
        y_range.1,
        config,
    )?;

    Ok(QuadratureResult {
        value: outer.value,
        error_estimate: outer.error_estimate,
        evaluations: evaluations.get(),
    })
}
