use num_traits::Float;
use std::fmt::Debug;

use crate::error::{Error, Result};
use crate::math::minimize::{ScalarMinimizeConfig, ScalarMinimizeResult, ScalarObjective};

/// Minimizes a scalar objective over a closed interval using
/// golden-section search.
///
/// Converges linearly and needs no derivative information, which makes
/// it a useful cross-check for the faster Brent variant. Only points
/// strictly inside `[lower, upper]` are evaluated.
///
/// # Arguments
///
/// * `f` - The objective function to minimize
/// * `lower` - Lower bound of the search interval
/// * `upper` - Upper bound of the search interval
/// * `config` - Configuration options for the minimization process
///
/// # Returns
///
/// Returns a `ScalarMinimizeResult` containing the minimum found and
/// search statistics.
pub fn minimize<T, F>(
    f: &F,
    lower: T,
    upper: T,
    config: &ScalarMinimizeConfig<T>,
) -> Result<ScalarMinimizeResult<T>>
where
    T: Float + Debug,
    F: ScalarObjective<T>,
{
    if lower >= upper {
        return Err(Error::InvalidInterval {
            lower: num_traits::cast(lower).unwrap_or(f64::NAN),
            upper: num_traits::cast(upper).unwrap_or(f64::NAN),
        });
    }

    // 0.618033..., the inverse golden ratio.
    let inv_phi = (T::from(5.0).unwrap().sqrt() - T::one()) / T::from(2.0).unwrap();

    let mut a = lower;
    let mut b = upper;
    let mut c = b - inv_phi * (b - a);
    let mut d = a + inv_phi * (b - a);
    let mut fc = f.evaluate(c)?;
    let mut fd = f.evaluate(d)?;
    let mut iterations = 2;
    let mut converged = false;

    while iterations < config.max_iterations {
        if (b - a).abs() <= config.tolerance {
            converged = true;
            break;
        }
        if fc < fd {
            b = d;
            d = c;
            fd = fc;
            c = b - inv_phi * (b - a);
            fc = f.evaluate(c)?;
        } else {
            a = c;
            c = d;
            fc = fd;
            d = a + inv_phi * (b - a);
            fd = f.evaluate(d)?;
        }
        iterations += 1;
    }

    if (b - a).abs() <= config.tolerance {
        converged = true;
    }

    let (optimal_point, optimal_value) = if fc < fd { (c, fc) } else { (d, fd) };
    Ok(ScalarMinimizeResult {
        optimal_point,
        optimal_value,
        iterations,
        converged,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::minimize::brent;

    struct Parabola;

    impl ScalarObjective<f64> for Parabola {
        fn evaluate(&self, x: f64) -> Result<f64> {
            Ok((x - 2.0) * (x - 2.0))
        }
    }

    #[test]
    fn test_parabola_minimum() {
        let config = ScalarMinimizeConfig {
            max_iterations: 200,
            tolerance: 1e-8,
        };

        let result = minimize(&Parabola, 0.0, 5.0, &config).unwrap();

        assert!(result.converged);
        assert!((result.optimal_point - 2.0).abs() < 1e-6);
    }

    struct Cosine;

    impl ScalarObjective<f64> for Cosine {
        fn evaluate(&self, x: f64) -> Result<f64> {
            Ok(x.cos())
        }
    }

    #[test]
    fn test_agrees_with_brent() {
        let config = ScalarMinimizeConfig {
            max_iterations: 200,
            tolerance: 1e-10,
        };

        // cos has its minimum at pi on [2, 4].
        let golden = minimize(&Cosine, 2.0, 4.0, &config).unwrap();
        let brent = brent::minimize(&Cosine, 2.0, 4.0, &config).unwrap();

        assert!(golden.converged);
        assert!(brent.converged);
        assert!((golden.optimal_point - std::f64::consts::PI).abs() < 1e-6);
        assert!((golden.optimal_point - brent.optimal_point).abs() < 1e-5);
        assert!((golden.optimal_value - brent.optimal_value).abs() < 1e-10);
    }

    #[test]
    fn test_iteration_budget_reports_non_convergence() {
        let config = ScalarMinimizeConfig {
            max_iterations: 4,
            tolerance: 1e-12,
        };

        let result = minimize(&Parabola, 0.0, 5.0, &config).unwrap();

        assert!(!result.converged);
        assert!(result.iterations <= 4);
    }

    #[test]
    fn test_reversed_bracket_rejected() {
        let config = ScalarMinimizeConfig::default();

        let result = minimize(&Parabola, 2.0, 2.0, &config);

        assert!(matches!(result, Err(Error::InvalidInterval { .. })));
    }
}
