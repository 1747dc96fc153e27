use log::debug;
use num_traits::Float;
use std::fmt::Debug;

use crate::error::{Error, Result};
use crate::math::minimize::{ScalarMinimizeConfig, ScalarMinimizeResult, ScalarObjective};

/// Minimizes a scalar objective over a closed interval using Brent's
/// bounded method.
///
/// The method combines golden-section steps with successive parabolic
/// interpolation through the three best points seen so far. Every
/// trial point lies strictly inside `[lower, upper]`; the objective is
/// never evaluated outside the bracket.
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
/// search statistics. If the evaluation budget runs out first, the
/// result carries the best point seen so far with `converged` set to
/// `false`.
///
/// # Examples
///
/// ```
/// use roadtrip::math::minimize::brent::minimize;
/// use roadtrip::math::minimize::{ScalarMinimizeConfig, ScalarObjective};
///
/// struct Parabola;
///
/// impl ScalarObjective<f64> for Parabola {
///     fn evaluate(&self, x: f64) -> roadtrip::Result<f64> {
///         Ok((x - 1.0) * (x - 1.0))
///     }
/// }
///
/// let config = ScalarMinimizeConfig::default();
/// let result = minimize(&Parabola, -4.0, 4.0, &config).unwrap();
/// assert!(result.converged);
/// assert!((result.optimal_point - 1.0).abs() < 1e-6);
/// ```
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

    let two = T::from(2.0).unwrap();
    let half = T::from(0.5).unwrap();
    let third = T::from(3.0).unwrap();
    // 0.381966..., the fraction that splits an interval in golden ratio.
    let golden_mean = half * (third - T::from(5.0).unwrap().sqrt());
    let sqrt_eps = T::epsilon().sqrt();

    let mut a = lower;
    let mut b = upper;
    let mut xf = a + golden_mean * (b - a);
    let mut nfc = xf;
    let mut fulc = xf;
    let mut rat = T::zero();
    let mut e = T::zero();
    let mut fx = f.evaluate(xf)?;
    let mut iterations = 1;
    let mut fnfc = fx;
    let mut ffulc = fx;
    let mut xm = half * (a + b);
    let mut tol1 = sqrt_eps * xf.abs() + config.tolerance / third;
    let mut tol2 = two * tol1;
    let mut converged = true;

    while (xf - xm).abs() > tol2 - half * (b - a) {
        if iterations >= config.max_iterations {
            debug!("bounded minimization stopped at the {iterations}-evaluation budget");
            converged = false;
            break;
        }

        let mut golden = true;

        // Attempt a parabolic fit through the three best points.
        if e.abs() > tol1 {
            let r = (xf - nfc) * (fx - ffulc);
            let mut q = (xf - fulc) * (fx - fnfc);
            let mut p = (xf - fulc) * q - (xf - nfc) * r;
            q = two * (q - r);
            if q > T::zero() {
                p = -p;
            }
            q = q.abs();
            let r = e;
            e = rat;

            // The fit is usable when it lands inside the bracket and
            // moves less than half the step before last.
            if p.abs() < (half * q * r).abs() && p > q * (a - xf) && p < q * (b - xf) {
                golden = false;
                rat = p / q;
                let x = xf + rat;
                if (x - a) < tol2 || (b - x) < tol2 {
                    let si = if xm >= xf { T::one() } else { -T::one() };
                    rat = tol1 * si;
                }
            }
        }

        // Fall back to a golden-section step into the larger half.
        if golden {
            e = if xf >= xm { a - xf } else { b - xf };
            rat = golden_mean * e;
        }

        let si = if rat >= T::zero() { T::one() } else { -T::one() };
        let x = xf + si * rat.abs().max(tol1);
        let fu = f.evaluate(x)?;
        iterations += 1;

        if fu <= fx {
            if x >= xf {
                a = xf;
            } else {
                b = xf;
            }
            fulc = nfc;
            ffulc = fnfc;
            nfc = xf;
            fnfc = fx;
            xf = x;
            fx = fu;
        } else {
            if x < xf {
                a = x;
            } else {
                b = x;
            }
            if fu <= fnfc || nfc == xf {
                fulc = nfc;
                ffulc = fnfc;
                nfc = x;
                fnfc = fu;
            } else if fu <= ffulc || fulc == xf || fulc == nfc {
                fulc = x;
                ffulc = fu;
            }
        }

        xm = half * (a + b);
        tol1 = sqrt_eps * xf.abs() + config.tolerance / third;
        tol2 = two * tol1;
    }

    Ok(ScalarMinimizeResult {
        optimal_point: xf,
        optimal_value: fx,
        iterations,
        converged,
    })
}
