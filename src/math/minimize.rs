pub mod brent;
pub mod golden_section;

use num_traits::Float;
use std::fmt::Debug;

use crate::error::Result;

pub use brent::minimize as brent_minimize;
pub use golden_section::minimize as golden_section_minimize;

/// A trait for scalar objective functions that can be minimized.
///
/// Evaluation is fallible so that objectives backed by other numerical
/// routines (such as an adaptive integral) can surface their errors
/// through the minimizer.
pub trait ScalarObjective<T>
where
    T: Float + Debug,
{
    /// Evaluates the objective function at the given point.
    fn evaluate(&self, x: T) -> Result<T>;
}

/// Configuration options for scalar minimization algorithms.
#[derive(Debug, Clone)]
pub struct ScalarMinimizeConfig<T>
where
    T: Float + Debug,
{
    /// Maximum number of objective evaluations
    pub max_iterations: usize,
    /// Absolute tolerance on the location of the minimum
    pub tolerance: T,
}

impl<T> Default for ScalarMinimizeConfig<T>
where
    T: Float + Debug,
{
    fn default() -> Self {
        Self {
            max_iterations: 500,
            tolerance: T::from(1e-8).unwrap(),
        }
    }
}

/// Result of a scalar minimization.
#[derive(Debug, Clone)]
pub struct ScalarMinimizeResult<T>
where
    T: Float + Debug,
{
    /// The location of the minimum found
    pub optimal_point: T,
    /// The value of the objective function at the minimum
    pub optimal_value: T,
    /// Number of objective evaluations performed
    pub iterations: usize,
    /// Whether the search met its tolerance before exhausting the
    /// iteration budget
    pub converged: bool,
}
