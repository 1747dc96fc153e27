pub mod cost;
pub mod solver;

pub use cost::{interaction_cost, SPEED_MAX, SPEED_MIN};
pub use solver::{expected_braking_loss, optimal_threshold, SolverConfig};
