pub mod error;
pub mod math;
pub mod trip;

pub use error::{Error, Result};
pub use trip::{expected_braking_loss, interaction_cost, optimal_threshold};
