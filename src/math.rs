pub mod minimize;
pub mod monte_carlo;
pub mod quadrature;

pub use minimize::{
    brent_minimize, golden_section_minimize, ScalarMinimizeConfig, ScalarMinimizeResult,
    ScalarObjective,
};

pub use quadrature::{
    double_integrate, gauss_kronrod_integrate, QuadratureConfig, QuadratureResult,
};

pub use monte_carlo::monte_carlo_integration::monte_carlo_integration_2d;
