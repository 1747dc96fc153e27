pub mod monte_carlo_integration;
