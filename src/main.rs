use std::process::ExitCode;

use roadtrip::trip::solver::{optimal_threshold, SolverConfig};

fn main() -> ExitCode {
    let config = SolverConfig::default();
    match optimal_threshold(&config) {
        Ok(solution) if solution.converged => {
            println!("Optimal a: {:.10}", solution.optimal_point);
            ExitCode::SUCCESS
        }
        Ok(solution) => {
            eprintln!(
                "threshold search did not converge after {} objective evaluations; \
                 best estimate a = {:.10}",
                solution.iterations, solution.optimal_point
            );
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("computation failed: {err}");
            ExitCode::FAILURE
        }
    }
}
