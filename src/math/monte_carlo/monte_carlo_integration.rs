use rand::Rng;

/// Performs Monte Carlo integration of the function `f` over the rectangle
/// `x_range` x `y_range` using the specified number of sample pairs.
pub fn monte_carlo_integration_2d<F>(
    f: F,
    x_range: (f64, f64),
    y_range: (f64, f64),
    samples: usize,
) -> f64
where
    F: Fn(f64, f64) -> f64,
{
    let mut rng = rand::thread_rng();
    let mut sum = 0.0;
    for _ in 0..samples {
        let x = rng.gen_range(x_range.0..x_range.1);
        let y = rng.gen_range(y_range.0..y_range.1);
        sum += f(x, y);
    }
    let avg = sum / samples as f64;
    (x_range.1 - x_range.0) * (y_range.1 - y_range.0) * avg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monte_carlo_integration_2d() {
        // Integrate f(x, y) = x * y over [0,1] x [0,1]. The exact value is 0.25.
        let result = monte_carlo_integration_2d(|x, y| x * y, (0.0, 1.0), (0.0, 1.0), 200_000);
        assert!((result - 0.25).abs() < 0.01);
    }
}
