use crate::*;

#[test]
fn test_nelder_mead_quadratic_bowl() {
    let fit = NelderMead::default().minimize(
        |x: &[f64; 2]| (x[0] - 1.0).powi(2) + 10.0 * (x[1] + 2.0).powi(2),
        [0.0, 0.0],
    );
    assert!(fit.converged);
    assert!((fit.x[0] - 1.0).abs() < 1e-6, "{} != {}", fit.x[0], 1.0);
    assert!((fit.x[1] + 2.0).abs() < 1e-6, "{} != {}", fit.x[1], -2.0);
    assert!(fit.value < 1e-10);
}

#[test]
fn test_nelder_mead_rosenbrock() {
    let fit = NelderMead::default().minimize(
        |x: &[f64; 2]| 100.0 * (x[1] - x[0] * x[0]).powi(2) + (1.0 - x[0]).powi(2),
        [-1.2, 1.0],
    );
    assert!(fit.converged);
    assert!((fit.x[0] - 1.0).abs() < 1e-4 && (fit.x[1] - 1.0).abs() < 1e-4, "{:?}", fit.x);
}

#[test]
fn test_nelder_mead_reports_exhausted_budget() {
    let minimizer = NelderMead { max_iterations: 3, ..NelderMead::default() };
    let fit = minimizer.minimize(|x: &[f64; 3]| x.iter().map(|v| (v - 5.0).powi(2)).sum(), [0.0; 3]);
    assert!(!fit.converged);
    assert_eq!(fit.iterations, 3);
    // Still the best vertex seen so far, better than the starting point.
    assert!(fit.value < 75.0);
}

#[test]
fn test_nelder_mead_starting_at_minimum() {
    let fit = NelderMead::default().minimize(|x: &[f64; 1]| (x[0] - 3.0).powi(2), [3.0]);
    assert!(fit.converged);
    assert!((fit.x[0] - 3.0).abs() < 1e-9);
}
