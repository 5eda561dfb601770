//! Least-Squares Line Fitting Examples
//!
//! This example walks through the common fitting scenarios:
//! - A basic fit with uncertainties
//! - A configured fit with diagnostics, residuals and confidence intervals
//! - Handling the two numerical guards
//! - Scale-aware degeneracy checking for small-magnitude x
//!
//! Each scenario includes the expected output as comments.

use linfit::prelude::*;

fn main() -> Result<(), FitError> {
    println!("{}", "=".repeat(80));
    println!("Least-Squares Line Fitting - Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_basic_fit()?;
    example_2_configured_fit()?;
    example_3_guards();
    example_4_relative_guard()?;

    Ok(())
}

/// Example 1: Basic Fit
/// Fit y ≈ 2x and print the summary
fn example_1_basic_fit() -> Result<(), FitError> {
    println!("Example 1: Basic Fit");
    println!("{}", "-".repeat(80));

    let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let y = vec![2.1, 3.9, 6.2, 7.8, 10.1];

    let result = fit(&x, &y)?;
    println!("{}", result);

    // Intercept (a):     0.050000 ± 0.198074
    // Slope (b):         1.990000 ± 0.059722
    // Residual SD:       0.188856
    println!();
    Ok(())
}

/// Example 2: Configured Fit
/// Request residuals, diagnostics and 95% intervals
fn example_2_configured_fit() -> Result<(), FitError> {
    println!("Example 2: Configured Fit");
    println!("{}", "-".repeat(80));

    let x: Vec<f64> = (1..=8).map(|i| i as f64).collect();
    let y = vec![2.1, 3.8, 6.2, 7.9, 10.3, 11.8, 14.1, 15.7];

    let model = LeastSquares::new()
        .require_finite()
        .return_residuals()
        .return_diagnostics()
        .build()?;

    let result = model.fit(&x, &y)?;
    println!("{}", result);

    let ci = result.parameter_intervals(0.95)?;
    println!(
        "95% interval for slope: [{:.4}, {:.4}] (z = {:.3})",
        ci.slope.0, ci.slope.1, ci.critical_value
    );
    // 95% interval for slope: [1.9071, 2.0429] (z = 1.960)
    println!("Prediction at x = 10: {:.4}", result.predict(10.0));
    // Prediction at x = 10: 19.8500
    println!();
    Ok(())
}

/// Example 3: Guards
/// Too few points and constant x are reported as distinct errors
fn example_3_guards() {
    println!("Example 3: Guards");
    println!("{}", "-".repeat(80));

    match fit(&[1.0, 2.0], &[3.0, 4.0]) {
        Err(e @ FitError::InsufficientData { .. }) => println!("Two points: {}", e),
        other => println!("Unexpected: {:?}", other),
    }
    // Two points: Insufficient data: got 2 points, need at least 3

    match fit(&[5.0, 5.0, 5.0, 5.0], &[1.0, 2.0, 3.0, 4.0]) {
        Err(e @ FitError::DegenerateInput { .. }) => println!("Constant x: {}", e),
        other => println!("Unexpected: {:?}", other),
    }
    // Constant x: Degenerate input: denominator 0e0 is below 1e-6 (x-values have no spread)
    println!();
}

/// Example 4: Relative Guard
/// Small-magnitude x fails the absolute guard but passes the relative one
fn example_4_relative_guard() -> Result<(), FitError> {
    println!("Example 4: Relative Guard");
    println!("{}", "-".repeat(80));

    let x = vec![1e-4, 2e-4, 3e-4, 4e-4];
    let y: Vec<f64> = x.iter().map(|&xi| 1.0 + 2.0 * xi).collect();

    if let Err(e) = fit(&x, &y) {
        println!("Absolute guard: {}", e);
    }

    let result = LeastSquares::new()
        .degeneracy_guard(Relative(1e-9))
        .build()?
        .fit(&x, &y)?;
    println!(
        "Relative guard: a = {:.6}, b = {:.6}",
        result.intercept, result.slope
    );
    // Relative guard: a = 1.000000, b = 2.000000
    println!();
    Ok(())
}
