#![cfg(feature = "dev")]
//! Tests for goodness-of-fit diagnostics.
//!
//! ## Test Organization
//!
//! 1. **Metrics** - RSS, RMSE, MAE, residual moments
//! 2. **R-Squared** - Regular and constant-y cases
//! 3. **Display** - Formatted output

use approx::{assert_abs_diff_eq, assert_relative_eq};

use linfit::internals::algorithms::ols::LineEstimate;
use linfit::internals::evaluation::diagnostics::Diagnostics;

// ============================================================================
// Metrics Tests
// ============================================================================

/// Test diagnostics on a hand-checked fit.
///
/// Residuals are [-0.3, 0.9, -0.9, 0.3].
#[test]
fn test_diagnostics_compute() {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [1.0, 3.0, 2.0, 4.0];
    let line = LineEstimate {
        intercept: 1.3,
        slope: 0.8,
    };

    let diag = Diagnostics::compute(&x, &y, &line);

    assert_relative_eq!(diag.rss, 1.8, epsilon = 1e-12);
    assert_relative_eq!(diag.rmse, 0.45_f64.sqrt(), epsilon = 1e-12);
    assert_relative_eq!(diag.mae, 0.6, epsilon = 1e-12);
    assert_relative_eq!(diag.r_squared, 0.64, epsilon = 1e-12);
    assert_abs_diff_eq!(diag.residual_sum, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(diag.residual_moment, 0.0, epsilon = 1e-12);
}

/// Test that a non-optimal line has non-zero residual moments.
#[test]
fn test_diagnostics_off_optimum() {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [1.0, 3.0, 2.0, 4.0];
    let line = LineEstimate {
        intercept: 0.0,
        slope: 1.0,
    };

    let diag = Diagnostics::compute(&x, &y, &line);

    // r = [1, 2, 0, 1]
    assert_relative_eq!(diag.residual_sum, 4.0, epsilon = 1e-12);
    assert_relative_eq!(diag.residual_moment, 5.0, epsilon = 1e-12);
    assert!(diag.rss > 1.8);
}

/// Test empty input yields zeros.
#[test]
fn test_diagnostics_empty() {
    let empty: [f64; 0] = [];
    let line = LineEstimate {
        intercept: 0.0,
        slope: 0.0,
    };

    let diag = Diagnostics::compute(&empty, &empty, &line);

    assert_eq!(diag.rss, 0.0);
    assert_eq!(diag.r_squared, 0.0);
}

// ============================================================================
// R-Squared Tests
// ============================================================================

/// Test R² with constant y.
///
/// Verifies a perfect fit gives 1 and an imperfect one gives 0.
#[test]
fn test_r_squared_constant_y() {
    let y = [2.0, 2.0, 2.0];

    assert_eq!(Diagnostics::calculate_r_squared(&y, 0.0), 1.0);
    assert_eq!(Diagnostics::calculate_r_squared(&y, 0.5), 0.0);
}

/// Test R² for a perfect fit on varying y.
#[test]
fn test_r_squared_perfect() {
    let y = [1.0, 2.0, 3.0, 4.0];

    assert_eq!(Diagnostics::calculate_r_squared(&y, 0.0), 1.0);
    assert_relative_eq!(Diagnostics::calculate_r_squared(&y, 2.5), 0.5, epsilon = 1e-12);
}

// ============================================================================
// Display Tests
// ============================================================================

/// Test diagnostics display.
#[test]
fn test_diagnostics_display() {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [1.0, 3.0, 2.0, 4.0];
    let line = LineEstimate {
        intercept: 1.3,
        slope: 0.8,
    };

    let output = format!("{}", Diagnostics::compute(&x, &y, &line));

    assert!(output.starts_with("Fit Diagnostics:"));
    assert!(output.contains("RSS:          1.800000"));
    assert!(output.contains("MAE:          0.600000"));
    assert!(output.contains("R²:           0.640000"));
}
