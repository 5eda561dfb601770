//! Ordinary least-squares line solver.
//!
//! ## Purpose
//!
//! This module solves the 2x2 normal equations of a straight-line fit in
//! closed form and propagates the residual scatter into standard errors for
//! the intercept and slope.
//!
//! ## Design notes
//!
//! * **Closed form**: `a = (Sxx*Sy - Sx*Sxy) / D`, `b = (N*Sxy - Sx*Sy) / D`
//!   with `D = N*Sxx - Sx^2`. No iteration, no decomposition.
//! * **Guarded**: The determinant is checked against a [`DegeneracyGuard`]
//!   before any division.
//! * **Generics**: All routines are generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Residual scale**: `sigma = sqrt(RSS / (N - 2))`, two degrees of freedom
//!   being consumed by the fitted parameters.
//! * **Propagated errors**: `sigma_a = sqrt(sigma^2 * Sxx / D)`,
//!   `sigma_b = sqrt(sigma^2 * N / D)`.
//!
//! ## Invariants
//!
//! * Uncertainties are only computed for `N > 2`.
//! * The default guard is an absolute threshold of `1e-6` on `|D|`.
//!
//! ## Non-goals
//!
//! * This module does not weight observations or downweight outliers.
//! * This module does not rescale inputs to improve conditioning.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::math::sums::SufficientStats;

// ============================================================================
// Degeneracy Guard
// ============================================================================

/// Policy deciding when the normal-equation determinant is too small to solve.
///
/// The absolute form is not scale-invariant: x-values of very large or very
/// small magnitude can pass or fail it spuriously. `Relative` compares the
/// determinant against `N * sum(x^2)` instead.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DegeneracyGuard<T> {
    /// Degenerate iff `|D| < eps`.
    Absolute(T),

    /// Degenerate iff `|D| < tol * N * sum(x^2)`, `D == 0` or `D` is NaN.
    Relative(T),
}

impl<T: Float> Default for DegeneracyGuard<T> {
    fn default() -> Self {
        Self::Absolute(T::from(Self::DEFAULT_ABSOLUTE).unwrap_or_else(T::epsilon))
    }
}

impl<T: Float> DegeneracyGuard<T> {
    /// Default absolute threshold on `|N * sum(x^2) - sum(x)^2|`.
    pub const DEFAULT_ABSOLUTE: f64 = 1e-6;

    /// Configured tolerance, regardless of mode.
    pub fn tolerance(&self) -> T {
        match *self {
            Self::Absolute(eps) => eps,
            Self::Relative(tol) => tol,
        }
    }

    /// Effective threshold for the given data.
    pub fn threshold(&self, stats: &SufficientStats<T>) -> T {
        match *self {
            Self::Absolute(eps) => eps,
            Self::Relative(tol) => tol * stats.n_t() * stats.sum_xx.abs(),
        }
    }

    /// Check whether `denominator` is too small to solve against.
    ///
    /// A threshold equal to the denominator is accepted. In relative mode a
    /// zero or NaN denominator is always degenerate.
    #[inline]
    pub fn is_degenerate(&self, denominator: T, stats: &SufficientStats<T>) -> bool {
        match *self {
            Self::Absolute(eps) => denominator.abs() < eps,
            Self::Relative(_) => {
                let accepted = matches!(
                    denominator.abs().partial_cmp(&self.threshold(stats)),
                    Some(Ordering::Greater | Ordering::Equal)
                );
                denominator == T::zero() || !accepted
            }
        }
    }

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Absolute(_) => "absolute",
            Self::Relative(_) => "relative",
        }
    }
}

// ============================================================================
// Parameter Estimation
// ============================================================================

/// Intercept and slope of the least-squares line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineEstimate<T> {
    /// Intercept `a`.
    pub intercept: T,

    /// Slope `b`.
    pub slope: T,
}

impl<T: Float> LineEstimate<T> {
    /// Fitted value `a + b * x`.
    #[inline]
    pub fn at(&self, x: T) -> T {
        self.intercept + self.slope * x
    }
}

/// Solve the normal equations for a precomputed, non-degenerate determinant.
#[inline]
pub fn solve_normal_equations<T: Float>(stats: &SufficientStats<T>, denominator: T) -> LineEstimate<T> {
    let n = stats.n_t();
    let intercept = (stats.sum_xx * stats.sum_y - stats.sum_x * stats.sum_xy) / denominator;
    let slope = (n * stats.sum_xy - stats.sum_x * stats.sum_y) / denominator;

    LineEstimate { intercept, slope }
}

// ============================================================================
// Residuals and Uncertainty
// ============================================================================

/// Residual sum of squares `sum (y_i - (a + b * x_i))^2`.
pub fn residual_sum_of_squares<T: Float>(x: &[T], y: &[T], line: &LineEstimate<T>) -> T {
    x.iter().zip(y.iter()).fold(T::zero(), |acc, (&xi, &yi)| {
        let r = yi - line.at(xi);
        acc + r * r
    })
}

/// Residuals `y_i - (a + b * x_i)` in input order.
pub fn residuals<T: Float>(x: &[T], y: &[T], line: &LineEstimate<T>) -> Vec<T> {
    x.iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| yi - line.at(xi))
        .collect()
}

/// Residual scale and propagated parameter standard errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uncertainty<T> {
    /// Unbiased residual standard deviation.
    pub sigma: T,

    /// Standard error of the intercept.
    pub sigma_intercept: T,

    /// Standard error of the slope.
    pub sigma_slope: T,
}

/// Propagate the residual sum of squares into parameter standard errors.
///
/// Requires `stats.n > 2` and a non-degenerate `denominator`.
pub fn propagate_uncertainty<T: Float>(
    stats: &SufficientStats<T>,
    denominator: T,
    rss: T,
) -> Uncertainty<T> {
    debug_assert!(stats.n > 2, "propagate_uncertainty: need at least 3 points");

    let n = stats.n_t();
    let dof = n - T::from(2).unwrap_or_else(T::one);

    let sigma = (rss / dof).sqrt();
    let variance = sigma * sigma;
    let sigma_intercept = (variance * stats.sum_xx / denominator).sqrt();
    let sigma_slope = (variance * n / denominator).sqrt();

    Uncertainty {
        sigma,
        sigma_intercept,
        sigma_slope,
    }
}
