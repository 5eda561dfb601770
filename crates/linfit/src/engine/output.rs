//! Output types for least-squares fitting.
//!
//! ## Purpose
//!
//! This module defines `FitResult`, which carries the fitted line, its
//! residual scale and parameter standard errors, plus optional residuals
//! and diagnostics.
//!
//! ## Design notes
//!
//! * **Owned**: The result owns all its data; nothing borrows from the inputs.
//! * **Optional Outputs**: Residuals and diagnostics use `Option` and are only
//!   populated when requested.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `sigma`, `sigma_intercept` and `sigma_slope` are non-negative.
//! * `n_observations > 2`.
//! * Populated residuals have length `n_observations`, in input order.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::algorithms::ols::LineEstimate;
use crate::evaluation::diagnostics::Diagnostics;
use crate::evaluation::intervals::ParameterIntervals;
use crate::primitives::errors::FitError;

// ============================================================================
// Result Structure
// ============================================================================

/// Least-squares line with analytic uncertainties.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FitResult<T> {
    /// Intercept `a` (predicted y at x = 0).
    pub intercept: T,

    /// Slope `b` (change of predicted y per unit x).
    pub slope: T,

    /// Residual standard deviation, `sqrt(RSS / (N - 2))`.
    pub sigma: T,

    /// Standard error of the intercept.
    pub sigma_intercept: T,

    /// Standard error of the slope.
    pub sigma_slope: T,

    /// Number of observations the line was fitted on.
    pub n_observations: usize,

    /// Residuals `y_i - (a + b * x_i)` in input order.
    pub residuals: Option<Vec<T>>,

    /// Goodness-of-fit metrics.
    pub diagnostics: Option<Diagnostics<T>>,
}

impl<T: Float> FitResult<T> {
    /// Predicted value `a + b * x` on the fitted line.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.line().at(x)
    }

    /// Intercept and slope as a [`LineEstimate`].
    pub fn line(&self) -> LineEstimate<T> {
        LineEstimate {
            intercept: self.intercept,
            slope: self.slope,
        }
    }

    /// Residual degrees of freedom, `N - 2`.
    pub fn degrees_of_freedom(&self) -> usize {
        self.n_observations.saturating_sub(2)
    }

    /// The five fitted scalars `[a, b, sigma, sigma_a, sigma_b]`.
    pub fn to_array(&self) -> [T; 5] {
        [
            self.intercept,
            self.slope,
            self.sigma,
            self.sigma_intercept,
            self.sigma_slope,
        ]
    }

    /// Confidence intervals for intercept and slope at `level` (e.g. 0.95).
    pub fn parameter_intervals(&self, level: T) -> core::result::Result<ParameterIntervals<T>, FitError> {
        ParameterIntervals::compute(
            level,
            self.intercept,
            self.sigma_intercept,
            self.slope,
            self.sigma_slope,
        )
    }

    /// Check if residuals were returned.
    pub fn has_residuals(&self) -> bool {
        self.residuals.is_some()
    }

    /// Check if diagnostics were computed.
    pub fn has_diagnostics(&self) -> bool {
        self.diagnostics.is_some()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for FitResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points:        {}", self.n_observations)?;
        writeln!(f, "  Degrees of freedom: {}", self.degrees_of_freedom())?;
        writeln!(f)?;

        writeln!(f, "Parameters:")?;
        writeln!(
            f,
            "  Intercept (a): {:>12.6} ± {:.6}",
            self.intercept, self.sigma_intercept
        )?;
        writeln!(
            f,
            "  Slope (b):     {:>12.6} ± {:.6}",
            self.slope, self.sigma_slope
        )?;
        writeln!(f, "  Residual SD:   {:>12.6}", self.sigma)?;

        if let Some(diag) = &self.diagnostics {
            writeln!(f)?;
            write!(f, "{}", diag)?;
        }

        if let Some(residuals) = &self.residuals {
            writeln!(f)?;
            writeln!(f, "Residuals:")?;
            writeln!(f, "{:>8} {:>12}", "Index", "Residual")?;
            writeln!(f, "{:-<21}", "")?;

            // Show first 10 and last 10 rows if more than 20 points
            let n = residuals.len();
            let rows: Vec<usize> = if n <= 20 {
                (0..n).collect()
            } else {
                (0..10).chain(n - 10..n).collect()
            };

            let mut prev_idx = 0;
            for (i, &idx) in rows.iter().enumerate() {
                if i > 0 && idx != prev_idx + 1 {
                    writeln!(f, "{:>8}", "...")?;
                }
                prev_idx = idx;
                writeln!(f, "{:>8} {:>12.6}", idx, residuals[idx])?;
            }
        }

        Ok(())
    }
}
