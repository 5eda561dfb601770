//! Diagnostic metrics for straight-line fit quality.
//!
//! ## Purpose
//!
//! This module evaluates a fitted line against the data it was fitted on:
//! error magnitudes, explained variance, and the two normal-equation
//! optimality conditions.
//!
//! ## Design notes
//!
//! * **Residual-based**: Every metric is a fold over `r_i = y_i - (a + b * x_i)`.
//! * **Optimality checks**: `sum r_i` and `sum x_i * r_i` vanish at the exact
//!   least-squares solution, so their size measures rounding error.
//! * **Generics**: All computations are generic over `Float` types.
//!
//! ## Invariants
//!
//! * RSS, RMSE and MAE are non-negative.
//! * R^2 <= 1 (R^2 = 1 is a perfect fit).
//!
//! ## Non-goals
//!
//! * This module does not provide p-values or formal hypothesis tests.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::algorithms::ols::LineEstimate;

// ============================================================================
// Diagnostics Structure
// ============================================================================

/// Goodness-of-fit metrics for a least-squares line.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Diagnostics<T> {
    /// Residual sum of squares (RSS).
    pub rss: T,

    /// Root Mean Squared Error, `sqrt(RSS / N)`.
    pub rmse: T,

    /// Mean Absolute Error.
    pub mae: T,

    /// Coefficient of determination (R^2).
    pub r_squared: T,

    /// Sum of residuals; zero at the exact optimum.
    pub residual_sum: T,

    /// Sum of `x_i * r_i`; zero at the exact optimum.
    pub residual_moment: T,
}

impl<T: Float> Diagnostics<T> {
    /// Compute diagnostics for `line` over the observations it was fitted on.
    pub fn compute(x: &[T], y: &[T], line: &LineEstimate<T>) -> Self {
        let n = x.len().min(y.len());
        if n == 0 {
            return Self {
                rss: T::zero(),
                rmse: T::zero(),
                mae: T::zero(),
                r_squared: T::zero(),
                residual_sum: T::zero(),
                residual_moment: T::zero(),
            };
        }
        let n_t = T::from(n).unwrap_or_else(T::one);

        let mut rss = T::zero();
        let mut abs_sum = T::zero();
        let mut residual_sum = T::zero();
        let mut residual_moment = T::zero();

        for (&xi, &yi) in x.iter().zip(y.iter()) {
            let r = yi - line.at(xi);
            rss = rss + r * r;
            abs_sum = abs_sum + r.abs();
            residual_sum = residual_sum + r;
            residual_moment = residual_moment + xi * r;
        }

        Self {
            rss,
            rmse: (rss / n_t).sqrt(),
            mae: abs_sum / n_t,
            r_squared: Self::calculate_r_squared(&y[..n], rss),
            residual_sum,
            residual_moment,
        }
    }

    /// Compute the coefficient of determination.
    /// R^2 = 1 - RSS / SS_tot.
    pub fn calculate_r_squared(y: &[T], rss: T) -> T {
        let n = y.len();
        if n == 0 {
            return T::zero();
        }
        let n_t = T::from(n).unwrap_or_else(T::one);

        let mean = y.iter().fold(T::zero(), |acc, &v| acc + v) / n_t;
        let ss_tot = y.iter().fold(T::zero(), |acc, &v| {
            let d = v - mean;
            acc + d * d
        });

        if ss_tot == T::zero() {
            // All y values are identical
            if rss == T::zero() {
                T::one()
            } else {
                T::zero()
            }
        } else {
            T::one() - rss / ss_tot
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for Diagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Fit Diagnostics:")?;
        writeln!(f, "  RSS:          {:.6}", self.rss)?;
        writeln!(f, "  RMSE:         {:.6}", self.rmse)?;
        writeln!(f, "  MAE:          {:.6}", self.mae)?;
        writeln!(f, "  R²:           {:.6}", self.r_squared)?;
        writeln!(f, "  Σr:           {:.6}", self.residual_sum)?;
        writeln!(f, "  Σx·r:         {:.6}", self.residual_moment)?;

        Ok(())
    }
}
