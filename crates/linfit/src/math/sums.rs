//! Sufficient statistics for a straight-line fit.
//!
//! ## Purpose
//!
//! This module accumulates the five aggregates that fully determine an
//! ordinary least-squares line: the count and the sums of `x`, `y`, `x^2`
//! and `x*y`. It also derives the normal-equation determinant
//! `N * sum(x^2) - sum(x)^2`.
//!
//! ## Invariants
//!
//! * The determinant is `N` times the sum of squared deviations of `x`, so it is
//!   zero iff all x-values are equal (up to rounding).
//! * Accumulation runs in a single pass in input order, so results are
//!   bit-reproducible for identical inputs.
//!
//! ## Non-goals
//!
//! * This module does not center or rescale the data before summing.

// External dependencies
use num_traits::Float;

// ============================================================================
// Sufficient Statistics
// ============================================================================

/// Aggregates of paired observations needed to solve the 2x2 normal equations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SufficientStats<T> {
    /// Number of observations.
    pub n: usize,

    /// Sum of x-values.
    pub sum_x: T,

    /// Sum of y-values.
    pub sum_y: T,

    /// Sum of squared x-values.
    pub sum_xx: T,

    /// Sum of cross products `x * y`.
    pub sum_xy: T,
}

impl<T: Float> SufficientStats<T> {
    /// Accumulate statistics over paired slices.
    ///
    /// Only the common prefix of `x` and `y` is visited; callers validate
    /// equal lengths beforehand.
    pub fn accumulate(x: &[T], y: &[T]) -> Self {
        let mut sum_x = T::zero();
        let mut sum_y = T::zero();
        let mut sum_xx = T::zero();
        let mut sum_xy = T::zero();
        let mut n = 0;

        for (&xi, &yi) in x.iter().zip(y.iter()) {
            sum_x = sum_x + xi;
            sum_y = sum_y + yi;
            sum_xx = sum_xx + xi * xi;
            sum_xy = sum_xy + xi * yi;
            n += 1;
        }

        Self {
            n,
            sum_x,
            sum_y,
            sum_xx,
            sum_xy,
        }
    }

    /// Observation count converted to `T`.
    #[inline]
    pub fn n_t(&self) -> T {
        T::from(self.n).unwrap_or_else(T::zero)
    }

    /// Normal-equation determinant `N * sum(x^2) - sum(x)^2`.
    #[inline]
    pub fn denominator(&self) -> T {
        self.n_t() * self.sum_xx - self.sum_x * self.sum_x
    }
}
