//! Confidence intervals for the fitted intercept and slope.
//!
//! ## Purpose
//!
//! This module turns the propagated standard errors of a fit into symmetric
//! intervals `estimate ± z * sigma` at a requested coverage level.
//!
//! ## Design notes
//!
//! * **Approximation**: Critical values come from the standard normal
//!   (Acklam's inverse CDF), not Student's t with `N - 2` degrees of freedom.
//!   For small `N` the intervals are therefore somewhat narrow.
//! * **Fast paths**: 0.90, 0.95 and 0.99 use tabulated z-scores.
//!
//! ## Invariants
//!
//! * Coverage levels must satisfy 0 < level < 1.
//! * `lower <= estimate <= upper` for both parameters.

// External dependencies
use num_traits::Float;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::primitives::errors::FitError;

// ============================================================================
// Interval Output
// ============================================================================

/// Symmetric confidence intervals for the line parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParameterIntervals<T> {
    /// Coverage level the intervals were computed at.
    pub level: T,

    /// Critical value used (`z` such that `P(|Z| <= z) = level`).
    pub critical_value: T,

    /// `(lower, upper)` bounds for the intercept.
    pub intercept: (T, T),

    /// `(lower, upper)` bounds for the slope.
    pub slope: (T, T),
}

impl<T: Float> ParameterIntervals<T> {
    /// Build intervals from estimates and their standard errors.
    pub fn compute(
        level: T,
        intercept: T,
        sigma_intercept: T,
        slope: T,
        sigma_slope: T,
    ) -> Result<Self, FitError> {
        if !level.is_finite() || level <= T::zero() || level >= T::one() {
            return Err(FitError::InvalidIntervals(level.to_f64().unwrap_or(f64::NAN)));
        }

        let z = approximate_z_score(level);
        let half_a = z * sigma_intercept;
        let half_b = z * sigma_slope;

        Ok(Self {
            level,
            critical_value: z,
            intercept: (intercept - half_a, intercept + half_a),
            slope: (slope - half_b, slope + half_b),
        })
    }

    /// Check whether `value` lies inside the intercept interval.
    pub fn intercept_contains(&self, value: T) -> bool {
        value >= self.intercept.0 && value <= self.intercept.1
    }

    /// Check whether `value` lies inside the slope interval.
    pub fn slope_contains(&self, value: T) -> bool {
        value >= self.slope.0 && value <= self.slope.1
    }
}

// ============================================================================
// Z-Score Approximation
// ============================================================================

/// Approximate the critical value for a two-sided coverage level.
/// z = Phi^-1((1 + p) / 2) where Phi^-1 is the inverse standard normal CDF.
pub fn approximate_z_score<T: Float>(confidence_level: T) -> T {
    let cl_f = confidence_level.to_f64().unwrap_or(0.95);

    let z = if (cl_f - 0.99).abs() < 1e-6 {
        2.576
    } else if (cl_f - 0.95).abs() < 1e-6 {
        1.960
    } else if (cl_f - 0.90).abs() < 1e-6 {
        1.645
    } else {
        acklam_inverse_cdf((1.0 + cl_f) / 2.0)
    };

    T::from(z).unwrap_or_else(T::one)
}

/// Rational approximation of the inverse standard normal CDF.
fn acklam_inverse_cdf(p: f64) -> f64 {
    if p <= 0.0 || p >= 1.0 {
        return 0.0;
    }

    // Central region
    const A: [f64; 6] = [
        -3.969_683_028_665_376e1,
        2.209_460_984_245_205e2,
        -2.759_285_104_469_687e2,
        1.383_577_518_672_69e2,
        -3.066_479_806_614_716e1,
        2.506_628_277_459_239e0,
    ];
    const B: [f64; 5] = [
        -5.447_609_879_822_406e1,
        1.615_858_368_580_409e2,
        -1.556_989_798_598_866e2,
        6.680_131_188_771_972e1,
        -1.328_068_155_288_572e1,
    ];

    // Tails
    const C: [f64; 6] = [
        -7.784_894_002_430_293e-3,
        -3.223_964_580_411_365e-1,
        -2.400_758_277_161_838e0,
        -2.549_732_539_343_734e0,
        4.374_664_141_464_968e0,
        2.938_163_982_698_783e0,
    ];
    const D: [f64; 4] = [
        7.784_695_709_041_462e-3,
        3.224_671_290_700_398e-1,
        2.445_134_137_142_996e0,
        3.754_408_661_907_416e0,
    ];

    const P_LOW: f64 = 0.02425;
    const P_HIGH: f64 = 1.0 - P_LOW;

    let tail = |q: f64| {
        let num = ((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5];
        let den = (((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0;
        num / den
    };

    if p < P_LOW {
        tail(Float::sqrt(-2.0 * Float::ln(p)))
    } else if p > P_HIGH {
        -tail(Float::sqrt(-2.0 * Float::ln(1.0 - p)))
    } else {
        let q = p - 0.5;
        let r = q * q;
        let num = (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q;
        let den = ((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0;
        num / den
    }
}
