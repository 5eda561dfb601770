//! Error types for least-squares fitting.
//!
//! ## Purpose
//!
//! This module defines every condition under which a fit or a fit
//! configuration is rejected. Both numerical guards of the solver
//! (too few points, zero spread in x) surface here as typed values so that
//! callers can skip a dataset or retry with corrected input.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (counts, denominator, threshold).
//! * **Recoverable**: Nothing in the crate aborts the process on bad input.
//! * **No-std**: Uses `alloc` for dynamic messages when `std` is disabled.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Solver guards**: `InsufficientData`, `DegenerateInput`.
//! 2. **Input validation**: mismatched lengths, non-finite values.
//! 3. **Configuration validation**: guard threshold, interval level, duplicate options.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide fallback values for failed fits.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for least-squares fitting.
#[derive(Debug, Clone, PartialEq)]
pub enum FitError {
    /// Fewer points than needed to estimate a residual variance.
    InsufficientData {
        /// Number of points provided.
        got: usize,
        /// Minimum required points.
        min: usize,
    },

    /// The x-values carry (numerically) no spread, so the normal equations are singular.
    DegenerateInput {
        /// Computed `N * sum(x^2) - sum(x)^2`.
        denominator: f64,
        /// Threshold the denominator fell below.
        threshold: f64,
    },

    /// `x` and `y` must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in `x`.
        x_len: usize,
        /// Number of elements in `y`.
        y_len: usize,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Degeneracy threshold must be positive and finite.
    InvalidThreshold(f64),

    /// Interval coverage level must be strictly between 0 and 1.
    InvalidIntervals(f64),

    /// Option was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the option that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for FitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InsufficientData { got, min } => {
                write!(f, "Insufficient data: got {got} points, need at least {min}")
            }
            Self::DegenerateInput {
                denominator,
                threshold,
            } => {
                write!(
                    f,
                    "Degenerate input: denominator {denominator:e} is below {threshold:e} (x-values have no spread)"
                )
            }
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} points, y has {y_len}")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidThreshold(t) => {
                write!(f, "Invalid threshold: {t} (must be > 0 and finite)")
            }
            Self::InvalidIntervals(level) => {
                write!(f, "Invalid interval level: {level} (must be > 0 and < 1)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for FitError {}
