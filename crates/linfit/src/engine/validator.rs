//! Input and configuration validation.
//!
//! ## Purpose
//!
//! This module checks fit inputs and builder configuration before any
//! arithmetic runs: slice lengths, the minimum point count, optional
//! finiteness, and parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Ordering**: Checks are ordered from cheap to expensive; the point-count
//!   guard always runs before any statistics are accumulated.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Non-goals
//!
//! * This module does not check the degeneracy of x; that needs the
//!   accumulated determinant and lives in the executor.
//! * This module does not correct or filter invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::FitError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for fit inputs and configuration.
pub struct Validator;

impl Validator {
    /// Minimum number of points for a fit with a residual variance.
    pub const MIN_POINTS: usize = 3;

    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate slice lengths and the minimum point count.
    pub fn validate_inputs<T: Float>(x: &[T], y: &[T]) -> Result<(), FitError> {
        let n = x.len();
        if n != y.len() {
            return Err(FitError::MismatchedInputs {
                x_len: n,
                y_len: y.len(),
            });
        }

        if n < Self::MIN_POINTS {
            return Err(FitError::InsufficientData {
                got: n,
                min: Self::MIN_POINTS,
            });
        }

        Ok(())
    }

    /// Validate that every value in both slices is finite.
    pub fn validate_finite<T: Float>(x: &[T], y: &[T]) -> Result<(), FitError> {
        for (i, (&xi, &yi)) in x.iter().zip(y.iter()).enumerate() {
            if !xi.is_finite() {
                return Err(FitError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    xi.to_f64().unwrap_or(f64::NAN)
                )));
            }
            if !yi.is_finite() {
                return Err(FitError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    yi.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate a degeneracy threshold or tolerance.
    pub fn validate_threshold<T: Float>(threshold: T) -> Result<(), FitError> {
        if !threshold.is_finite() || threshold <= T::zero() {
            return Err(FitError::InvalidThreshold(
                threshold.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that no options were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), FitError> {
        if let Some(param) = duplicate_param {
            return Err(FitError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
