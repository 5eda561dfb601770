//! High-level API for least-squares line fitting.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: the [`fit`] function
//! for the common case and a fluent builder for configured fits.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder whose defaults reproduce [`fit`] exactly.
//! * **Validated**: Configuration is validated once, when `.build()` is called.
//! * **Reusable**: A built [`LeastSquares`] is immutable and fits any number of datasets.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`LeastSquaresBuilder`] via `LeastSquares::new()`.
//! 2. Chain configuration methods (`.degeneracy_guard()`, `.return_diagnostics()`, etc.).
//! 3. Call `.build()` to get a [`LeastSquares`] processor, then `.fit(&x, &y)`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{FitConfig, FitExecutor};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::ols::{DegeneracyGuard, LineEstimate};
pub use crate::engine::output::FitResult;
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::evaluation::intervals::ParameterIntervals;
pub use crate::primitives::errors::FitError;

// ============================================================================
// Free Function
// ============================================================================

/// Fit `y = a + b * x` by ordinary least squares.
///
/// Requires at least 3 points and x-values with non-negligible spread
/// (`|N * sum(x^2) - sum(x)^2| >= 1e-6`).
///
/// # Errors
///
/// * [`FitError::MismatchedInputs`] if `x` and `y` differ in length.
/// * [`FitError::InsufficientData`] if fewer than 3 points are given.
/// * [`FitError::DegenerateInput`] if the x-values are (numerically) all equal.
///
/// # Example
///
/// ```rust
/// let x: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let y = [2.1, 3.9, 6.2, 7.8, 10.1];
///
/// let result = linfit::fit(&x, &y)?;
/// assert!((result.slope - 1.99).abs() < 1e-12);
/// # Ok::<(), linfit::prelude::FitError>(())
/// ```
pub fn fit<T: Float>(x: &[T], y: &[T]) -> Result<FitResult<T>, FitError> {
    FitExecutor::run(x, y, &FitConfig::default())
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring least-squares fits.
#[derive(Debug, Clone)]
pub struct LeastSquaresBuilder<T> {
    /// Determinant guard policy (default: absolute 1e-6).
    pub degeneracy_guard: Option<DegeneracyGuard<T>>,

    /// Reject NaN and infinite inputs (default: false).
    pub require_finite: Option<bool>,

    /// Return residuals in the result (default: false).
    pub return_residuals: Option<bool>,

    /// Return diagnostics in the result (default: false).
    pub return_diagnostics: Option<bool>,

    /// Tracks if any option was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for LeastSquaresBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> LeastSquaresBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            degeneracy_guard: None,
            require_finite: None,
            return_residuals: None,
            return_diagnostics: None,
            duplicate_param: None,
        }
    }

    /// Set the determinant guard policy.
    pub fn degeneracy_guard(mut self, guard: DegeneracyGuard<T>) -> Self {
        if self.degeneracy_guard.is_some() {
            self.duplicate_param = Some("degeneracy_guard");
        }
        self.degeneracy_guard = Some(guard);
        self
    }

    /// Reject inputs containing NaN or infinite values.
    pub fn require_finite(mut self) -> Self {
        if self.require_finite.is_some() {
            self.duplicate_param = Some("require_finite");
        }
        self.require_finite = Some(true);
        self
    }

    /// Include residuals in output.
    pub fn return_residuals(mut self) -> Self {
        self.return_residuals = Some(true);
        self
    }

    /// Include fit diagnostics (RSS, RMSE, R², etc.) in output.
    pub fn return_diagnostics(mut self) -> Self {
        self.return_diagnostics = Some(true);
        self
    }

    /// Validate the configuration and build a reusable processor.
    pub fn build(self) -> Result<LeastSquares<T>, FitError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let guard = self.degeneracy_guard.unwrap_or_default();
        Validator::validate_threshold(guard.tolerance())?;

        Ok(LeastSquares {
            config: FitConfig {
                guard,
                require_finite: self.require_finite.unwrap_or(false),
                return_residuals: self.return_residuals.unwrap_or(false),
                return_diagnostics: self.return_diagnostics.unwrap_or(false),
            },
        })
    }
}

// ============================================================================
// Processor
// ============================================================================

/// Configured least-squares processor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeastSquares<T> {
    config: FitConfig<T>,
}

impl<T: Float> LeastSquares<T> {
    /// Start configuring a processor.
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> LeastSquaresBuilder<T> {
        LeastSquaresBuilder::new()
    }

    /// Fit `y = a + b * x` to the provided data.
    pub fn fit(&self, x: &[T], y: &[T]) -> Result<FitResult<T>, FitError> {
        FitExecutor::run(x, y, &self.config)
    }

    /// Active guard policy.
    pub fn degeneracy_guard(&self) -> DegeneracyGuard<T> {
        self.config.guard
    }
}
