//! Execution engine for least-squares fitting.
//!
//! ## Purpose
//!
//! This module runs one fit end to end: validate, accumulate sufficient
//! statistics, guard the determinant, solve, propagate uncertainty, and
//! assemble the optional outputs.
//!
//! ## Design notes
//!
//! * **Single path**: Both the free `fit` function and configured processors
//!   run through [`FitExecutor::run`].
//! * **Observability**: Each run opens a `linfit.fit` tracing span and records
//!   the fitted parameters on it. Guard failures are reported as debug events
//!   and returned to the caller.
//! * **Pure**: No state survives a run; identical inputs give bit-identical output.
//!
//! ## Key concepts
//!
//! * **Guard order**: point count first (before any sums), then finiteness
//!   when configured, then the degeneracy guard on the determinant.

// External dependencies
use num_traits::Float;
use tracing::field::Empty;

// Internal dependencies
use crate::algorithms::ols::{
    propagate_uncertainty, residual_sum_of_squares, residuals, solve_normal_equations,
    DegeneracyGuard,
};
use crate::engine::output::FitResult;
use crate::engine::validator::Validator;
use crate::evaluation::diagnostics::Diagnostics;
use crate::math::sums::SufficientStats;
use crate::primitives::errors::FitError;

// ============================================================================
// Configuration
// ============================================================================

/// Resolved configuration for a single fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitConfig<T> {
    /// Determinant guard policy.
    pub guard: DegeneracyGuard<T>,

    /// Reject NaN and infinite inputs.
    pub require_finite: bool,

    /// Populate `FitResult::residuals`.
    pub return_residuals: bool,

    /// Populate `FitResult::diagnostics`.
    pub return_diagnostics: bool,
}

impl<T: Float> Default for FitConfig<T> {
    fn default() -> Self {
        Self {
            guard: DegeneracyGuard::default(),
            require_finite: false,
            return_residuals: false,
            return_diagnostics: false,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Runs least-squares fits.
pub struct FitExecutor;

impl FitExecutor {
    /// Fit a line to `(x, y)` under `config`.
    pub fn run<T: Float>(x: &[T], y: &[T], config: &FitConfig<T>) -> Result<FitResult<T>, FitError> {
        let span = tracing::debug_span!(
            "linfit.fit",
            n = x.len(),
            guard = config.guard.name(),
            intercept = Empty,
            slope = Empty,
            sigma = Empty,
        );
        let _entered = span.enter();

        Validator::validate_inputs(x, y).map_err(Self::rejected)?;
        if config.require_finite {
            Validator::validate_finite(x, y).map_err(Self::rejected)?;
        }

        let stats = SufficientStats::accumulate(x, y);
        let denominator = stats.denominator();

        if config.guard.is_degenerate(denominator, &stats) {
            return Err(Self::rejected(FitError::DegenerateInput {
                denominator: to_f64(denominator),
                threshold: to_f64(config.guard.threshold(&stats)),
            }));
        }

        let line = solve_normal_equations(&stats, denominator);
        let rss = residual_sum_of_squares(x, y, &line);
        let uncertainty = propagate_uncertainty(&stats, denominator, rss);

        span.record("intercept", to_f64(line.intercept));
        span.record("slope", to_f64(line.slope));
        span.record("sigma", to_f64(uncertainty.sigma));

        tracing::debug!(
            n = stats.n,
            denominator = to_f64(denominator),
            rss = to_f64(rss),
            sigma_intercept = to_f64(uncertainty.sigma_intercept),
            sigma_slope = to_f64(uncertainty.sigma_slope),
            "fitted line"
        );

        let residuals = if config.return_residuals {
            Some(residuals(x, y, &line))
        } else {
            None
        };

        let diagnostics = if config.return_diagnostics {
            Some(Diagnostics::compute(x, y, &line))
        } else {
            None
        };

        Ok(FitResult {
            intercept: line.intercept,
            slope: line.slope,
            sigma: uncertainty.sigma,
            sigma_intercept: uncertainty.sigma_intercept,
            sigma_slope: uncertainty.sigma_slope,
            n_observations: stats.n,
            residuals,
            diagnostics,
        })
    }

    fn rejected(err: FitError) -> FitError {
        tracing::debug!(error = %err, "fit rejected");
        err
    }
}

#[inline]
fn to_f64<T: Float>(v: T) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}
