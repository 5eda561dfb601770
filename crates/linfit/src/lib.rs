//! # linfit — Closed-form least-squares line fitting for Rust
//!
//! Fits `y = a + b·x` to paired observations by ordinary least squares and
//! reports analytic uncertainties on both parameters. The computation is a
//! single closed-form pass: accumulate sufficient statistics, solve the 2x2
//! normal equations, and propagate the residual scatter into standard errors.
//!
//! ## Quick Start
//!
//! ```rust
//! use linfit::prelude::*;
//!
//! let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = vec![2.1, 3.9, 6.2, 7.8, 10.1];
//!
//! let result = fit(&x, &y)?;
//!
//! println!("{}", result);
//! # Result::<(), FitError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Data points:        5
//!   Degrees of freedom: 3
//!
//! Parameters:
//!   Intercept (a):     0.050000 ± 0.198074
//!   Slope (b):         1.990000 ± 0.059722
//!   Residual SD:       0.188856
//! ```
//!
//! ### Configured Fits
//!
//! ```rust
//! use linfit::prelude::*;
//!
//! let x = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
//! let y = vec![2.1, 3.8, 6.2, 7.9, 10.3, 11.8, 14.1, 15.7];
//!
//! let model = LeastSquares::new()
//!     .degeneracy_guard(Relative(1e-12))  // Scale-aware singularity check
//!     .require_finite()                   // Reject NaN / infinite inputs
//!     .return_residuals()                 // Include residuals
//!     .return_diagnostics()               // RSS, RMSE, MAE, R²
//!     .build()?;
//!
//! let result = model.fit(&x, &y)?;
//! let intervals = result.parameter_intervals(0.95)?;
//!
//! assert!(intervals.slope_contains(result.slope));
//! # Result::<(), FitError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Fitting never panics or aborts on bad input. The two numerical guards are
//! distinguishable errors:
//!
//! ```rust
//! use linfit::prelude::*;
//!
//! match fit(&[5.0, 5.0, 5.0, 5.0], &[1.0, 2.0, 3.0, 4.0]) {
//!     Err(FitError::DegenerateInput { .. }) => { /* all x equal: skip dataset */ }
//!     Err(FitError::InsufficientData { .. }) => { /* fewer than 3 points */ }
//!     Err(e) => eprintln!("Fitting failed: {}", e),
//!     Ok(result) => println!("slope = {}", result.slope),
//! }
//! ```
//!
//! ## Known Limitation
//!
//! The default degeneracy guard is an absolute threshold (`1e-6`) on
//! `N·Σx² − (Σx)²`, which is not scale-invariant. Use
//! [`DegeneracyGuard::Relative`](crate::prelude::DegeneracyGuard) for data with
//! very small or very large x magnitudes.
//!
//! ## Minimal Usage (no_std)
//!
//! ```toml
//! [dependencies]
//! linfit = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - shared error type.
mod primitives;

// Layer 2: Math - sufficient statistics.
mod math;

// Layer 3: Algorithms - closed-form OLS solver.
mod algorithms;

// Layer 4: Evaluation - diagnostics and parameter intervals.
mod evaluation;

// Layer 5: Engine - validation, execution, and output.
mod engine;

// High-level API.
mod api;

pub use api::fit;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        fit, DegeneracyGuard,
        DegeneracyGuard::Absolute,
        DegeneracyGuard::Relative,
        Diagnostics, FitError, FitResult, LeastSquares, LeastSquaresBuilder, LineEstimate,
        ParameterIntervals,
    };
}

// Internal modules for development and testing.
//
// Only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
