//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the least-squares line solver: the closed-form
//! solution of the normal equations and residual-based uncertainty
//! propagation.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Closed-form OLS solver and degeneracy guard.
pub mod ols;
