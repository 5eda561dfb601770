//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a fit: it validates inputs, drives the solver and
//! evaluation layers, and assembles the result.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fit execution engine.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for fits.
pub mod output;
