//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer derives statistics from a completed fit:
//! - Diagnostic metrics for fit quality
//! - Confidence intervals for the line parameters
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Diagnostic metrics for fit quality assessment.
pub mod diagnostics;

/// Parameter confidence intervals.
pub mod intervals;
