//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure numerical building blocks with no
//! fitting-specific policy: accumulation of sufficient statistics.
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
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Sufficient statistics (sums and the normal-equation determinant).
pub mod sums;
