//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer calculates high-level statistics based on the fit results:
//! - Outlier classification from residuals or converged weights
//! - Diagnostic metrics for fit quality
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

/// Outlier classification.
pub mod outliers;

/// Diagnostic metrics for fit quality assessment.
pub mod diagnostics;
