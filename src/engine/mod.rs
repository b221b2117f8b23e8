//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the robust fit by coordinating the lower layers:
//! weighted least squares, scale estimation, the robustness weight update,
//! and convergence detection.
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

/// Unified execution engine for the IRLS fit.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for fit operations.
pub mod output;
