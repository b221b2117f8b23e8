//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used throughout the crate:
//! - M-estimator weight functions for residual downweighting
//! - Robust scale estimation (MAD)
//! - Hat-matrix leverage for simple linear regression
//!
//! These are reusable mathematical building blocks with no algorithm-specific logic.
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

/// M-estimator weight functions for robustness iterations.
pub mod estimator;

/// Robust scale estimation (MAD).
pub mod scaling;

/// Hat-matrix leverage values.
pub mod leverage;
