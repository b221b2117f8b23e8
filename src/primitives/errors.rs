//! Error types for robust fitting operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur during robust line
//! fitting, including input validation, parameter constraints, and
//! degenerate data.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected lengths).
//! * **Deferred**: Errors are often caught and stored during builder configuration.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty arrays, mismatched lengths, non-finite values.
//! 2. **Parameter validation**: Invalid tolerance, iteration cap, or threshold.
//! 3. **Degenerate data**: Constant predictor, collapsed weighted system, zero residual scale.
//! 4. **Name resolution**: Unknown weight-function or detection-method names.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//! * Numeric values in errors use the same types as the public API.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for robust fitting operations.
#[derive(Debug, Clone, PartialEq)]
pub enum RobustFitError {
    /// Input arrays are empty.
    EmptyInput,

    /// `x` and `y` arrays must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the `x` array.
        x_len: usize,
        /// Number of elements in the `y` array.
        y_len: usize,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Number of points is below the minimum requirement for the requested operation.
    TooFewPoints {
        /// Number of points provided.
        got: usize,
        /// Minimum required points.
        min: usize,
    },

    /// Convergence tolerance must be positive and finite.
    InvalidTolerance(f64),

    /// The iteration cap must be at least 1.
    InvalidMaxIterations(usize),

    /// Outlier threshold must be positive and finite.
    InvalidThreshold(f64),

    /// Weight-function or detection-method name did not match any known method.
    UnknownMethod {
        /// The kind of method being resolved ("weight function" or "detection method").
        kind: &'static str,
        /// The name that failed to resolve.
        name: String,
    },

    /// All `x` values are identical; the slope of the line is undefined.
    ConstantPredictor,

    /// Robustness weights collapsed the weighted system to a singular one.
    DegenerateWeightedSystem,

    /// Residual scale (MAD) is zero while residuals remain; standardization is undefined.
    ZeroResidualScale,

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for RobustFitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} points, y has {y_len}")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {got}, need at least {min}")
            }
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {tol} (must be > 0 and finite)")
            }
            Self::InvalidMaxIterations(iter) => {
                write!(f, "Invalid max_iterations: {iter} (must be at least 1)")
            }
            Self::InvalidThreshold(t) => {
                write!(f, "Invalid outlier threshold: {t} (must be > 0 and finite)")
            }
            Self::UnknownMethod { kind, name } => {
                write!(f, "Unknown {kind}: '{name}'")
            }
            Self::ConstantPredictor => {
                write!(f, "All x values are identical; slope is undefined")
            }
            Self::DegenerateWeightedSystem => {
                write!(
                    f,
                    "Robustness weights produced a singular weighted system; fit cannot continue"
                )
            }
            Self::ZeroResidualScale => {
                write!(
                    f,
                    "Residual scale (MAD) is zero while residuals remain; cannot standardize"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for RobustFitError {}
