//! Input validation for fit configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for configuration parameters
//! and input data. It checks requirements such as input lengths, finite
//! values, and parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Parameter Bounds**: Enforces constraints like a positive tolerance.
//! * **Finite Checks**: Ensures all inputs are finite (no NaN/Inf).
//! * **Regression Requirements**: Ensures at least 2 points for a line fit.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not provide automatic correction of invalid inputs.
//! * This module does not perform the fitting itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::RobustFitError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for fit configuration and input data.
///
/// Provides static methods for validating parameters and input data. All
/// methods return `Result<(), RobustFitError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate input arrays for a line fit.
    pub fn validate_inputs<T: Float>(x: &[T], y: &[T]) -> Result<(), RobustFitError> {
        // Check 1: Non-empty arrays
        if x.is_empty() || y.is_empty() {
            return Err(RobustFitError::EmptyInput);
        }

        // Check 2: Matching lengths
        let n = x.len();
        if n != y.len() {
            return Err(RobustFitError::MismatchedInputs {
                x_len: n,
                y_len: y.len(),
            });
        }

        // Check 3: Sufficient points for a two-parameter fit
        if n < 2 {
            return Err(RobustFitError::TooFewPoints { got: n, min: 2 });
        }

        // Check 4: All values finite (combined loop for cache locality)
        for i in 0..n {
            if !x[i].is_finite() {
                return Err(RobustFitError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    x[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
            if !y[i].is_finite() {
                return Err(RobustFitError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    y[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the convergence tolerance.
    pub fn validate_tolerance<T: Float>(tol: T) -> Result<(), RobustFitError> {
        if !tol.is_finite() || tol <= T::zero() {
            return Err(RobustFitError::InvalidTolerance(
                tol.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the iteration cap.
    pub fn validate_max_iterations(max_iterations: usize) -> Result<(), RobustFitError> {
        if max_iterations == 0 {
            return Err(RobustFitError::InvalidMaxIterations(max_iterations));
        }
        Ok(())
    }

    /// Validate the outlier threshold.
    pub fn validate_threshold<T: Float>(threshold: T) -> Result<(), RobustFitError> {
        if !threshold.is_finite() || threshold <= T::zero() {
            return Err(RobustFitError::InvalidThreshold(
                threshold.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), RobustFitError> {
        if let Some(param) = duplicate_param {
            return Err(RobustFitError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
