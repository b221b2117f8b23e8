#![cfg(feature = "dev")]
//! Tests for the high-level robust fitting API.
//!
//! These tests verify the builder pattern, configuration validation, and
//! complete fitting workflows:
//! - Builder construction and defaults
//! - Parameter validation and duplicate detection
//! - Name-based configuration
//! - Fit errors on malformed input
//! - Result helpers and display
//!
//! ## Test Organization
//!
//! 1. **Builder Construction** - Defaults, chaining, reuse
//! 2. **Build Validation** - Parameter and duplicate errors
//! 3. **Name Resolution** - String-based configuration
//! 4. **Fit Validation** - Input errors surfaced by `fit`
//! 5. **Workflows** - Residuals, outliers, diagnostics, f32
//! 6. **Result Helpers** - Prediction and display

use approx::assert_relative_eq;
use std::fmt::Write;

use robustfit::internals::api::{
    DetectionMethod, RobustFitBuilder as RobustFit, RobustFitError, WeightFunction,
};

// ============================================================================
// Builder Construction Tests
// ============================================================================

/// Test that the default builder builds and fits.
#[test]
fn test_default_builder() {
    let x = vec![1.0f64, 2.0, 3.0, 4.0];
    let y = vec![2.0f64, 4.0, 6.0, 8.0];

    let model = RobustFit::new().build().unwrap();
    let result = model.fit(&x, &y).unwrap();

    assert_relative_eq!(result.slope, 2.0, epsilon = 1e-9);
    assert_relative_eq!(result.intercept, 0.0, epsilon = 1e-9);
    assert!(result.converged);
}

/// Test that a built model is reusable across datasets.
#[test]
fn test_model_is_reusable() {
    let model = RobustFit::new()
        .weight_function(WeightFunction::Huber)
        .build()
        .unwrap();

    let a = model.fit(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]).unwrap();
    let b = model.fit(&[1.0, 2.0, 3.0], &[3.0, 5.0, 7.0]).unwrap();

    assert_relative_eq!(a.slope, 1.0, epsilon = 1e-9);
    assert_relative_eq!(b.slope, 2.0, epsilon = 1e-9);
}

/// Test full option chaining.
#[test]
fn test_full_chain_builds() {
    let built = RobustFit::<f64>::new()
        .weight_function(WeightFunction::Welsch)
        .tuning_constant(3.0)
        .tolerance(1e-10)
        .max_iterations(500)
        .detect_outliers(DetectionMethod::ByWeight)
        .outlier_threshold(2.5)
        .return_residuals()
        .return_diagnostics()
        .build();

    assert!(built.is_ok());
}

// ============================================================================
// Build Validation Tests
// ============================================================================

/// Test rejection of a non-positive tolerance.
#[test]
fn test_invalid_tolerance_rejected() {
    let built = RobustFit::<f64>::new().tolerance(-1.0).build();
    assert!(matches!(built, Err(RobustFitError::InvalidTolerance(_))));
}

/// Test rejection of a zero iteration cap.
#[test]
fn test_zero_max_iterations_rejected() {
    let built = RobustFit::<f64>::new().max_iterations(0).build();
    assert!(matches!(built, Err(RobustFitError::InvalidMaxIterations(0))));
}

/// Test rejection of a non-positive outlier threshold.
#[test]
fn test_invalid_threshold_rejected() {
    let built = RobustFit::<f64>::new().outlier_threshold(0.0).build();
    assert!(matches!(built, Err(RobustFitError::InvalidThreshold(_))));
}

/// Test duplicate parameter detection.
///
/// Setting the same parameter twice is reported at build time.
#[test]
fn test_duplicate_parameter_rejected() {
    let built = RobustFit::<f64>::new()
        .weight_function(WeightFunction::Huber)
        .weight_function(WeightFunction::Bisquare)
        .build();

    match built {
        Err(RobustFitError::DuplicateParameter { parameter }) => {
            assert_eq!(parameter, "weight_function");
        }
        other => panic!("expected DuplicateParameter, got {:?}", other.err()),
    }
}

// ============================================================================
// Name Resolution Tests
// ============================================================================

/// Test weight function selection by name.
#[test]
fn test_weight_function_by_name() {
    let x = vec![1.0f64, 2.0, 3.0];
    let y = vec![2.0f64, 4.0, 6.0];

    let model = RobustFit::new().weight_function_named("welsch").build().unwrap();
    let result = model.fit(&x, &y).unwrap();
    assert_relative_eq!(result.slope, 2.0, epsilon = 1e-9);
}

/// Test that an unknown weight function name fails at build.
#[test]
fn test_unknown_weight_function_name() {
    let built = RobustFit::<f64>::new().weight_function_named("tukey").build();
    match built {
        Err(RobustFitError::UnknownMethod { kind, name }) => {
            assert_eq!(kind, "weight function");
            assert_eq!(name, "tukey");
        }
        other => panic!("expected UnknownMethod, got {:?}", other.err()),
    }
}

/// Test detection policy selection by name.
#[test]
fn test_detection_by_name() {
    let x = vec![1.0f64, 2.0, 3.0, 4.0];
    let y = vec![2.0f64, 4.0, 6.0, 8.0];

    let model = RobustFit::new()
        .detect_outliers_named("standardized_residual")
        .build()
        .unwrap();
    let result = model.fit(&x, &y).unwrap();
    assert!(result.outliers.is_some());

    let built = RobustFit::<f64>::new().detect_outliers_named("mahalanobis").build();
    assert!(matches!(built, Err(RobustFitError::UnknownMethod { .. })));
}

// ============================================================================
// Fit Validation Tests
// ============================================================================

/// Test that empty input is rejected.
#[test]
fn test_fit_empty_input() {
    let model = RobustFit::<f64>::new().build().unwrap();
    assert!(matches!(
        model.fit(&[], &[]),
        Err(RobustFitError::EmptyInput)
    ));
}

/// Test that mismatched lengths are rejected.
#[test]
fn test_fit_mismatched_lengths() {
    let model = RobustFit::<f64>::new().build().unwrap();
    let result = model.fit(&[1.0, 2.0, 3.0], &[1.0, 2.0]);
    assert!(matches!(
        result,
        Err(RobustFitError::MismatchedInputs { x_len: 3, y_len: 2 })
    ));
}

/// Test that a single point is rejected.
#[test]
fn test_fit_single_point() {
    let model = RobustFit::<f64>::new().build().unwrap();
    assert!(matches!(
        model.fit(&[1.0], &[2.0]),
        Err(RobustFitError::TooFewPoints { got: 1, min: 2 })
    ));
}

/// Test that non-finite values are rejected.
#[test]
fn test_fit_non_finite_values() {
    let model = RobustFit::<f64>::new().build().unwrap();
    let result = model.fit(&[1.0, f64::NAN, 3.0], &[1.0, 2.0, 3.0]);
    assert!(matches!(
        result,
        Err(RobustFitError::InvalidNumericValue(_))
    ));
}

/// Test that a constant predictor is rejected.
#[test]
fn test_fit_constant_predictor() {
    let model = RobustFit::<f64>::new().build().unwrap();
    let result = model.fit(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]);
    assert!(matches!(result, Err(RobustFitError::ConstantPredictor)));
}

// ============================================================================
// Workflow Tests
// ============================================================================

/// Test the contaminated-line workflow end to end.
///
/// The robust fit recovers the clean line and reports the rejected
/// point through its weight.
#[test]
fn test_outlier_workflow() {
    let x = vec![1.0f64, 2.0, 3.0, 4.0, 5.0, 100.0];
    let y = vec![2.0f64, 4.0, 6.0, 8.0, 10.0, 11.0];

    let model = RobustFit::new()
        .weight_function(WeightFunction::Bisquare)
        .return_residuals()
        .build()
        .unwrap();
    let result = model.fit(&x, &y).unwrap();

    assert!(result.converged);
    assert_relative_eq!(result.slope, 2.0, epsilon = 1e-6);
    assert_relative_eq!(result.intercept, 0.0, epsilon = 1e-6);
    assert!(result.weights[5] < 1e-9);

    let residuals = result.residuals.as_ref().unwrap();
    assert_relative_eq!(residuals[5], -189.0, epsilon = 1e-3);
}

/// Test diagnostics on a near-perfect fit.
#[test]
fn test_diagnostics_workflow() {
    let x = vec![1.0f64, 2.0, 3.0, 4.0, 5.0];
    let y = vec![2.05f64, 3.98, 6.01, 7.99, 10.02];

    let model = RobustFit::new().return_diagnostics().build().unwrap();
    let result = model.fit(&x, &y).unwrap();

    let d = result.diagnostics.as_ref().unwrap();
    assert!(d.rmse < 0.1);
    assert!(d.r_squared > 0.999);
}

/// Test f32 support through the public API.
#[test]
fn test_f32_fit() {
    let x = vec![1.0f32, 2.0, 3.0, 4.0];
    let y = vec![3.0f32, 5.0, 7.0, 9.0];

    let model = RobustFit::<f32>::new().build().unwrap();
    let result = model.fit(&x, &y).unwrap();

    assert_relative_eq!(result.slope, 2.0f32, epsilon = 1e-4);
    assert_relative_eq!(result.intercept, 1.0f32, epsilon = 1e-4);
}

// ============================================================================
// Result Helper Tests
// ============================================================================

/// Test prediction from a fitted result.
#[test]
fn test_result_predict() {
    let model = RobustFit::<f64>::new().build().unwrap();
    let result = model.fit(&[0.0, 1.0, 2.0], &[1.0, 3.0, 5.0]).unwrap();
    assert_relative_eq!(result.predict(10.0), 21.0, epsilon = 1e-9);
}

/// Test the outlier helper.
#[test]
fn test_has_outliers_helper() {
    let x = vec![1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0];
    let y = vec![2.0f64, 4.0, 6.0, 8.0, 30.0, 12.0];

    let model = RobustFit::new()
        .detect_outliers(DetectionMethod::StandardizedResidual)
        .build()
        .unwrap();
    let result = model.fit(&x, &y).unwrap();
    assert!(result.has_outliers());

    let plain = RobustFit::<f64>::new().build().unwrap();
    let clean = plain.fit(&x, &y).unwrap();
    assert!(!clean.has_outliers());
}

/// Test the display formatting of a result.
#[test]
fn test_result_display() {
    let model = RobustFit::<f64>::new().return_residuals().build().unwrap();
    let result = model.fit(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();

    let mut out = String::new();
    write!(out, "{}", result).unwrap();
    assert!(out.contains("Slope"));
    assert!(out.contains("Converged"));
}
