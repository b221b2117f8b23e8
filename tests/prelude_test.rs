#![cfg(feature = "dev")]
//! Tests for the prelude module.
//!
//! These tests verify that the prelude exports everything needed for
//! ordinary use of the crate: the builder, the weight function and
//! detection variants, and the result and error types.
//!
//! ## Test Organization
//!
//! 1. **Import Verification** - All prelude exports are accessible
//! 2. **Variant Exports** - Enum variants usable without qualification
//! 3. **Workflows** - Complete fits driven only by prelude imports

use robustfit::prelude::*;

// ============================================================================
// Import Verification Tests
// ============================================================================

/// Test that the core prelude imports work together.
#[test]
fn test_prelude_imports() {
    let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let y = vec![2.0, 4.0, 6.0, 8.0, 10.0];

    let result: Result<FitResult<f64>, RobustFitError> =
        RobustFit::new().build().unwrap().fit(&x, &y);
    assert!(result.is_ok());
}

/// Test that all eight weight function variants are exported bare.
#[test]
fn test_weight_function_variants_exported() {
    let variants: [WeightFunction; 8] = [
        Andrews, Bisquare, Cauchy, Fair, Huber, Logistic, Talwar, Welsch,
    ];
    for wf in variants {
        assert!(!wf.name().is_empty());
    }
}

/// Test that both detection variants are exported bare.
#[test]
fn test_detection_variants_exported() {
    let methods: [DetectionMethod; 2] = [StandardizedResidual, ByWeight];
    for m in methods {
        assert!(!m.name().is_empty());
    }
}

// ============================================================================
// Workflow Tests
// ============================================================================

/// Test a full robust fit using only prelude names.
#[test]
fn test_prelude_workflow() {
    let x = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let y = vec![2.0, 4.0, 6.0, 8.0, 30.0, 12.0];

    let model = RobustFit::new()
        .weight_function(Bisquare)
        .detect_outliers(StandardizedResidual)
        .build()
        .unwrap();
    let result = model.fit(&x, &y).unwrap();

    assert!(result.converged);

    let partition: &OutlierPartition<f64> = result.outliers.as_ref().unwrap();
    assert_eq!(partition.num_outliers(), 1);
}

/// Test that diagnostics are reachable through the prelude.
#[test]
fn test_prelude_diagnostics() {
    let x = vec![1.0, 2.0, 3.0, 4.0];
    let y = vec![1.0, 3.0, 5.0, 7.0];

    let model = RobustFit::new().return_diagnostics().build().unwrap();
    let result = model.fit(&x, &y).unwrap();

    let d: &FitDiagnostics<f64> = result.diagnostics.as_ref().unwrap();
    assert!(d.r_squared > 0.999);
}
