#![cfg(feature = "dev")]
//! Tests for outlier classification.
//!
//! These tests verify both detection policies on fixed residuals and
//! weights, independent of the IRLS engine:
//! - Standardized-residual classification with leverage
//! - One-sided behavior (negative residuals are never flagged)
//! - Weight-based classification
//! - Partition bookkeeping and minimum-size checks
//!
//! ## Test Organization
//!
//! 1. **Standardized Residual Policy** - Known flags, one-sidedness
//! 2. **Weight Policy** - Sub-unit weights are flagged
//! 3. **Partition Invariants** - Counts and ordering
//! 4. **Errors** - Too few points, name resolution

use core::str::FromStr;

use robustfit::internals::evaluation::outliers::DetectionMethod;
use robustfit::internals::primitives::errors::RobustFitError;

// ============================================================================
// Standardized Residual Policy Tests
// ============================================================================

/// Test that a large positive residual is flagged.
///
/// x = [1..5], residuals = [0, 0, 0, 0, 10]: RMSE = sqrt(100/3), the
/// last point has leverage 0.6, so the standardized residual is about
/// 6.6, far above the threshold of 2.
#[test]
fn test_standardized_flags_large_positive_residual() {
    let x = vec![1.0f64, 2.0, 3.0, 4.0, 5.0];
    let y = vec![2.0f64, 4.0, 6.0, 8.0, 20.0];
    let residuals = vec![0.0f64, 0.0, 0.0, 0.0, 10.0];
    let weights = vec![1.0f64; 5];

    let partition = DetectionMethod::StandardizedResidual
        .classify(&x, &y, &residuals, &weights, 2.0)
        .unwrap();

    assert_eq!(partition.num_outliers(), 1);
    assert_eq!(partition.x_outliers, vec![5.0]);
    assert_eq!(partition.y_outliers, vec![20.0]);
}

/// Test the one-sided rule.
///
/// A residual of the same magnitude below the line must not be flagged.
#[test]
fn test_standardized_never_flags_negative_residual() {
    let x = vec![1.0f64, 2.0, 3.0, 4.0, 5.0];
    let y = vec![2.0f64, 4.0, 6.0, 8.0, -4.0];
    let residuals = vec![0.0f64, 0.0, 0.0, 0.0, -10.0];
    let weights = vec![1.0f64; 5];

    let partition = DetectionMethod::StandardizedResidual
        .classify(&x, &y, &residuals, &weights, 2.0)
        .unwrap();

    assert_eq!(partition.num_outliers(), 0);
    assert_eq!(partition.num_inliers(), 5);
}

/// Test that small residuals stay below the threshold.
#[test]
fn test_standardized_keeps_moderate_residuals() {
    let x = vec![1.0f64, 2.0, 3.0, 4.0, 5.0];
    let y = vec![2.1f64, 3.9, 6.2, 7.8, 10.1];
    let residuals = vec![0.1f64, -0.1, 0.2, -0.2, 0.1];
    let weights = vec![1.0f64; 5];

    let partition = DetectionMethod::StandardizedResidual
        .classify(&x, &y, &residuals, &weights, 2.0)
        .unwrap();

    assert_eq!(partition.num_outliers(), 0);
}

/// Test that an all-zero residual vector flags nothing.
///
/// A zero RMSE would make the denominator vanish; nothing is flagged.
#[test]
fn test_standardized_zero_rmse() {
    let x = vec![1.0f64, 2.0, 3.0];
    let y = vec![2.0f64, 4.0, 6.0];
    let residuals = vec![0.0f64; 3];
    let weights = vec![1.0f64; 3];

    let partition = DetectionMethod::StandardizedResidual
        .classify(&x, &y, &residuals, &weights, 2.0)
        .unwrap();

    assert_eq!(partition.num_outliers(), 0);
}

// ============================================================================
// Weight Policy Tests
// ============================================================================

/// Test that sub-unit weights are flagged and unit weights retained.
#[test]
fn test_by_weight_flags_downweighted_points() {
    let x = vec![1.0f64, 2.0, 3.0, 4.0];
    let y = vec![1.0f64, 2.0, 3.0, 9.0];
    let residuals = vec![0.0f64; 4];
    let weights = vec![1.0f64, 1.0, 0.99, 0.0];

    let partition = DetectionMethod::ByWeight
        .classify(&x, &y, &residuals, &weights, 2.0)
        .unwrap();

    assert_eq!(partition.num_outliers(), 2);
    assert_eq!(partition.x_outliers, vec![3.0, 4.0]);
    assert_eq!(partition.x_inliers, vec![1.0, 2.0]);
}

/// Test that uniform unit weights flag nothing.
#[test]
fn test_by_weight_all_unit_weights() {
    let x = vec![1.0f64, 2.0, 3.0];
    let y = vec![1.0f64, 2.0, 3.0];
    let weights = vec![1.0f64; 3];

    let partition = DetectionMethod::ByWeight
        .classify(&x, &y, &[0.0, 0.0, 0.0], &weights, 2.0)
        .unwrap();

    assert_eq!(partition.num_outliers(), 0);
    assert_eq!(partition.num_inliers(), 3);
}

// ============================================================================
// Partition Invariant Tests
// ============================================================================

/// Test that every observation lands in exactly one partition.
#[test]
fn test_partition_is_exhaustive() {
    let x = vec![1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0];
    let y = vec![1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0];
    let weights = vec![1.0f64, 0.5, 1.0, 0.0, 1.0, 0.7];

    let partition = DetectionMethod::ByWeight
        .classify(&x, &y, &[0.0; 6], &weights, 2.0)
        .unwrap();

    assert_eq!(partition.num_outliers() + partition.num_inliers(), x.len());
    assert_eq!(partition.x_outliers.len(), partition.y_outliers.len());
    assert_eq!(partition.x_inliers.len(), partition.y_inliers.len());
}

// ============================================================================
// Error Tests
// ============================================================================

/// Test the minimum-size requirement.
///
/// With fewer than 3 points the degrees of freedom are not positive.
#[test]
fn test_classify_too_few_points() {
    let x = vec![1.0f64, 2.0];
    let y = vec![1.0f64, 2.0];

    let result =
        DetectionMethod::StandardizedResidual.classify(&x, &y, &[0.0, 0.0], &[1.0, 1.0], 2.0);

    match result {
        Err(RobustFitError::TooFewPoints { got, min }) => {
            assert_eq!(got, 2);
            assert_eq!(min, 3);
        }
        other => panic!("expected TooFewPoints, got {:?}", other),
    }
}

/// Test detection method name resolution.
#[test]
fn test_detection_method_from_str() {
    assert_eq!(
        DetectionMethod::from_str("standardized_residual").unwrap(),
        DetectionMethod::StandardizedResidual
    );
    assert_eq!(
        DetectionMethod::from_str("weight").unwrap(),
        DetectionMethod::ByWeight
    );
    assert!(DetectionMethod::from_str("residual").is_err());
}

/// Test that the default policy is the standardized residual test.
#[test]
fn test_detection_method_default() {
    assert_eq!(
        DetectionMethod::default(),
        DetectionMethod::StandardizedResidual
    );
}
