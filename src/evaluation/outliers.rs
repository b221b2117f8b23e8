//! Outlier classification from fit results.
//!
//! ## Purpose
//!
//! This module splits the fitted observations into inliers and outliers,
//! using either the residuals of the final fit or the converged robustness
//! weights.
//!
//! ## Design notes
//!
//! * **Standardized residual policy**: An observation is an outlier when
//!   `r_i / sqrt(RMSE * (1 - h_i))` exceeds the threshold, where RMSE is the
//!   root mean squared error on n - 2 degrees of freedom and h_i the
//!   leverage. The test is one-sided: only positive residuals (points above
//!   the line) are flagged.
//! * **Weight policy**: An observation is an outlier when its converged
//!   robustness weight is strictly below 1. With redescending estimators this
//!   flags any point the fit downweighted at all.
//! * **Degrees of freedom**: The standard error uses n - 2 degrees of freedom
//!   (slope and intercept are estimated).
//!
//! ## Invariants
//!
//! * Every observation lands in exactly one of the two partitions.
//! * Classification requires at least 3 points (positive degrees of freedom).
//!
//! ## Non-goals
//!
//! * This module does not refit or adjust the model after removal.
//! * This module does not perform formal hypothesis tests.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::ToString;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::ToString;

// Internal dependencies
use crate::math::leverage::hat_diagonal;
use crate::primitives::errors::RobustFitError;

// External dependencies
use core::str::FromStr;
use num_traits::Float;

// ============================================================================
// Detection Method
// ============================================================================

/// Policy for deciding which observations are outliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetectionMethod {
    /// Flag observations whose residual exceeds `threshold` standard errors.
    ///
    /// One-sided: only points above the fitted line are flagged.
    #[default]
    StandardizedResidual,

    /// Flag observations whose converged robustness weight is below 1.
    ByWeight,
}

impl DetectionMethod {
    /// Get the name of the detection method.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            DetectionMethod::StandardizedResidual => "StandardizedResidual",
            DetectionMethod::ByWeight => "ByWeight",
        }
    }
}

impl FromStr for DetectionMethod {
    type Err = RobustFitError;

    /// Resolve a detection method from its lowercase name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standardized_residual" => Ok(DetectionMethod::StandardizedResidual),
            "weight" => Ok(DetectionMethod::ByWeight),
            _ => Err(RobustFitError::UnknownMethod {
                kind: "detection method",
                name: s.to_string(),
            }),
        }
    }
}

// ============================================================================
// Outlier Partition
// ============================================================================

/// The observations split into outliers and inliers.
///
/// Order within each partition follows the input order.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlierPartition<T> {
    /// x-values of flagged observations.
    pub x_outliers: Vec<T>,

    /// y-values of flagged observations.
    pub y_outliers: Vec<T>,

    /// x-values of retained observations.
    pub x_inliers: Vec<T>,

    /// y-values of retained observations.
    pub y_inliers: Vec<T>,
}

impl<T> OutlierPartition<T> {
    /// Number of flagged observations.
    #[inline]
    pub fn num_outliers(&self) -> usize {
        self.x_outliers.len()
    }

    /// Number of retained observations.
    #[inline]
    pub fn num_inliers(&self) -> usize {
        self.x_inliers.len()
    }
}

// ============================================================================
// Classification
// ============================================================================

/// Minimum points for classification: n - 2 must be positive.
const MIN_POINTS: usize = 3;

impl DetectionMethod {
    /// Partition the observations using this policy.
    ///
    /// `residuals` and `weights` come from the converged fit.
    pub fn classify<T: Float>(
        &self,
        x: &[T],
        y: &[T],
        residuals: &[T],
        weights: &[T],
        threshold: T,
    ) -> Result<OutlierPartition<T>, RobustFitError> {
        let n = x.len();
        if n < MIN_POINTS {
            return Err(RobustFitError::TooFewPoints {
                got: n,
                min: MIN_POINTS,
            });
        }

        let mut partition = OutlierPartition {
            x_outliers: Vec::new(),
            y_outliers: Vec::new(),
            x_inliers: Vec::new(),
            y_inliers: Vec::new(),
        };

        match self {
            Self::StandardizedResidual => {
                let rmse = regression_rmse(residuals);
                let leverage = hat_diagonal(x).ok_or(RobustFitError::ConstantPredictor)?;
                for i in 0..n {
                    // One-sided test: negative residuals are never flagged
                    let denom = (rmse * (T::one() - leverage[i]).max(T::zero())).sqrt();
                    let flagged = denom > T::zero() && residuals[i] / denom > threshold;
                    push(&mut partition, x[i], y[i], flagged);
                }
            }
            Self::ByWeight => {
                for i in 0..n {
                    let flagged = weights[i] < T::one();
                    push(&mut partition, x[i], y[i], flagged);
                }
            }
        }

        Ok(partition)
    }
}

/// Root mean squared error of the regression: sqrt(RSS / (n - 2)).
#[inline]
pub fn regression_rmse<T: Float>(residuals: &[T]) -> T {
    let n = residuals.len();
    if n <= 2 {
        return T::zero();
    }

    let rss = residuals.iter().fold(T::zero(), |acc, &r| acc + r * r);
    let dof = T::from(n - 2).unwrap_or_else(T::one);
    (rss / dof).sqrt()
}

#[inline]
fn push<T: Float>(partition: &mut OutlierPartition<T>, x: T, y: T, flagged: bool) {
    if flagged {
        partition.x_outliers.push(x);
        partition.y_outliers.push(y);
    } else {
        partition.x_inliers.push(x);
        partition.y_inliers.push(y);
    }
}
