//! Diagnostic metrics for fit quality assessment.
//!
//! ## Purpose
//!
//! This module computes goodness-of-fit metrics from the residuals of the
//! final robust fit.
//!
//! ## Design notes
//!
//! * **Residual-based**: Metrics are computed from residuals (y - ŷ).
//! * **Robustness**: The residual SD uses MAD * 1.4826, so it is not inflated
//!   by the very outliers the fit just rejected.
//! * **Generics**: All computations are generic over `Float` types.
//!
//! ## Invariants
//!
//! * Error metrics (RMSE, MAE) and the residual SD are non-negative.
//! * R^2 <= 1 (R^2 = 1 is a perfect fit).
//!
//! ## Non-goals
//!
//! * This module does not perform the fitting itself.
//! * This module does not provide p-values or formal hypothesis tests.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::math::scaling::mad_inplace;

// ============================================================================
// Diagnostics Structure
// ============================================================================

/// Diagnostic metrics for assessing fit quality.
#[derive(Debug, Clone, PartialEq)]
pub struct FitDiagnostics<T> {
    /// Root Mean Squared Error (RMSE).
    pub rmse: T,

    /// Mean Absolute Error (MAE).
    pub mae: T,

    /// Coefficient of determination (R^2).
    pub r_squared: T,

    /// Robust residual standard deviation estimated from MAD.
    pub residual_sd: T,
}

impl<T: Float> FitDiagnostics<T> {
    /// Constant to convert MAD to an unbiased estimate of sigma for normal data.
    const MAD_TO_STD_FACTOR: f64 = 1.4826;

    /// Compute diagnostic statistics from the data and residuals.
    pub fn compute(y: &[T], residuals: &[T]) -> Self {
        FitDiagnostics {
            rmse: Self::calculate_rmse(residuals),
            mae: Self::calculate_mae(residuals),
            r_squared: Self::calculate_r_squared(y, residuals),
            residual_sd: Self::calculate_residual_sd(residuals),
        }
    }

    /// RMSE = sqrt((1/n) * sum r_i^2).
    pub fn calculate_rmse(residuals: &[T]) -> T {
        let n_t = T::from(residuals.len()).unwrap_or_else(T::one);
        let rss = residuals.iter().fold(T::zero(), |acc, &r| acc + r * r);
        (rss / n_t).sqrt()
    }

    /// MAE = (1/n) * sum |r_i|.
    pub fn calculate_mae(residuals: &[T]) -> T {
        let n_t = T::from(residuals.len()).unwrap_or_else(T::one);
        let sum = residuals.iter().fold(T::zero(), |acc, &r| acc + r.abs());
        sum / n_t
    }

    /// R^2 = 1 - SS_res / SS_tot.
    pub fn calculate_r_squared(y: &[T], residuals: &[T]) -> T {
        let n = y.len();
        if n <= 1 {
            return T::one();
        }

        let n_t = T::from(n).unwrap_or_else(T::one);
        let sum = y.iter().copied().fold(T::zero(), |acc, v| acc + v);
        let mean = sum / n_t;

        let ss_tot = y.iter().fold(T::zero(), |acc, &yi| {
            let d = yi - mean;
            acc + d * d
        });
        let ss_res = residuals.iter().fold(T::zero(), |acc, &r| acc + r * r);

        if ss_tot == T::zero() {
            // All y values are identical
            if ss_res == T::zero() { T::one() } else { T::zero() }
        } else {
            T::one() - ss_res / ss_tot
        }
    }

    /// Robust residual SD: sigma_hat = 1.4826 * MAD(residuals).
    pub fn calculate_residual_sd(residuals: &[T]) -> T {
        let scale_const = T::from(Self::MAD_TO_STD_FACTOR).unwrap_or_else(T::one);
        let mut vals: Vec<T> = residuals.to_vec();
        mad_inplace(&mut vals) * scale_const
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for FitDiagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Fit Diagnostics:")?;
        writeln!(f, "  RMSE:         {:.6}", self.rmse)?;
        writeln!(f, "  MAE:          {:.6}", self.mae)?;
        writeln!(f, "  R²:           {:.6}", self.r_squared)?;
        writeln!(f, "  Residual SD:  {:.6}", self.residual_sd)
    }
}
