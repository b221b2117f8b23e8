//! Output types and result structures for fit operations.
//!
//! ## Purpose
//!
//! This module defines the `FitResult` struct which encapsulates all
//! outputs from a robust fit: the line coefficients, the converged
//! robustness weights, convergence metadata, and the optional residuals,
//! outlier partition, and diagnostics.
//!
//! ## Design notes
//!
//! * **Memory Efficiency**: Optional outputs use `Option`.
//! * **Generics**: Results are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `weights` has the same length as the input data.
//! * Robustness weights are always in the range [0, 1].
//! * `iterations <= max_iterations`, and `converged` is false only when the
//!   cap was exhausted.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not validate result consistency (responsibility of the engine).
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::evaluation::diagnostics::FitDiagnostics;
use crate::evaluation::outliers::OutlierPartition;

// ============================================================================
// Result Structure
// ============================================================================

/// Output of a robust line fit.
#[derive(Debug, Clone, PartialEq)]
pub struct FitResult<T> {
    /// Slope of the fitted line.
    pub slope: T,

    /// Intercept of the fitted line.
    pub intercept: T,

    /// Final robustness weights, one per observation.
    pub weights: Vec<T>,

    /// Number of IRLS iterations performed.
    pub iterations: usize,

    /// Whether the weighted residual sum dropped below the tolerance.
    pub converged: bool,

    /// Residuals of the final fit (y_i - y_hat_i), if requested.
    pub residuals: Option<Vec<T>>,

    /// Inlier/outlier partition, if outlier detection was requested.
    pub outliers: Option<OutlierPartition<T>>,

    /// Diagnostic metrics (RMSE, MAE, R^2, residual SD), if requested.
    pub diagnostics: Option<FitDiagnostics<T>>,
}

impl<T: Float> FitResult<T> {
    /// Predict the y-value for a given x using the fitted line.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.intercept + self.slope * x
    }

    /// Check if outlier detection was performed.
    pub fn has_outliers(&self) -> bool {
        self.outliers.is_some()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for FitResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Robust Fit Summary:")?;
        writeln!(f, "  Data points: {}", self.weights.len())?;
        writeln!(f, "  Slope:       {:.6}", self.slope)?;
        writeln!(f, "  Intercept:   {:.6}", self.intercept)?;
        writeln!(f, "  Iterations:  {}", self.iterations)?;
        writeln!(
            f,
            "  Converged:   {}",
            if self.converged { "yes" } else { "no" }
        )?;

        if let Some(partition) = &self.outliers {
            writeln!(
                f,
                "  Outliers:    {} of {}",
                partition.num_outliers(),
                partition.num_outliers() + partition.num_inliers()
            )?;
        }
        writeln!(f)?;

        if let Some(diag) = &self.diagnostics {
            writeln!(f, "{}", diag)?;
        }

        let has_resid = self.residuals.is_some();

        writeln!(f, "Observations:")?;
        write!(f, "{:>6} {:>10}", "Index", "Weight")?;
        if has_resid {
            write!(f, " {:>12}", "Residual")?;
        }
        writeln!(f)?;

        let line_width = 17 + if has_resid { 13 } else { 0 };
        writeln!(f, "{:-<width$}", "", width = line_width)?;

        // Show first 10 and last 10 rows if more than 20 points
        let n = self.weights.len();
        let show_all = n <= 20;
        let rows_to_show: Vec<usize> = if show_all {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            // Add ellipsis if we skipped rows
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>6}", "...")?;
            }
            prev_idx = idx;

            write!(f, "{:>6} {:>10.6}", idx, self.weights[idx])?;
            if has_resid {
                if let Some(resid) = &self.residuals {
                    write!(f, " {:>12.6}", resid[idx])?;
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
