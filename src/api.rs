//! High-level API for robust line fitting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements
//! a fluent builder pattern for configuring the robust fit and producing a
//! reusable model.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`RobustFitBuilder`] via `RobustFit::new()`.
//! 2. Chain configuration methods (`.weight_function()`, `.tolerance()`, etc.).
//! 3. Call `.build()` to validate and obtain a [`RobustFitModel`].
//! 4. Call `.fit(&x, &y)` on the model, as many times as needed.

// External dependencies
use core::fmt::Debug;
use core::str::FromStr;
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{FitConfig, FitExecutor};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::regression::WLSSolver;
pub use crate::engine::output::FitResult;
pub use crate::evaluation::diagnostics::FitDiagnostics;
pub use crate::evaluation::outliers::{DetectionMethod, OutlierPartition};
pub use crate::math::estimator::WeightFunction;
pub use crate::primitives::errors::RobustFitError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a robust line fit.
#[derive(Debug, Clone)]
pub struct RobustFitBuilder<T> {
    /// M-estimator weight function.
    pub weight_function: Option<WeightFunction>,

    /// Tuning constant override.
    pub tuning_constant: Option<T>,

    /// Convergence tolerance for the weighted residual sum.
    pub tolerance: Option<T>,

    /// Cap on IRLS iterations.
    pub max_iterations: Option<usize>,

    /// Outlier detection policy.
    pub detection: Option<DetectionMethod>,

    /// Outlier threshold in standard errors.
    pub threshold: Option<T>,

    /// Return residuals of the final fit.
    pub return_residuals: Option<bool>,

    /// Compute diagnostic metrics.
    pub return_diagnostics: Option<bool>,

    /// Deferred error from name-based setters.
    #[doc(hidden)]
    pub deferred_error: Option<RobustFitError>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for RobustFitBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> RobustFitBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            weight_function: None,
            tuning_constant: None,
            tolerance: None,
            max_iterations: None,
            detection: None,
            threshold: None,
            return_residuals: None,
            return_diagnostics: None,
            deferred_error: None,
            duplicate_param: None,
        }
    }

    /// Set the M-estimator weight function.
    pub fn weight_function(mut self, wf: WeightFunction) -> Self {
        if self.weight_function.is_some() {
            self.duplicate_param = Some("weight_function");
        }
        self.weight_function = Some(wf);
        self
    }

    /// Set the weight function by its lowercase name (e.g., `"huber"`).
    ///
    /// An unknown name is reported when `.build()` is called.
    pub fn weight_function_named(mut self, name: &str) -> Self {
        match WeightFunction::from_str(name) {
            Ok(wf) => return self.weight_function(wf),
            Err(e) => self.deferred_error = Some(e),
        }
        self
    }

    /// Set the tuning constant.
    ///
    /// A non-positive value selects the weight function's default.
    pub fn tuning_constant(mut self, c: T) -> Self {
        if self.tuning_constant.is_some() {
            self.duplicate_param = Some("tuning_constant");
        }
        self.tuning_constant = Some(c);
        self
    }

    /// Set the convergence tolerance.
    pub fn tolerance(mut self, tol: T) -> Self {
        if self.tolerance.is_some() {
            self.duplicate_param = Some("tolerance");
        }
        self.tolerance = Some(tol);
        self
    }

    /// Set the cap on IRLS iterations.
    pub fn max_iterations(mut self, cap: usize) -> Self {
        if self.max_iterations.is_some() {
            self.duplicate_param = Some("max_iterations");
        }
        self.max_iterations = Some(cap);
        self
    }

    /// Enable outlier detection with the given policy.
    pub fn detect_outliers(mut self, method: DetectionMethod) -> Self {
        if self.detection.is_some() {
            self.duplicate_param = Some("detect_outliers");
        }
        self.detection = Some(method);
        self
    }

    /// Enable outlier detection by its lowercase name
    /// (`"standardized_residual"` or `"weight"`).
    ///
    /// An unknown name is reported when `.build()` is called.
    pub fn detect_outliers_named(mut self, name: &str) -> Self {
        match DetectionMethod::from_str(name) {
            Ok(method) => return self.detect_outliers(method),
            Err(e) => self.deferred_error = Some(e),
        }
        self
    }

    /// Set the outlier threshold in standard errors.
    pub fn outlier_threshold(mut self, threshold: T) -> Self {
        if self.threshold.is_some() {
            self.duplicate_param = Some("outlier_threshold");
        }
        self.threshold = Some(threshold);
        self
    }

    /// Include residuals of the final fit in the output.
    pub fn return_residuals(mut self) -> Self {
        self.return_residuals = Some(true);
        self
    }

    /// Include diagnostic metrics (RMSE, MAE, R^2) in the output.
    pub fn return_diagnostics(mut self) -> Self {
        self.return_diagnostics = Some(true);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Validate the configuration and build the model.
    pub fn build(self) -> Result<RobustFitModel<T>, RobustFitError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let defaults = FitConfig::<T>::default();

        let tolerance = self.tolerance.unwrap_or(defaults.tolerance);
        Validator::validate_tolerance(tolerance)?;

        let max_iterations = self.max_iterations.unwrap_or(defaults.max_iterations);
        Validator::validate_max_iterations(max_iterations)?;

        let threshold = self.threshold.unwrap_or(defaults.threshold);
        Validator::validate_threshold(threshold)?;

        let config = FitConfig {
            weight_function: self.weight_function.unwrap_or_default(),
            tuning_constant: self.tuning_constant,
            tolerance,
            max_iterations,
            detection: self.detection,
            threshold,
            return_residuals: self.return_residuals.unwrap_or(false),
            return_diagnostics: self.return_diagnostics.unwrap_or(false),
        };

        Ok(RobustFitModel { config })
    }
}

// ============================================================================
// Model
// ============================================================================

/// A validated, reusable robust fit model.
#[derive(Debug, Clone)]
pub struct RobustFitModel<T> {
    config: FitConfig<T>,
}

impl<T: WLSSolver> RobustFitModel<T> {
    /// Fit a straight line to the data and classify outliers if configured.
    pub fn fit(&self, x: &[T], y: &[T]) -> Result<FitResult<T>, RobustFitError> {
        Validator::validate_inputs(x, y)?;
        FitExecutor::from_config(self.config.clone()).run(x, y)
    }
}
