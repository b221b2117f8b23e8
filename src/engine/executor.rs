//! Execution engine for robust fit operations.
//!
//! ## Purpose
//!
//! This module provides the core execution engine that orchestrates the
//! IRLS fit. It handles the iteration loop, scale estimation, robustness
//! weight updates, convergence checking, and the assembly of the final
//! result.
//!
//! ## Design notes
//!
//! * Seeds the iteration with uniform weights, so the first pass is plain
//!   OLS expressed through the WLS solver.
//! * Convergence is judged by the weighted residual sum evaluated with the
//!   freshly updated weights; the sum under the fitting weights is zero by
//!   the normal equations.
//! * A zero MAD stops the iteration: convergence if the fit interpolates
//!   every weight-carrying point, `ZeroResidualScale` otherwise.
//! * Exhausting the iteration cap is reported through `converged: false`,
//!   not as an error.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * All working buffers have the same length as the input data.
//! * Robustness weights are always in [0, 1].
//! * Leverage values are computed once; x does not change across iterations.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not provide public-facing result formatting.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::regression::{LinearFit, WLSSolver};
use crate::algorithms::robustness::{resolve_tuning, update_weights, weighted_residual_sum};
use crate::engine::output::FitResult;
use crate::evaluation::diagnostics::FitDiagnostics;
use crate::evaluation::outliers::DetectionMethod;
use crate::math::estimator::WeightFunction;
use crate::math::leverage::hat_diagonal;
use crate::math::scaling::robust_sigma;
use crate::primitives::errors::RobustFitError;

// ============================================================================
// Defaults
// ============================================================================

/// Default convergence tolerance for the weighted residual sum.
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

/// Default cap on IRLS iterations.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Default outlier threshold in standard errors.
pub const DEFAULT_THRESHOLD: f64 = 2.0;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for a robust fit.
#[derive(Debug, Clone, PartialEq)]
pub struct FitConfig<T> {
    /// M-estimator weight function for the robustness iterations.
    pub weight_function: WeightFunction,

    /// Tuning constant override. `None` (or a non-positive value) selects
    /// the function's default.
    pub tuning_constant: Option<T>,

    /// Convergence tolerance for the weighted residual sum.
    pub tolerance: T,

    /// Cap on IRLS iterations.
    pub max_iterations: usize,

    /// Outlier detection policy, if requested.
    pub detection: Option<DetectionMethod>,

    /// Threshold in standard errors for residual-based detection.
    pub threshold: T,

    /// Whether to return the residuals of the final fit.
    pub return_residuals: bool,

    /// Whether to compute diagnostic metrics.
    pub return_diagnostics: bool,
}

impl<T: Float> Default for FitConfig<T> {
    fn default() -> Self {
        Self {
            weight_function: WeightFunction::default(),
            tuning_constant: None,
            tolerance: T::from(DEFAULT_TOLERANCE).unwrap_or_else(T::epsilon),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            detection: None,
            threshold: T::from(DEFAULT_THRESHOLD).unwrap_or_else(T::one),
            return_residuals: false,
            return_diagnostics: false,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Unified executor for robust fit operations.
#[derive(Debug, Clone)]
pub struct FitExecutor<T> {
    config: FitConfig<T>,
}

impl<T: Float> Default for FitExecutor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> FitExecutor<T> {
    /// Create a new executor with default parameters.
    pub fn new() -> Self {
        Self {
            config: FitConfig::default(),
        }
    }

    /// Create a new executor from a `FitConfig`.
    pub fn from_config(config: FitConfig<T>) -> Self {
        Self { config }
    }

    /// Set the M-estimator weight function.
    pub fn weight_function(mut self, wf: WeightFunction) -> Self {
        self.config.weight_function = wf;
        self
    }

    /// Set the tuning constant override.
    pub fn tuning_constant(mut self, c: Option<T>) -> Self {
        self.config.tuning_constant = c;
        self
    }

    /// Set the convergence tolerance.
    pub fn tolerance(mut self, tol: T) -> Self {
        self.config.tolerance = tol;
        self
    }

    /// Set the iteration cap.
    pub fn max_iterations(mut self, cap: usize) -> Self {
        self.config.max_iterations = cap;
        self
    }

    /// Set the outlier detection policy.
    pub fn detection(mut self, method: Option<DetectionMethod>) -> Self {
        self.config.detection = method;
        self
    }

    /// Set the outlier threshold in standard errors.
    pub fn threshold(mut self, threshold: T) -> Self {
        self.config.threshold = threshold;
        self
    }

    /// Set whether to return residuals.
    pub fn return_residuals(mut self, flag: bool) -> Self {
        self.config.return_residuals = flag;
        self
    }

    /// Set whether to compute diagnostics.
    pub fn return_diagnostics(mut self, flag: bool) -> Self {
        self.config.return_diagnostics = flag;
        self
    }
}

impl<T: WLSSolver> FitExecutor<T> {
    // ========================================================================
    // Main Entry Point
    // ========================================================================

    /// Run the IRLS fit on validated input data.
    ///
    /// # Algorithm
    ///
    /// 1. Seed robustness weights uniformly at 1 and fit (plain OLS).
    /// 2. Standardize residuals with the MAD-based sigma and leverage,
    ///    then recompute weights through the M-estimator.
    /// 3. Stop when |sum r_i * w_i| <= tolerance with the new weights,
    ///    otherwise refit with them and repeat, up to `max_iterations`.
    pub fn run(&self, x: &[T], y: &[T]) -> Result<FitResult<T>, RobustFitError> {
        let n = x.len();
        let cfg = &self.config;
        let tuning = resolve_tuning(cfg.weight_function, cfg.tuning_constant);

        // Leverage depends only on x; a missing value means Sxx == 0.
        let leverage = hat_diagonal(x).ok_or(RobustFitError::ConstantPredictor)?;

        let mut weights = vec![T::one(); n];
        let mut scratch = vec![T::zero(); n];

        // Initial fit with uniform weights. The solver cannot be singular
        // here given the leverage check above.
        let mut fit =
            LinearFit::fit_wls(x, y, &weights).ok_or(RobustFitError::ConstantPredictor)?;
        let mut residuals = fit.residuals(x, y);

        let mut iterations = 0;
        let mut converged = residuals_negligible(&residuals, cfg.tolerance);

        if !converged {
            for iter in 1..=cfg.max_iterations {
                iterations = iter;

                // Robust scale of the current residuals
                scratch.copy_from_slice(&residuals);
                let sigma = robust_sigma(&mut scratch);
                if sigma <= T::zero() {
                    // A zero MAD leaves the residuals unstandardizable.
                    // If the fit already interpolates every point that
                    // carries weight the iteration is done; otherwise the
                    // scale estimate has collapsed on a fit that still
                    // misses weighted points.
                    if weighted_rss(&residuals, &weights) <= cfg.tolerance {
                        converged = true;
                        break;
                    }
                    return Err(RobustFitError::ZeroResidualScale);
                }

                update_weights(
                    cfg.weight_function,
                    tuning,
                    sigma,
                    &residuals,
                    &leverage,
                    &mut weights,
                );

                // Convergence: the new weights barely perturb the fit
                let metric = weighted_residual_sum(&residuals, &weights).abs();
                if metric <= cfg.tolerance {
                    converged = true;
                    break;
                }

                fit = LinearFit::fit_wls(x, y, &weights)
                    .ok_or(RobustFitError::DegenerateWeightedSystem)?;
                residuals = fit.residuals(x, y);

                if residuals_negligible(&residuals, cfg.tolerance) {
                    converged = true;
                    break;
                }
            }
        }

        self.assemble(x, y, fit, residuals, weights, iterations, converged)
    }

    // ========================================================================
    // Result Assembly
    // ========================================================================

    #[allow(clippy::too_many_arguments)]
    fn assemble(
        &self,
        x: &[T],
        y: &[T],
        fit: LinearFit<T>,
        residuals: Vec<T>,
        weights: Vec<T>,
        iterations: usize,
        converged: bool,
    ) -> Result<FitResult<T>, RobustFitError> {
        let cfg = &self.config;

        let outliers = match cfg.detection {
            Some(method) => {
                Some(method.classify(x, y, &residuals, &weights, cfg.threshold)?)
            }
            None => None,
        };

        let diagnostics = if cfg.return_diagnostics {
            Some(FitDiagnostics::compute(y, &residuals))
        } else {
            None
        };

        Ok(FitResult {
            slope: fit.slope,
            intercept: fit.intercept,
            weights,
            iterations,
            converged,
            residuals: if cfg.return_residuals {
                Some(residuals)
            } else {
                None
            },
            outliers,
            diagnostics,
        })
    }
}

/// True when the residual sum of squares is already below the tolerance.
///
/// A perfect (or near-perfect) seed fit converges immediately; the MAD of
/// such residuals is zero and must not reach the standardization step.
#[inline]
fn residuals_negligible<T: Float>(residuals: &[T], tolerance: T) -> bool {
    let mut rss = T::zero();
    for &r in residuals {
        rss = rss + r * r;
    }
    rss <= tolerance
}

/// Residual sum of squares restricted to the points carrying weight.
///
/// Zero exactly when the fit interpolates every weighted point, which is
/// the only state in which a zero residual scale is benign.
#[inline]
fn weighted_rss<T: Float>(residuals: &[T], weights: &[T]) -> T {
    let mut rss = T::zero();
    for (&r, &w) in residuals.iter().zip(weights) {
        rss = rss + w * r * r;
    }
    rss
}
