//! Robustness weight computation for outlier downweighting.
//!
//! ## Purpose
//!
//! This module implements the reweighting half of iteratively reweighted
//! least squares (IRLS). After each weighted fit, residuals are standardized
//! against a MAD-based scale and the hat-matrix leverage, then passed through
//! the configured M-estimator weight function.
//!
//! ## Design notes
//!
//! * **Standardization**: u_i = r_i / (c * sigma * sqrt(1 - h_i)).
//! * **Scale**: sigma = MAD / 0.6745 (Gaussian-consistent).
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Robustness weights are in [0, 1].
//! * The standardization denominator is floored away from zero.
//!
//! ## Non-goals
//!
//! * This module does not perform the regression itself.
//! * This module does not decide the number of IRLS iterations.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::estimator::WeightFunction;
use crate::math::leverage::sqrt_complement;

/// Minimum standardization denominator to avoid division by zero.
const MIN_TUNED_SCALE: f64 = 1e-12;

/// Resolve the effective tuning constant.
///
/// Non-positive or non-finite requests fall back to the function's default,
/// matching the convention that 0 means "use the default".
#[inline]
pub fn resolve_tuning<T: Float>(weight_function: WeightFunction, requested: Option<T>) -> T {
    let default = T::from(weight_function.default_tuning()).unwrap_or_else(T::one);
    match requested {
        Some(c) if c > T::zero() && c.is_finite() => c,
        _ => default,
    }
}

/// Standardize a residual: u = r / (c * sigma * sqrt(1 - h)).
#[inline]
pub fn standardized_residual<T: Float>(residual: T, tuning: T, sigma: T, leverage: T) -> T {
    let floor = T::from(MIN_TUNED_SCALE).unwrap_or_else(T::epsilon);
    let denom = (tuning * sigma * sqrt_complement(leverage)).max(floor);
    residual / denom
}

/// Recompute all robustness weights from the current residuals.
///
/// `sigma` must be positive; the engine rejects a zero scale before calling.
pub fn update_weights<T: Float>(
    weight_function: WeightFunction,
    tuning: T,
    sigma: T,
    residuals: &[T],
    leverage: &[T],
    weights: &mut [T],
) {
    for ((w, &r), &h) in weights.iter_mut().zip(residuals).zip(leverage) {
        let u = standardized_residual(r, tuning, sigma, h);
        *w = weight_function.weight(u);
    }
}

/// Weighted residual sum, the IRLS convergence statistic.
///
/// Evaluated with the freshly updated weights. For the weights actually used
/// in the fit this sum is zero by the normal equations, so convergence is
/// judged by how little the new weights would perturb it.
#[inline]
pub fn weighted_residual_sum<T: Float>(residuals: &[T], weights: &[T]) -> T {
    let mut sum = T::zero();
    for (&r, &w) in residuals.iter().zip(weights) {
        sum = sum + r * w;
    }
    sum
}
