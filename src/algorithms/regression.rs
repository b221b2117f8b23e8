//! Regression Logic
//!
//! ## Purpose
//!
//! This module provides the core data types and logic for fitting a straight
//! line by (weighted) least squares, including:
//! - Generic and SIMD-optimized accumulation of the normal-equation sums.
//! - A closed-form solver for the 2-parameter system.
//! - The `LinearFit` result type with prediction and residual helpers.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;
use wide::{f32x8, f64x2};

// ============================================================================
// Generic Accumulation and Solving
// ============================================================================

/// Scalar accumulation for 1D weighted least squares (generic Float).
#[inline]
pub fn accumulate_wls_scalar<T: Float>(x: &[T], y: &[T], weights: &[T]) -> (T, T, T, T, T) {
    let n = x.len();
    if n == 0 {
        return (T::zero(), T::zero(), T::zero(), T::zero(), T::zero());
    }

    let mut sum_w = T::zero();
    let mut sum_wx = T::zero();
    let mut sum_wy = T::zero();
    let mut sum_wxx = T::zero();
    let mut sum_wxy = T::zero();

    for i in 0..n {
        let w = weights[i];
        let x_val = x[i];
        let y_val = y[i];

        let wx = w * x_val;

        sum_w = sum_w + w;
        sum_wx = sum_wx + wx;
        sum_wy = sum_wy + w * y_val;
        sum_wxx = sum_wxx + wx * x_val;
        sum_wxy = sum_wxy + wx * y_val;
    }

    (sum_w, sum_wx, sum_wy, sum_wxx, sum_wxy)
}

/// Closed-form solver for the 1D weighted least squares system.
///
/// Returns `(slope, intercept, x_mean, y_mean)` where the means are
/// weighted. Returns `None` when the total weight is non-positive or the
/// weighted variance of `x` is numerically zero (singular system).
#[inline]
pub fn solve_wls_scalar<T: Float>(
    sum_w: T,
    sum_wx: T,
    sum_wy: T,
    sum_wxx: T,
    sum_wxy: T,
) -> Option<(T, T, T, T)> {
    if sum_w <= T::zero() {
        return None;
    }

    let x_mean = sum_wx / sum_w;
    let y_mean = sum_wy / sum_w;
    let variance = sum_wxx - (sum_wx * sum_wx) / sum_w;

    // Relative tolerance scaled by the magnitude of the accumulated sums
    let tol = T::epsilon() * sum_wxx.abs();
    if variance <= tol {
        return None;
    }

    let covariance = sum_wxy - (sum_wx * sum_wy) / sum_w;
    let slope = covariance / variance;
    let intercept = y_mean - slope * x_mean;

    Some((slope, intercept, x_mean, y_mean))
}

// ============================================================================
// Specialized Accumulation (SIMD)
// ============================================================================

/// SIMD-optimized accumulation for 1D weighted least squares (f64).
#[inline]
pub fn accumulate_wls_simd_f64(x: &[f64], y: &[f64], weights: &[f64]) -> (f64, f64, f64, f64, f64) {
    let n = x.len();
    if n == 0 {
        return (0.0, 0.0, 0.0, 0.0, 0.0);
    }

    let mut s_w = f64x2::splat(0.0);
    let mut s_wx = f64x2::splat(0.0);
    let mut s_wy = f64x2::splat(0.0);
    let mut s_wxx = f64x2::splat(0.0);
    let mut s_wxy = f64x2::splat(0.0);

    let chunks = n / 2 * 2;
    for ((xc, yc), wc) in x[..chunks]
        .chunks_exact(2)
        .zip(y[..chunks].chunks_exact(2))
        .zip(weights[..chunks].chunks_exact(2))
    {
        let w = f64x2::new([wc[0], wc[1]]);
        let x_val = f64x2::new([xc[0], xc[1]]);
        let y_val = f64x2::new([yc[0], yc[1]]);

        let wx = w * x_val;

        s_w += w;
        s_wx += wx;
        s_wy += w * y_val;
        s_wxx += wx * x_val;
        s_wxy += wx * y_val;
    }

    let mut a_w = s_w.reduce_add();
    let mut a_wx = s_wx.reduce_add();
    let mut a_wy = s_wy.reduce_add();
    let mut a_wxx = s_wxx.reduce_add();
    let mut a_wxy = s_wxy.reduce_add();

    for i in chunks..n {
        let w = weights[i];
        let x_val = x[i];
        let y_val = y[i];

        let wx = w * x_val;

        a_w += w;
        a_wx += wx;
        a_wy += w * y_val;
        a_wxx += wx * x_val;
        a_wxy += wx * y_val;
    }

    (a_w, a_wx, a_wy, a_wxx, a_wxy)
}

/// SIMD-optimized accumulation for 1D weighted least squares (f32).
#[inline]
pub fn accumulate_wls_simd_f32(x: &[f32], y: &[f32], weights: &[f32]) -> (f32, f32, f32, f32, f32) {
    let n = x.len();
    if n == 0 {
        return (0.0, 0.0, 0.0, 0.0, 0.0);
    }

    let mut s_w = f32x8::splat(0.0);
    let mut s_wx = f32x8::splat(0.0);
    let mut s_wy = f32x8::splat(0.0);
    let mut s_wxx = f32x8::splat(0.0);
    let mut s_wxy = f32x8::splat(0.0);

    let chunks = n / 8 * 8;
    for ((xc, yc), wc) in x[..chunks]
        .chunks_exact(8)
        .zip(y[..chunks].chunks_exact(8))
        .zip(weights[..chunks].chunks_exact(8))
    {
        let w = f32x8::new([wc[0], wc[1], wc[2], wc[3], wc[4], wc[5], wc[6], wc[7]]);
        let x_val = f32x8::new([xc[0], xc[1], xc[2], xc[3], xc[4], xc[5], xc[6], xc[7]]);
        let y_val = f32x8::new([yc[0], yc[1], yc[2], yc[3], yc[4], yc[5], yc[6], yc[7]]);

        let wx = w * x_val;

        s_w += w;
        s_wx += wx;
        s_wy += w * y_val;
        s_wxx += wx * x_val;
        s_wxy += wx * y_val;
    }

    let mut a_w = s_w.reduce_add();
    let mut a_wx = s_wx.reduce_add();
    let mut a_wy = s_wy.reduce_add();
    let mut a_wxx = s_wxx.reduce_add();
    let mut a_wxy = s_wxy.reduce_add();

    for i in chunks..n {
        let w = weights[i];
        let x_val = x[i];
        let y_val = y[i];

        let wx = w * x_val;

        a_w += w;
        a_wx += wx;
        a_wy += w * y_val;
        a_wxx += wx * x_val;
        a_wxy += wx * y_val;
    }

    (a_w, a_wx, a_wy, a_wxx, a_wxy)
}

// ============================================================================
// Solver Trait
// ============================================================================

/// Trait for type-specific weighted least squares accumulation and solving.
pub trait WLSSolver: Float {
    /// Accumulate weighted statistics.
    #[inline]
    fn accumulate_wls(x: &[Self], y: &[Self], weights: &[Self]) -> (Self, Self, Self, Self, Self) {
        accumulate_wls_scalar(x, y, weights)
    }

    /// Solve for coefficients.
    #[inline]
    fn solve_wls(
        sum_w: Self,
        sum_wx: Self,
        sum_wy: Self,
        sum_wxx: Self,
        sum_wxy: Self,
    ) -> Option<(Self, Self, Self, Self)> {
        solve_wls_scalar(sum_w, sum_wx, sum_wy, sum_wxx, sum_wxy)
    }
}

impl WLSSolver for f64 {
    #[inline]
    fn accumulate_wls(x: &[f64], y: &[f64], weights: &[f64]) -> (f64, f64, f64, f64, f64) {
        accumulate_wls_simd_f64(x, y, weights)
    }
}

impl WLSSolver for f32 {
    #[inline]
    fn accumulate_wls(x: &[f32], y: &[f32], weights: &[f32]) -> (f32, f32, f32, f32, f32) {
        accumulate_wls_simd_f32(x, y, weights)
    }
}

// ============================================================================
// LinearFit
// ============================================================================

/// Straight-line fit (slope and intercept).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit<T: Float> {
    /// Slope (beta_1)
    pub slope: T,

    /// Intercept (beta_0)
    pub intercept: T,

    /// Weighted mean of x-values
    pub x_mean: T,

    /// Weighted mean of y-values
    pub y_mean: T,
}

impl<T: Float> LinearFit<T> {
    /// Predict the y-value for a given x using the fitted line.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.intercept + self.slope * x
    }

    /// Raw residuals r_i = y_i - (intercept + slope * x_i).
    pub fn residuals(&self, x: &[T], y: &[T]) -> Vec<T> {
        x.iter()
            .zip(y.iter())
            .map(|(&xi, &yi)| yi - self.predict(xi))
            .collect()
    }

    /// Residual sum of squares against the given data.
    pub fn rss(&self, x: &[T], y: &[T]) -> T {
        let mut sum = T::zero();
        for (&xi, &yi) in x.iter().zip(y.iter()) {
            let r = yi - self.predict(xi);
            sum = sum + r * r;
        }
        sum
    }
}

impl<T: WLSSolver> LinearFit<T> {
    /// Fit Ordinary Least Squares (OLS) regression.
    ///
    /// Returns `None` when all `x` values coincide (zero variance).
    pub fn fit_ols(x: &[T], y: &[T]) -> Option<Self> {
        let n = x.len();
        if n == 0 {
            return None;
        }

        let n_t = T::from(n).unwrap_or_else(T::one);

        let mut sum_x = T::zero();
        let mut sum_y = T::zero();

        for i in 0..n {
            sum_x = sum_x + x[i];
            sum_y = sum_y + y[i];
        }

        let x_mean = sum_x / n_t;
        let y_mean = sum_y / n_t;

        let mut variance = T::zero();
        let mut covariance = T::zero();
        let mut sum_xx = T::zero();

        for i in 0..n {
            let dx = x[i] - x_mean;
            let dy = y[i] - y_mean;
            variance = variance + dx * dx;
            covariance = covariance + dx * dy;
            sum_xx = sum_xx + x[i] * x[i];
        }

        if variance <= T::epsilon() * sum_xx.abs() {
            return None;
        }

        let slope = covariance / variance;
        let intercept = y_mean - slope * x_mean;

        Some(Self {
            slope,
            intercept,
            x_mean,
            y_mean,
        })
    }

    /// Fit Weighted Least Squares (WLS) regression using SIMD-optimized accumulation.
    ///
    /// Returns `None` when the weighted system is singular: total weight is
    /// non-positive, or the surviving weight mass concentrates on a single
    /// x-location.
    pub fn fit_wls(x: &[T], y: &[T], weights: &[T]) -> Option<Self> {
        let n = x.len();
        if n == 0 {
            return None;
        }

        // SIMD-optimized single-pass accumulation
        let (sum_w, sum_wx, sum_wy, sum_wxx, sum_wxy) = T::accumulate_wls(x, y, weights);

        let (slope, intercept, x_mean, y_mean) =
            T::solve_wls(sum_w, sum_wx, sum_wy, sum_wxx, sum_wxy)?;

        Some(Self {
            slope,
            intercept,
            x_mean,
            y_mean,
        })
    }
}
