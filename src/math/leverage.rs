//! Hat-matrix leverage for simple linear regression.
//!
//! For the straight-line model the hat diagonal has the closed form
//!
//! ```text
//! h_i = 1/n + (x_i - x_mean)^2 / Sxx,    Sxx = sum (x_j - x_mean)^2
//! ```
//!
//! Leverage measures how far a predictor value sits from the centre of the
//! design. High-leverage points pull the fitted line towards themselves, so
//! residual standardization divides by sqrt(1 - h_i) to restore comparable
//! variances.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

/// Floor applied to 1 - h before taking the square root.
///
/// At a point with leverage 1 the residual variance vanishes and the
/// standardized residual is undefined; the floor keeps the division finite.
const MIN_COMPLEMENT: f64 = 1e-12;

/// Compute the hat-diagonal leverage for every predictor value.
///
/// Returns `None` when Sxx is zero (all `x` identical), in which case no
/// line is defined.
///
/// For non-degenerate input the values satisfy `1/n <= h_i <= 1` and
/// `sum h_i = 2`.
pub fn hat_diagonal<T: Float>(x: &[T]) -> Option<Vec<T>> {
    let n = x.len();
    if n == 0 {
        return None;
    }

    let n_t = T::from(n).unwrap_or_else(T::one);
    let mut mean = T::zero();
    for &xi in x {
        mean = mean + xi;
    }
    mean = mean / n_t;

    let mut sxx = T::zero();
    for &xi in x {
        let d = xi - mean;
        sxx = sxx + d * d;
    }

    if sxx <= T::zero() {
        return None;
    }

    let base = T::one() / n_t;
    let h = x
        .iter()
        .map(|&xi| {
            let d = xi - mean;
            base + d * d / sxx
        })
        .collect();

    Some(h)
}

/// sqrt(1 - h) with the complement floored away from zero.
#[inline]
pub fn sqrt_complement<T: Float>(h: T) -> T {
    let floor = T::from(MIN_COMPLEMENT).unwrap_or_else(T::epsilon);
    (T::one() - h).max(floor).sqrt()
}
