//! Robust scale estimation using the Median Absolute Deviation.
//!
//! The MAD is resistant to outliers: up to half of the observations can be
//! corrupted before the estimate breaks down. Dividing by 0.6745 makes it a
//! consistent estimator of the standard deviation under Gaussian errors.

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;

/// Gaussian consistency constant: MAD / 0.6745 estimates sigma.
pub const MAD_CONSISTENCY: f64 = 0.6745;

/// Compute the median in-place using Quickselect.
///
/// Reorders `vals`. Even-length inputs average the two middle values.
#[inline]
pub fn median_inplace<T: Float>(vals: &mut [T]) -> T {
    let n = vals.len();
    if n == 0 {
        return T::zero();
    }

    let mid = n / 2;

    if n % 2 == 0 {
        // Even length: midpoint of the two central order statistics
        vals.select_nth_unstable_by(mid, |a, b| a.partial_cmp(b).unwrap_or(Equal));
        let upper = vals[mid];

        // select_nth leaves the lower half unordered; its maximum is
        // the other central value
        let mut lower = vals[0];
        for &v in &vals[1..mid] {
            if v > lower {
                lower = v;
            }
        }

        (lower + upper) / T::from(2.0).unwrap_or(T::one() + T::one())
    } else {
        vals.select_nth_unstable_by(mid, |a, b| a.partial_cmp(b).unwrap_or(Equal));
        vals[mid]
    }
}

/// Compute the Median Absolute Deviation in-place.
///
/// MAD = median(|v - median(v)|). Reorders and overwrites `vals`.
#[inline]
pub fn mad_inplace<T: Float>(vals: &mut [T]) -> T {
    if vals.is_empty() {
        return T::zero();
    }

    // Step 1: Compute median of the values
    let median = median_inplace(vals);

    // Step 2: Compute absolute deviations from the median
    for val in vals.iter_mut() {
        *val = (*val - median).abs();
    }

    // Step 3: Return median of absolute deviations
    median_inplace(vals)
}

/// Robust sigma estimate: MAD scaled to Gaussian consistency.
///
/// Returns exactly zero when the MAD is zero; the caller decides whether a
/// zero scale is degenerate.
#[inline]
pub fn robust_sigma<T: Float>(vals: &mut [T]) -> T {
    let mad = mad_inplace(vals);
    mad / T::from(MAD_CONSISTENCY).unwrap_or_else(T::one)
}
