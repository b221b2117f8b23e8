//! M-estimator weight functions for robust fitting.
//!
//! ## Purpose
//!
//! This module provides the weight functions that map standardized residuals
//! to robustness weights. They control how strongly an observation with a
//! large residual is downweighted in the next IRLS pass.
//!
//! ## Design notes
//!
//! * **Standardization**: Weights are evaluated at u = r / (c * sigma * sqrt(1 - h)),
//!   where c is the tuning constant, sigma the MAD-based scale, and h the leverage.
//! * **Tuning constants**: Each function carries a default constant chosen for
//!   95% asymptotic efficiency under Gaussian errors.
//! * **Redescenders**: Andrews, Bisquare, Talwar, and Welsch assign zero (or
//!   vanishing) weight to gross outliers; Huber, Fair, Cauchy, and Logistic
//!   downweight but never fully reject.
//!
//! ## Invariants
//!
//! * Weights lie in [0, 1], with w(0) = 1.
//! * Weights are even: w(u) = w(-u).
//! * Weights are non-increasing in |u|.
//!
//! ## Non-goals
//!
//! * This module does not compute residuals, scale, or leverage.
//! * This module does not decide outlier membership.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::ToString;
#[cfg(feature = "std")]
use std::string::ToString;

// Internal dependencies
use crate::primitives::errors::RobustFitError;

// External dependencies
use core::f64::consts::PI;
use core::str::FromStr;
use num_traits::Float;

// ============================================================================
// Tuning Constants
// ============================================================================

/// Default tuning constant for the Andrews wave function.
const ANDREWS_TUNING: f64 = 1.339;

/// Default tuning constant for Tukey's bisquare function.
const BISQUARE_TUNING: f64 = 4.685;

/// Default tuning constant for the Cauchy function.
const CAUCHY_TUNING: f64 = 2.385;

/// Default tuning constant for the Fair function.
const FAIR_TUNING: f64 = 1.400;

/// Default tuning constant for the Huber function.
const HUBER_TUNING: f64 = 1.345;

/// Default tuning constant for the Logistic function.
const LOGISTIC_TUNING: f64 = 1.205;

/// Default tuning constant for the Talwar function.
const TALWAR_TUNING: f64 = 2.795;

/// Default tuning constant for the Welsch function.
const WELSCH_TUNING: f64 = 2.985;

/// Threshold below which sin(u)/u and tanh(u)/u are evaluated at their limit.
///
/// Both ratios tend to 1 as u -> 0; direct evaluation at tiny u would divide
/// by (near) zero.
const SMALL_U: f64 = 1e-12;

// ============================================================================
// Weight Function Enum
// ============================================================================

/// M-estimator weight function for robustness iterations.
///
/// Each variant defines a function w: ℝ → [0, 1] evaluated at the
/// standardized residual u.
///
/// # Mathematical Properties
///
/// | Function | w(u)                          | Support   | Default c |
/// |----------|-------------------------------|-----------|-----------|
/// | Andrews  | sin(u) / u                    | \|u\| < π | 1.339     |
/// | Bisquare | (1 - u²)²                     | \|u\| ≤ 1 | 4.685     |
/// | Cauchy   | 1 / (1 + u²)                  | all u     | 2.385     |
/// | Fair     | 1 / (1 + \|u\|)               | all u     | 1.400     |
/// | Huber    | 1 / max(1, \|u\|)             | all u     | 1.345     |
/// | Logistic | tanh(u) / u                   | all u     | 1.205     |
/// | Talwar   | 1                             | \|u\| ≤ 1 | 2.795     |
/// | Welsch   | exp(-u²)                      | all u     | 2.985     |
///
/// Bounded functions return exactly zero outside their support. The default
/// constants give 95% asymptotic efficiency under Gaussian errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeightFunction {
    /// Andrews wave: w(u) = sin(u) / u for |u| < pi, else 0.
    Andrews,

    /// Tukey's bisquare (biweight): w(u) = (1 - u^2)^2 for |u| <= 1, else 0.
    ///
    /// This is the default and recommended choice.
    #[default]
    Bisquare,

    /// Cauchy: w(u) = 1 / (1 + u^2).
    Cauchy,

    /// Fair: w(u) = 1 / (1 + |u|).
    Fair,

    /// Huber: w(u) = 1 / max(1, |u|).
    Huber,

    /// Logistic: w(u) = tanh(u) / u.
    Logistic,

    /// Talwar (hard rejection): w(u) = 1 for |u| <= 1, else 0.
    Talwar,

    /// Welsch: w(u) = exp(-u^2).
    Welsch,
}

impl WeightFunction {
    // ========================================================================
    // Metadata Methods
    // ========================================================================

    /// Get the name of the weight function.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            WeightFunction::Andrews => "Andrews",
            WeightFunction::Bisquare => "Bisquare",
            WeightFunction::Cauchy => "Cauchy",
            WeightFunction::Fair => "Fair",
            WeightFunction::Huber => "Huber",
            WeightFunction::Logistic => "Logistic",
            WeightFunction::Talwar => "Talwar",
            WeightFunction::Welsch => "Welsch",
        }
    }

    /// Default tuning constant (95% Gaussian efficiency).
    #[inline]
    pub const fn default_tuning(&self) -> f64 {
        match self {
            WeightFunction::Andrews => ANDREWS_TUNING,
            WeightFunction::Bisquare => BISQUARE_TUNING,
            WeightFunction::Cauchy => CAUCHY_TUNING,
            WeightFunction::Fair => FAIR_TUNING,
            WeightFunction::Huber => HUBER_TUNING,
            WeightFunction::Logistic => LOGISTIC_TUNING,
            WeightFunction::Talwar => TALWAR_TUNING,
            WeightFunction::Welsch => WELSCH_TUNING,
        }
    }

    /// Returns the half-width of the support for bounded functions.
    #[inline]
    pub fn support(&self) -> Option<f64> {
        match self {
            WeightFunction::Andrews => Some(PI),
            WeightFunction::Bisquare | WeightFunction::Talwar => Some(1.0),
            _ => None, // Unbounded
        }
    }

    /// Returns `true` if the function fully rejects gross outliers.
    #[inline]
    pub fn is_redescending(&self) -> bool {
        matches!(
            self,
            WeightFunction::Andrews
                | WeightFunction::Bisquare
                | WeightFunction::Talwar
                | WeightFunction::Welsch
        )
    }

    // ========================================================================
    // Weight Computation
    // ========================================================================

    /// Compute the robustness weight w(u) for a standardized residual.
    #[inline]
    pub fn weight<T: Float>(&self, u: T) -> T {
        let abs_u = u.abs();

        // Fast path for bounded functions: return 0 outside support.
        // Andrews' support is open (|u| < pi); Bisquare and Talwar include
        // the boundary (|u| <= 1), where Bisquare is 0 and Talwar is 1.
        if let Some(half_width) = self.support() {
            let bound = T::from(half_width).unwrap_or_else(T::one);
            let outside = match self {
                WeightFunction::Andrews => abs_u >= bound,
                _ => abs_u > bound,
            };
            if outside {
                return T::zero();
            }
        }

        let small = T::from(SMALL_U).unwrap_or_else(T::epsilon);

        match self {
            WeightFunction::Andrews => {
                if abs_u < small {
                    T::one()
                } else {
                    abs_u.sin() / abs_u
                }
            }

            WeightFunction::Bisquare => {
                let tmp = T::one() - abs_u * abs_u;
                tmp * tmp
            }

            WeightFunction::Cauchy => T::one() / (T::one() + abs_u * abs_u),

            WeightFunction::Fair => T::one() / (T::one() + abs_u),

            WeightFunction::Huber => {
                if abs_u <= T::one() {
                    T::one()
                } else {
                    T::one() / abs_u
                }
            }

            WeightFunction::Logistic => {
                if abs_u < small {
                    T::one()
                } else {
                    abs_u.tanh() / abs_u
                }
            }

            WeightFunction::Talwar => T::one(),

            WeightFunction::Welsch => (-(abs_u * abs_u)).exp(),
        }
    }
}

// ============================================================================
// Name Resolution
// ============================================================================

impl FromStr for WeightFunction {
    type Err = RobustFitError;

    /// Resolve a weight function from its lowercase name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "andrews" => Ok(WeightFunction::Andrews),
            "bisquare" => Ok(WeightFunction::Bisquare),
            "cauchy" => Ok(WeightFunction::Cauchy),
            "fair" => Ok(WeightFunction::Fair),
            "huber" => Ok(WeightFunction::Huber),
            "logistic" => Ok(WeightFunction::Logistic),
            "talwar" => Ok(WeightFunction::Talwar),
            "welsch" => Ok(WeightFunction::Welsch),
            _ => Err(RobustFitError::UnknownMethod {
                kind: "weight function",
                name: s.to_string(),
            }),
        }
    }
}
