//! # robustfit: Robust line fitting and outlier detection for Rust
//!
//! Fits a straight line to noisy bivariate data with **Iteratively
//! Reweighted Least Squares (IRLS)** and splits the observations into
//! inliers and outliers.
//!
//! ## What is robust regression?
//!
//! Ordinary least squares minimizes squared error, so a single anomalous
//! point can drag the fitted line arbitrarily far from the bulk of the
//! data. Robust regression replaces the squared loss with a bounded
//! M-estimator loss, implemented here by iterative reweighting: each pass
//! fits a weighted line, standardizes the residuals with a MAD-based scale
//! and the hat-matrix leverage, and downweights points with large
//! standardized residuals before the next pass.
//!
//! Eight interchangeable weight functions are provided (Andrews, Bisquare,
//! Cauchy, Fair, Huber, Logistic, Talwar, Welsch), together with two
//! outlier-detection policies: by standardized residual or by converged
//! weight.
//!
//! ## Quick Start
//!
//! ```rust
//! use robustfit::prelude::*;
//!
//! // Five clean points on y = 2x plus one severe outlier.
//! let x: Vec<f64> = vec![1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
//! let y = vec![2.0, 4.0, 6.0, 8.0, 10.0, 11.0];
//!
//! let model = RobustFit::new()
//!     .weight_function(Bisquare)
//!     .build()?;
//!
//! let result = model.fit(&x, &y)?;
//!
//! assert!((result.slope - 2.0).abs() < 1e-6);
//! assert!(result.intercept.abs() < 1e-6);
//! # Result::<(), RobustFitError>::Ok(())
//! ```
//!
//! ### Outlier Detection
//!
//! ```rust
//! use robustfit::prelude::*;
//!
//! let x = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
//! let y = vec![2.1, 3.9, 6.0, 8.1, 30.0, 12.1];
//!
//! let model = RobustFit::new()
//!     .weight_function(Huber)
//!     .detect_outliers(StandardizedResidual)
//!     .build()?;
//!
//! let result = model.fit(&x, &y)?;
//! let partition = result.outliers.as_ref().unwrap();
//!
//! assert_eq!(partition.num_outliers() + partition.num_inliers(), x.len());
//! # Result::<(), RobustFitError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! `fit` returns `Result<FitResult<T>, RobustFitError>`. Invalid inputs (mismatched
//! lengths, too few points, non-finite values) and degenerate inputs
//! (a constant predictor, a collapsed weighted system, a zero residual
//! scale) are surfaced as typed errors. Non-convergence within the
//! iteration cap is **not** an error: the result carries
//! `converged: false` and `iterations == max_iterations` so the caller
//! can decide whether to trust the estimate.
//!
//! ```rust
//! use robustfit::prelude::*;
//!
//! let x = vec![3.0, 3.0, 3.0];
//! let y = vec![1.0, 2.0, 3.0];
//!
//! let model = RobustFit::new().build()?;
//! match model.fit(&x, &y) {
//!     Ok(result) => println!("slope = {}", result.slope),
//!     Err(RobustFitError::ConstantPredictor) => {
//!         // flat x: no line is defined
//!     }
//!     Err(e) => eprintln!("fit failed: {}", e),
//! }
//! # Result::<(), RobustFitError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments; disable default features to
//! drop the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! robustfit = { version = "0.1", default-features = false }
//! ```
//!
//! ## References
//!
//! - Holland, P. W. & Welsch, R. E. (1977). "Robust regression using
//!   iteratively reweighted least-squares"
//! - Huber, P. J. (1981). "Robust Statistics"

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - shared error types.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - least-squares fitting.
mod algorithms;

// Layer 4: Evaluation - outlier classification and diagnostics.
mod evaluation;

// Layer 5: Engine - IRLS orchestration and validation.
mod engine;

// High-level fluent API for robust fitting.
mod api;

// Standard robustfit prelude.
pub mod prelude {
    pub use crate::api::{
        DetectionMethod::ByWeight,
        DetectionMethod::StandardizedResidual,
        FitDiagnostics, FitResult, OutlierPartition,
        RobustFitBuilder as RobustFit, RobustFitError,
        WeightFunction::Andrews,
        WeightFunction::Bisquare,
        WeightFunction::Cauchy,
        WeightFunction::Fair,
        WeightFunction::Huber,
        WeightFunction::Logistic,
        WeightFunction::Talwar,
        WeightFunction::Welsch,
    };
    pub use crate::api::{DetectionMethod, WeightFunction};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
