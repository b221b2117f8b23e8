//! Layer 3: Algorithms
//!
//! This layer implements the core logic for weighted least squares and the
//! robustness weight update. It contains the "business logic" of the fit
//! but is orchestrated by the engine layer.

// Ordinary and weighted least squares for the straight-line model.
pub mod regression;

// Robustness weight updates for outlier downweighting.
pub mod robustness;
