//! Utility functions for forecasting models.

pub mod stats;

pub use stats::{first_non_finite, mean};
