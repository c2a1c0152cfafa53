//! Exponential smoothing models.
//!
//! This module provides Holt-Winters triple exponential smoothing with
//! additive level and trend and multiplicative seasonality, together with
//! the parameter set that drives it.

mod holt_winters;
mod params;

pub use holt_winters::{forecast, smooth, HoltWinters, SeasonalIndices, SmoothedSeries};
pub use params::{ParamOverrides, SmoothingParams, DEFAULT_SEASON_LENGTH, DEFAULT_WEIGHT};
