//! # seasonal-forecast
//!
//! Short-horizon time series forecasting with Holt-Winters triple
//! exponential smoothing (additive level and trend, multiplicative
//! seasonality), plus a small HTTP service that forecasts posted histories
//! and remembers the latest result.
//!
//! ```
//! use seasonal_forecast::models::exponential::{smooth, SmoothingParams};
//!
//! let history = [10.0, 20.0, 30.0, 40.0, 12.0, 22.0, 32.0, 42.0];
//! let state = smooth(&history, &SmoothingParams::default()).unwrap();
//! let forecast = state.forecast(2).unwrap();
//! assert_eq!(forecast.len(), 2);
//! ```

#![allow(clippy::needless_range_loop)]

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod service;
pub mod utils;

pub use error::{ForecastError, Result};

pub mod prelude {
    pub use crate::core::{Forecast, Observation, TimeSeries};
    pub use crate::error::{ForecastError, Result};
    pub use crate::models::exponential::{
        forecast, smooth, HoltWinters, ParamOverrides, SeasonalIndices, SmoothedSeries,
        SmoothingParams,
    };
    pub use crate::models::Forecaster;
}
