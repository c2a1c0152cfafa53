//! Core data structures for time series forecasting.

mod forecast;
mod observation;
mod time_series;

pub use forecast::Forecast;
pub use observation::{parse_timestamp, Observation};
pub use time_series::TimeSeries;
