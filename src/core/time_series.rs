//! TimeSeries data structure for representing the forecast history.

use crate::core::Observation;
use crate::error::{ForecastError, Result};
use chrono::{DateTime, Utc};

/// A univariate time series with non-decreasing timestamps.
#[derive(Debug, Clone)]
pub struct TimeSeries {
    timestamps: Vec<DateTime<Utc>>,
    values: Vec<f64>,
}

impl TimeSeries {
    /// Create a simple univariate time series.
    pub fn univariate(timestamps: Vec<DateTime<Utc>>, values: Vec<f64>) -> Result<Self> {
        if values.len() != timestamps.len() {
            return Err(ForecastError::DimensionMismatch {
                expected: timestamps.len(),
                got: values.len(),
            });
        }

        // Repeated timestamps are allowed, going back in time is not
        for i in 1..timestamps.len() {
            if timestamps[i] < timestamps[i - 1] {
                return Err(ForecastError::TimestampError(
                    "timestamps must not decrease".to_string(),
                ));
            }
        }

        Ok(Self { timestamps, values })
    }

    /// Build a series from `{timestamp, value}` records, keeping their order.
    pub fn from_observations(observations: &[Observation]) -> Result<Self> {
        let (timestamps, values): (Vec<_>, Vec<_>) = observations
            .iter()
            .map(|obs| (obs.timestamp, obs.value))
            .unzip();
        Self::univariate(timestamps, values)
    }

    /// Get the number of observations.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Check if the series is empty.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Get timestamps.
    pub fn timestamps(&self) -> &[DateTime<Utc>] {
        &self.timestamps
    }

    /// Get observed values in chronological order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Timestamp of the most recent observation.
    pub fn last_timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamps.last().copied()
    }
}
