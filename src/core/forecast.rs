//! Forecast result structure for holding predictions.

use crate::core::Observation;
use crate::error::{ForecastError, Result};
use chrono::{DateTime, Duration, Utc};

/// A forecast result containing point predictions and, once attached,
/// the timestamp of each projected period.
#[derive(Debug, Clone, Default)]
pub struct Forecast {
    /// Point predictions, one per future period.
    point: Vec<f64>,
    /// Timestamps aligned with `point` (optional)
    timestamps: Option<Vec<DateTime<Utc>>>,
}

impl Forecast {
    /// Create a forecast from point predictions.
    pub fn from_values(values: Vec<f64>) -> Self {
        Self {
            point: values,
            timestamps: None,
        }
    }

    /// Attach explicit timestamps, one per predicted period.
    pub fn with_timestamps(mut self, timestamps: Vec<DateTime<Utc>>) -> Result<Self> {
        if timestamps.len() != self.point.len() {
            return Err(ForecastError::DimensionMismatch {
                expected: self.point.len(),
                got: timestamps.len(),
            });
        }
        self.timestamps = Some(timestamps);
        Ok(self)
    }

    /// Attach timestamps `last + stride * k` for `k = 1..=horizon`.
    pub fn with_stride(self, last: DateTime<Utc>, stride: Duration) -> Result<Self> {
        if stride <= Duration::zero() {
            return Err(ForecastError::InvalidParameter(
                "timestamp stride must be positive".to_string(),
            ));
        }
        let timestamps = (1..=self.point.len())
            .map(|k| {
                i32::try_from(k)
                    .ok()
                    .and_then(|k| stride.checked_mul(k))
                    .and_then(|offset| last.checked_add_signed(offset))
                    .ok_or_else(|| {
                        ForecastError::TimestampError(format!(
                            "forecast period {k} overflows the calendar"
                        ))
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        self.with_timestamps(timestamps)
    }

    /// Get the forecast horizon (number of steps).
    pub fn horizon(&self) -> usize {
        self.point.len()
    }

    /// Check if forecast is empty.
    pub fn is_empty(&self) -> bool {
        self.point.is_empty()
    }

    /// Get the point predictions.
    pub fn primary(&self) -> &[f64] {
        &self.point
    }

    /// Get the attached timestamps, if any.
    pub fn timestamps(&self) -> Option<&[DateTime<Utc>]> {
        self.timestamps.as_deref()
    }

    /// Pair every prediction with its timestamp.
    pub fn to_observations(&self) -> Result<Vec<Observation>> {
        let timestamps = self.timestamps.as_ref().ok_or_else(|| {
            ForecastError::TimestampError("forecast has no timestamps attached".to_string())
        })?;
        Ok(timestamps
            .iter()
            .zip(&self.point)
            .map(|(&t, &v)| Observation::new(t, v))
            .collect())
    }
}
