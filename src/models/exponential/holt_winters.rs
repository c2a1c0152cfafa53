//! Holt-Winters forecasting model.
//!
//! Also known as triple exponential smoothing: additive level and trend
//! with multiplicative seasonality.
//!
//! The first `m` observations form the warm-up window. They seed the
//! seasonal factors and are passed through unsmoothed. From period `m`
//! onwards the usual recurrence runs:
//!
//! - Level: `l_t = α(y_t / s_{t mod m}) + (1-α)(l_{t-1} + b_{t-1})`
//! - Trend: `b_t = β(l_t - l_{t-1}) + (1-β)b_{t-1}`
//! - Seasonal: `s_{t mod m} = γ(y_t / l_t) + (1-γ)s_{t mod m}`
//! - Smoothed: `ŷ_t = (l_t + b_t) * s_{t mod m}`
//!
//! Forecasts extrapolate from the last *smoothed* value rather than the
//! last level: `ŷ_{n+h} = (ŷ_n + h*b_n) * s_{(n+h-1) mod m}`.

use crate::core::{Forecast, TimeSeries};
use crate::error::{ForecastError, Result};
use crate::models::exponential::SmoothingParams;
use crate::models::Forecaster;
use crate::utils::{first_non_finite, mean};
use chrono::{DateTime, Duration, Utc};

/// Multiplicative seasonal factors, one per slot `0..m`.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalIndices(Vec<f64>);

impl SeasonalIndices {
    /// Wrap an explicit table of factors.
    pub fn from_factors(factors: Vec<f64>) -> Self {
        Self(factors)
    }

    /// Number of slots (the season length).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Factor stored in `slot`, if the slot exists.
    pub fn get(&self, slot: usize) -> Option<f64> {
        self.0.get(slot).copied()
    }

    /// Factor applying to absolute period index `period`.
    pub fn factor_for(&self, period: usize) -> Option<f64> {
        if self.0.is_empty() {
            return None;
        }
        self.get(period % self.0.len())
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

/// Output of the smoothing pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothedSeries {
    /// One smoothed value per input period.
    pub smoothed: Vec<f64>,
    /// Per-period trend; zero throughout the warm-up window.
    pub trend: Vec<f64>,
    /// Seasonal table after the last update.
    pub seasonals: SeasonalIndices,
}

impl SmoothedSeries {
    pub fn len(&self) -> usize {
        self.smoothed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.smoothed.is_empty()
    }

    /// Baseline used for extrapolation (the last smoothed value).
    pub fn last_level(&self) -> Option<f64> {
        self.smoothed.last().copied()
    }

    pub fn last_trend(&self) -> Option<f64> {
        self.trend.last().copied()
    }

    /// Project `horizon` future periods from this state.
    pub fn forecast(&self, horizon: usize) -> Result<Vec<f64>> {
        forecast(
            &self.smoothed,
            &self.seasonals,
            &self.trend,
            self.seasonals.len(),
            horizon,
        )
    }
}

/// Run the smoothing recurrence over `history`.
///
/// Fails with [`ForecastError::InsufficientData`] unless the history holds
/// more than `season_length` observations, and with
/// [`ForecastError::DegenerateSeries`] whenever a division in the recurrence
/// would be by zero.
pub fn smooth(history: &[f64], params: &SmoothingParams) -> Result<SmoothedSeries> {
    params.validate()?;
    let m = params.season_length;
    let SmoothingParams {
        alpha, beta, gamma, ..
    } = *params;

    if history.len() <= m {
        return Err(ForecastError::InsufficientData {
            needed: m + 1,
            got: history.len(),
        });
    }
    if let Some(idx) = first_non_finite(history) {
        return Err(ForecastError::InvalidParameter(format!(
            "history value at index {idx} is not finite"
        )));
    }

    // Seasonal factors: ratio of each warm-up sample to the warm-up mean
    let warm_up_mean = mean(&history[..m]);
    if warm_up_mean == 0.0 {
        return Err(ForecastError::DegenerateSeries(
            "mean of the warm-up window is zero".to_string(),
        ));
    }
    let mut seasonals: Vec<f64> = history[..m].iter().map(|y| y / warm_up_mean).collect();

    // Slot 0 deseasonalizes the sample at index m
    if seasonals[0] == 0.0 {
        return Err(ForecastError::DegenerateSeries(
            "initial seasonal factor for slot 0 is zero".to_string(),
        ));
    }
    let mut level = history[m] / seasonals[0];
    let mut trend = (history[m] - history[0]) / m as f64;

    let mut smoothed = Vec::with_capacity(history.len());
    let mut trend_out = Vec::with_capacity(history.len());

    for (i, &y) in history.iter().enumerate() {
        if i < m {
            smoothed.push(y);
            trend_out.push(0.0);
            continue;
        }

        let slot = i % m;
        let s = seasonals[slot];
        if s == 0.0 {
            return Err(ForecastError::DegenerateSeries(format!(
                "seasonal factor for slot {slot} is zero at period {i}"
            )));
        }

        let new_level = alpha * (y / s) + (1.0 - alpha) * (level + trend);
        if new_level == 0.0 {
            return Err(ForecastError::DegenerateSeries(format!(
                "level collapsed to zero at period {i}"
            )));
        }
        let new_trend = beta * (new_level - level) + (1.0 - beta) * trend;
        seasonals[slot] = gamma * (y / new_level) + (1.0 - gamma) * s;

        let value = (new_level + new_trend) * seasonals[slot];
        if !value.is_finite() {
            return Err(ForecastError::DegenerateSeries(format!(
                "smoothed value is not finite at period {i}"
            )));
        }

        smoothed.push(value);
        trend_out.push(new_trend);
        level = new_level;
        trend = new_trend;
    }

    Ok(SmoothedSeries {
        smoothed,
        trend: trend_out,
        seasonals: SeasonalIndices(seasonals),
    })
}

/// Extrapolate `horizon` periods past the end of a smoothed series.
///
/// The season slot for step `k` (1-based) is `(len + k - 1) % season_length`,
/// continuing the cycle right after the last historical period.
pub fn forecast(
    smoothed: &[f64],
    seasonals: &SeasonalIndices,
    trend: &[f64],
    season_length: usize,
    horizon: usize,
) -> Result<Vec<f64>> {
    if season_length < 1 {
        return Err(ForecastError::InvalidParameter(
            "season length must be at least 1".to_string(),
        ));
    }
    if horizon < 1 {
        return Err(ForecastError::InvalidParameter(
            "horizon must be at least 1".to_string(),
        ));
    }
    if smoothed.is_empty() {
        return Err(ForecastError::EmptyData);
    }
    if trend.len() != smoothed.len() {
        return Err(ForecastError::DimensionMismatch {
            expected: smoothed.len(),
            got: trend.len(),
        });
    }
    if seasonals.len() != season_length {
        return Err(ForecastError::DimensionMismatch {
            expected: season_length,
            got: seasonals.len(),
        });
    }

    let n = smoothed.len();
    let last_level = smoothed[n - 1];
    let last_trend = trend[n - 1];

    (1..=horizon)
        .map(|k| {
            let s = seasonals.0[(n + k - 1) % season_length];
            let value = (last_level + k as f64 * last_trend) * s;
            if value.is_finite() {
                Ok(value)
            } else {
                Err(ForecastError::DegenerateSeries(format!(
                    "forecast step {k} is not finite"
                )))
            }
        })
        .collect()
}

/// Holt-Winters forecaster with fixed smoothing weights.
#[derive(Debug, Clone, Default)]
pub struct HoltWinters {
    params: SmoothingParams,
    /// State from the last successful fit.
    state: Option<SmoothedSeries>,
    /// Residuals (actual - smoothed).
    residuals: Option<Vec<f64>>,
    /// Timestamp of the last fitted observation.
    last_timestamp: Option<DateTime<Utc>>,
}

impl HoltWinters {
    /// Create a new Holt-Winters model with fixed parameters.
    pub fn new(params: SmoothingParams) -> Self {
        Self {
            params,
            state: None,
            residuals: None,
            last_timestamp: None,
        }
    }

    /// Get the smoothing parameters.
    pub fn params(&self) -> &SmoothingParams {
        &self.params
    }

    /// Get the seasonal period.
    pub fn seasonal_period(&self) -> usize {
        self.params.season_length
    }

    /// Get the per-period trend of the fitted history.
    pub fn trend(&self) -> Option<&[f64]> {
        self.state.as_ref().map(|s| s.trend.as_slice())
    }

    /// Get the seasonal indices.
    pub fn seasonals(&self) -> Option<&SeasonalIndices> {
        self.state.as_ref().map(|s| &s.seasonals)
    }

    /// Get the full smoothing state.
    pub fn state(&self) -> Option<&SmoothedSeries> {
        self.state.as_ref()
    }

    /// Predict and stamp each step `stride` after the previous one,
    /// starting from the last fitted timestamp.
    pub fn predict_timestamped(&self, horizon: usize, stride: Duration) -> Result<Forecast> {
        let last = self.last_timestamp.ok_or(ForecastError::FitRequired)?;
        self.predict(horizon)?.with_stride(last, stride)
    }
}

impl Forecaster for HoltWinters {
    fn fit(&mut self, series: &TimeSeries) -> Result<()> {
        let values = series.values();
        let state = smooth(values, &self.params)?;

        let residuals = values
            .iter()
            .zip(&state.smoothed)
            .map(|(y, f)| y - f)
            .collect();

        self.state = Some(state);
        self.residuals = Some(residuals);
        self.last_timestamp = series.last_timestamp();
        Ok(())
    }

    fn predict(&self, horizon: usize) -> Result<Forecast> {
        let state = self.state.as_ref().ok_or(ForecastError::FitRequired)?;
        Ok(Forecast::from_values(state.forecast(horizon)?))
    }

    fn fitted_values(&self) -> Option<&[f64]> {
        self.state.as_ref().map(|s| s.smoothed.as_slice())
    }

    fn residuals(&self) -> Option<&[f64]> {
        self.residuals.as_deref()
    }

    fn name(&self) -> &str {
        "HoltWinters(multiplicative)"
    }
}
