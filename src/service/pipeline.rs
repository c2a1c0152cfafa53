//! Request → forecast pipeline.

use crate::config::ServiceSettings;
use crate::core::TimeSeries;
use crate::error::{ForecastError, Result};
use crate::models::exponential::{HoltWinters, SmoothingParams};
use crate::models::Forecaster;
use crate::service::wire::{parse_overrides, PredictRequest, Prediction};
use chrono::{DateTime, Utc};

/// Run one prediction request end to end.
///
/// `now` becomes the prediction's own timestamp.
pub fn run_prediction(
    request: &PredictRequest,
    settings: &ServiceSettings,
    now: DateTime<Utc>,
) -> Result<Prediction> {
    if request.data.is_empty() {
        return Err(ForecastError::EmptyData);
    }
    if settings.horizon < 1 {
        return Err(ForecastError::InvalidParameter(
            "horizon must be at least 1".to_string(),
        ));
    }

    let overrides = parse_overrides(request.params.as_deref().unwrap_or_default())?;
    let params = overrides.resolve(&SmoothingParams::default());
    tracing::debug!(
        alpha = params.alpha,
        beta = params.beta,
        gamma = params.gamma,
        season_length = params.season_length,
        "resolved smoothing parameters"
    );

    let history = TimeSeries::from_observations(&request.data)?;
    let mut model = HoltWinters::new(params);
    model.fit(&history)?;
    let forecast = model.predict_timestamped(settings.horizon, settings.stride)?;

    Ok(Prediction {
        timestamp: now,
        params: request.params.clone(),
        data: forecast.to_observations()?,
    })
}
