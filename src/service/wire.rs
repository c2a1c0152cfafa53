//! JSON request and response bodies.

use crate::core::Observation;
use crate::error::{ForecastError, Result};
use crate::models::exponential::ParamOverrides;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A `{name, value}` pair as sent by clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedParam {
    pub name: String,
    pub value: f64,
}

impl NamedParam {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Body of `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    /// History in chronological order.
    pub data: Vec<Observation>,
    /// Optional overrides for `alpha`, `beta`, `gamma` and `seasonLength`.
    #[serde(default)]
    pub params: Option<Vec<NamedParam>>,
}

/// A computed forecast as returned to clients and kept as "last result".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// When the forecast was computed.
    pub timestamp: DateTime<Utc>,
    /// Parameters exactly as the client supplied them; omitted when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<NamedParam>>,
    /// Forecast periods with their projected timestamps.
    pub data: Vec<Observation>,
}

/// Collect recognised parameters into overrides.
///
/// The first occurrence of a name wins and unknown names are skipped.
/// `seasonLength` must be a non-negative whole number.
pub fn parse_overrides(params: &[NamedParam]) -> Result<ParamOverrides> {
    let mut overrides = ParamOverrides::default();
    for param in params {
        match param.name.as_str() {
            "alpha" if overrides.alpha.is_none() => overrides.alpha = Some(param.value),
            "beta" if overrides.beta.is_none() => overrides.beta = Some(param.value),
            "gamma" if overrides.gamma.is_none() => overrides.gamma = Some(param.value),
            "seasonLength" if overrides.season_length.is_none() => {
                overrides.season_length = Some(season_length_from(param.value)?);
            }
            "alpha" | "beta" | "gamma" | "seasonLength" => {}
            other => tracing::debug!(param = other, "ignoring unknown parameter"),
        }
    }
    Ok(overrides)
}

fn season_length_from(value: f64) -> Result<usize> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > u32::MAX as f64 {
        return Err(ForecastError::InvalidParameter(format!(
            "seasonLength must be a whole number, got {value}"
        )));
    }
    Ok(value as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_params_are_optional() {
        let request: PredictRequest =
            serde_json::from_str(r#"{"data":[{"timestamp":"2024-01-01","value":3}]}"#).unwrap();
        assert_eq!(request.data.len(), 1);
        assert!(request.params.is_none());
    }

    #[test]
    fn prediction_omits_absent_params() {
        let prediction = Prediction {
            timestamp: DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            params: None,
            data: vec![],
        };
        let json = serde_json::to_value(&prediction).unwrap();
        assert!(json.get("params").is_none());

        let back: Prediction = serde_json::from_value(json).unwrap();
        assert_eq!(back, prediction);

        let with_params = Prediction {
            params: Some(vec![NamedParam::new("alpha", 0.3)]),
            ..prediction
        };
        let json = serde_json::to_value(&with_params).unwrap();
        assert_eq!(json["params"][0]["name"], "alpha");
    }

    #[test]
    fn parse_overrides_reads_known_names() {
        let params = vec![
            NamedParam::new("alpha", 0.2),
            NamedParam::new("beta", 0.0),
            NamedParam::new("seasonLength", 12.0),
        ];
        let overrides = parse_overrides(&params).unwrap();
        assert_eq!(overrides.alpha, Some(0.2));
        assert_eq!(overrides.beta, Some(0.0));
        assert_eq!(overrides.gamma, None);
        assert_eq!(overrides.season_length, Some(12));
    }

    #[test]
    fn parse_overrides_keeps_first_occurrence() {
        let params = vec![NamedParam::new("gamma", 0.1), NamedParam::new("gamma", 0.9)];
        assert_eq!(parse_overrides(&params).unwrap().gamma, Some(0.1));
    }

    #[test]
    fn parse_overrides_skips_unknown_names() {
        let params = vec![NamedParam::new("delta", 3.0)];
        assert_eq!(parse_overrides(&params).unwrap(), ParamOverrides::default());
    }

    #[test]
    fn fractional_or_negative_season_length_is_rejected() {
        for bad in [2.5, -4.0, f64::NAN] {
            let params = vec![NamedParam::new("seasonLength", bad)];
            assert!(matches!(
                parse_overrides(&params),
                Err(ForecastError::InvalidParameter(_))
            ));
        }
    }
}
