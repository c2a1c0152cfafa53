//! Smoothing parameters and their defaulting rules.

use crate::error::{ForecastError, Result};

/// Default level, trend and seasonal smoothing weight.
pub const DEFAULT_WEIGHT: f64 = 0.5;
/// Default number of periods per seasonal cycle.
pub const DEFAULT_SEASON_LENGTH: usize = 4;

/// Fully resolved parameters for one Holt-Winters run.
///
/// The weights are expected to lie in `[0, 1]` but are not clamped or
/// checked against that range: values outside it are accepted and may
/// produce oscillating or unbounded output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothingParams {
    /// Level smoothing weight.
    pub alpha: f64,
    /// Trend smoothing weight.
    pub beta: f64,
    /// Seasonal smoothing weight.
    pub gamma: f64,
    /// Periods per seasonal cycle (m).
    pub season_length: usize,
}

impl SmoothingParams {
    pub fn new(alpha: f64, beta: f64, gamma: f64, season_length: usize) -> Self {
        Self {
            alpha,
            beta,
            gamma,
            season_length,
        }
    }

    /// Reject a zero season length and non-finite weights.
    pub fn validate(&self) -> Result<()> {
        if self.season_length < 1 {
            return Err(ForecastError::InvalidParameter(
                "season length must be at least 1".to_string(),
            ));
        }
        for (name, weight) in [
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("gamma", self.gamma),
        ] {
            if !weight.is_finite() {
                return Err(ForecastError::InvalidParameter(format!(
                    "{name} must be a finite number, got {weight}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for SmoothingParams {
    fn default() -> Self {
        Self::new(
            DEFAULT_WEIGHT,
            DEFAULT_WEIGHT,
            DEFAULT_WEIGHT,
            DEFAULT_SEASON_LENGTH,
        )
    }
}

/// Partially specified parameters.
///
/// `None` means "not provided" and falls back to the default. An explicit
/// `Some(0.0)` is kept as a real value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParamOverrides {
    pub alpha: Option<f64>,
    pub beta: Option<f64>,
    pub gamma: Option<f64>,
    pub season_length: Option<usize>,
}

impl ParamOverrides {
    /// Fill every missing field from `defaults`.
    pub fn resolve(&self, defaults: &SmoothingParams) -> SmoothingParams {
        SmoothingParams {
            alpha: self.alpha.unwrap_or(defaults.alpha),
            beta: self.beta.unwrap_or(defaults.beta),
            gamma: self.gamma.unwrap_or(defaults.gamma),
            season_length: self.season_length.unwrap_or(defaults.season_length),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_service_contract() {
        let params = SmoothingParams::default();
        assert_eq!(params, SmoothingParams::new(0.5, 0.5, 0.5, 4));
        assert!(params.validate().is_ok());
    }

    #[test]
    fn weights_are_not_clamped() {
        let params = SmoothingParams::new(1.7, -0.2, 3.0, 2);
        assert_eq!(params.alpha, 1.7);
        assert_eq!(params.beta, -0.2);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_season_length() {
        let params = SmoothingParams::new(0.5, 0.5, 0.5, 0);
        assert!(matches!(
            params.validate(),
            Err(ForecastError::InvalidParameter(_))
        ));
    }

    #[test]
    fn validate_rejects_non_finite_weights() {
        let params = SmoothingParams::new(f64::NAN, 0.5, 0.5, 4);
        assert!(params.validate().is_err());
        let params = SmoothingParams::new(0.5, 0.5, f64::INFINITY, 4);
        assert!(params.validate().is_err());
    }

    #[test]
    fn explicit_zero_survives_resolution() {
        let overrides = ParamOverrides {
            beta: Some(0.0),
            ..Default::default()
        };
        let params = overrides.resolve(&SmoothingParams::default());
        assert_eq!(params.beta, 0.0);
        assert_eq!(params.alpha, DEFAULT_WEIGHT);
        assert_eq!(params.season_length, DEFAULT_SEASON_LENGTH);
    }

    #[test]
    fn empty_overrides_yield_defaults() {
        let defaults = SmoothingParams::new(0.1, 0.2, 0.3, 12);
        assert_eq!(ParamOverrides::default().resolve(&defaults), defaults);
    }
}
