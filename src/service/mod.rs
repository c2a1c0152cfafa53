//! HTTP prediction service.
//!
//! `POST /predict` fits the Holt-Winters model to the posted history and
//! returns a timestamped forecast. `GET /prediction` returns the most recent
//! successful result, or `{}` before the first one.

mod error;
mod pipeline;
mod routes;
mod store;
mod wire;

pub use error::ApiError;
pub use pipeline::run_prediction;
pub use routes::{router, AppState};
pub use store::PredictionStore;
pub use wire::{parse_overrides, NamedParam, PredictRequest, Prediction};
