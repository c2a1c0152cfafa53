//! API route handlers.

use crate::config::ServiceSettings;
use crate::service::error::ApiError;
use crate::service::pipeline::run_prediction;
use crate::service::store::PredictionStore;
use crate::service::wire::{PredictRequest, Prediction};
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;

/// Application state shared across handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    store: PredictionStore,
    settings: ServiceSettings,
}

impl AppState {
    pub fn new(settings: ServiceSettings) -> Self {
        Self {
            store: PredictionStore::new(),
            settings,
        }
    }

    pub fn store(&self) -> &PredictionStore {
        &self.store
    }

    pub fn settings(&self) -> &ServiceSettings {
        &self.settings
    }
}

/// Build the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(liveness))
        .route("/predict", post(predict))
        .route("/prediction", get(latest_prediction))
        .with_state(state)
}

async fn liveness() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn predict(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<Prediction>, ApiError> {
    let prediction = run_prediction(&request, &state.settings, Utc::now())?;
    tracing::info!(
        history = request.data.len(),
        horizon = prediction.data.len(),
        "computed prediction"
    );
    state.store.replace(prediction.clone()).await;
    Ok(Json(prediction))
}

async fn latest_prediction(State(state): State<AppState>) -> Response {
    match state.store.latest().await {
        Some(prediction) => Json(prediction).into_response(),
        None => Json(serde_json::json!({})).into_response(),
    }
}
