//! In-memory holder for the most recent prediction.

use crate::service::wire::Prediction;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Keeps only the latest successful prediction. Nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct PredictionStore {
    latest: Arc<RwLock<Option<Prediction>>>,
}

impl PredictionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the latest prediction, if one has been computed.
    pub async fn latest(&self) -> Option<Prediction> {
        self.latest.read().await.clone()
    }

    /// Replace the stored prediction.
    pub async fn replace(&self, prediction: Prediction) {
        *self.latest.write().await = Some(prediction);
    }
}
