use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;

use crate::classifier::{Artifact, Forest, ModelMetadata};

pub mod error;
pub mod routes;

pub use error::ApiError;

/// Shared state injected into every request handler.
///
/// The artifact is set once at startup and never mutated afterwards, so
/// handlers read it without locking. `None` means the loader failed; the
/// service keeps running and prediction endpoints answer 503.
#[derive(Clone)]
pub struct AppState {
    artifact: Option<Arc<Artifact>>,
    metadata: ModelMetadata,
}

impl AppState {
    pub fn new(artifact: Option<Artifact>) -> Self {
        Self {
            artifact: artifact.map(Arc::new),
            metadata: ModelMetadata::baked_in(),
        }
    }

    pub fn model_loaded(&self) -> bool {
        self.artifact.is_some()
    }

    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    pub fn fingerprint(&self) -> Option<&str> {
        self.artifact.as_deref().map(|a| a.fingerprint.as_str())
    }

    /// Returns the forest, or the 503 the caller should surface.
    pub fn forest(&self) -> Result<&Forest, ApiError> {
        self.artifact
            .as_deref()
            .map(|a| &a.forest)
            .ok_or_else(|| ApiError::service_unavailable("model not loaded"))
    }
}

/// Builds the full HTTP surface over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(routes::routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
