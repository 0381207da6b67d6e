use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ApiError;
use super::AppState;
use crate::classifier::{ModelMetadata, FEATURE_NAMES, NUM_FEATURES};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/model_info", get(model_info))
        .route("/predict", post(predict))
        .route("/predict_batch", post(predict_batch))
}

/// The four Iris measurements, in centimeters.
///
/// All four fields must be present and finite; no range validation beyond
/// that is performed, so out-of-range values pass through to the model.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IrisFeatures {
    pub sepal_length: f64,
    pub sepal_width: f64,
    pub petal_length: f64,
    pub petal_width: f64,
}

impl IrisFeatures {
    pub fn as_array(&self) -> [f64; NUM_FEATURES] {
        [
            self.sepal_length,
            self.sepal_width,
            self.petal_length,
            self.petal_width,
        ]
    }

    fn ensure_finite(&self) -> Result<(), ApiError> {
        for (name, value) in FEATURE_NAMES.iter().zip(self.as_array()) {
            if !value.is_finite() {
                return Err(ApiError::unprocessable(format!(
                    "field `{}` must be a finite number",
                    name
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model_loaded: bool,
}

#[derive(Debug, Serialize)]
pub struct ModelInfoResponse {
    #[serde(flatten)]
    pub model: ModelMetadata,
    pub artifact_fingerprint: String,
}

#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub prediction: String,
    pub probability: f64,
    pub features: IrisFeatures,
}

/// Decodes one request body into a validated feature vector. Single
/// validation pass at the boundary; serde reports the offending field on
/// missing or non-numeric input.
fn parse_features(value: Value) -> Result<IrisFeatures, ApiError> {
    let features: IrisFeatures =
        serde_json::from_value(value).map_err(|e| ApiError::unprocessable(e.to_string()))?;
    features.ensure_finite()?;
    Ok(features)
}

fn body_value(payload: Result<Json<Value>, JsonRejection>) -> Result<Value, ApiError> {
    let Json(value) = payload.map_err(|e| ApiError::unprocessable(e.body_text()))?;
    Ok(value)
}

pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Service liveness, independent of model readiness. Always 200.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let loaded = state.model_loaded();
    Json(HealthResponse {
        status: if loaded { "healthy" } else { "unhealthy" },
        model_loaded: loaded,
    })
}

pub async fn model_info(
    State(state): State<AppState>,
) -> Result<Json<ModelInfoResponse>, ApiError> {
    state.forest()?;
    let fingerprint = state
        .fingerprint()
        .ok_or_else(|| ApiError::service_unavailable("model not loaded"))?;
    Ok(Json(ModelInfoResponse {
        model: state.metadata().clone(),
        artifact_fingerprint: fingerprint.to_string(),
    }))
}

pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let features = parse_features(body_value(payload)?)?;
    let forest = state.forest()?;

    let (prediction, probability) = forest.predict(&features.as_array())?;
    log::info!(
        "Prediction made: {} (confidence: {:.4})",
        prediction,
        probability
    );

    Ok(Json(PredictionResponse {
        prediction,
        probability,
        features,
    }))
}

/// Applies `predict` to each element in order. Validation is fail-fast: any
/// malformed element rejects the whole batch before inference runs.
pub async fn predict_batch(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Vec<PredictionResponse>>, ApiError> {
    let value = body_value(payload)?;
    let items = match value {
        Value::Array(items) => items,
        _ => return Err(ApiError::unprocessable("request body must be a JSON array")),
    };
    if items.is_empty() {
        return Err(ApiError::unprocessable("batch must not be empty"));
    }

    let mut batch = Vec::with_capacity(items.len());
    for (i, item) in items.into_iter().enumerate() {
        let features = parse_features(item)
            .map_err(|e| ApiError::unprocessable(format!("item {}: {}", i, e.message())))?;
        batch.push(features);
    }

    let forest = state.forest()?;
    let mut results = Vec::with_capacity(batch.len());
    for features in batch {
        let (prediction, probability) = forest.predict(&features.as_array())?;
        results.push(PredictionResponse {
            prediction,
            probability,
            features,
        });
    }

    log::info!("Batch prediction completed: {} samples", results.len());
    Ok(Json(results))
}
