use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// A request-boundary error carrying the HTTP status and a stable public
/// code. Every failure is converted into a structured JSON response here;
/// nothing crashes the process on a per-request basis.
#[derive(Debug, Clone)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, code: &'static str, message: String) -> Self {
        Self {
            status,
            code,
            message,
        }
    }

    /// Malformed, missing or non-finite input fields. Never retried.
    pub fn unprocessable(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        log::warn!("Validation error: {}", msg);
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR", msg)
    }

    /// The model handle is unset; the caller is expected to retry later.
    pub fn service_unavailable(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        log::warn!("Service unavailable: {}", msg);
        Self::new(StatusCode::SERVICE_UNAVAILABLE, "MODEL_UNAVAILABLE", msg)
    }

    /// Unexpected failure during the classifier call itself.
    pub fn internal(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        log::error!("Internal error: {}", msg);
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorEnvelope<'a> {
            error: ErrorBody<'a>,
        }

        #[derive(Serialize)]
        struct ErrorBody<'a> {
            code: &'a str,
            message: &'a str,
        }

        (
            self.status,
            Json(ErrorEnvelope {
                error: ErrorBody {
                    code: self.code,
                    message: &self.message,
                },
            }),
        )
            .into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.code)
    }
}

impl std::error::Error for ApiError {}

impl From<crate::classifier::ModelError> for ApiError {
    fn from(err: crate::classifier::ModelError) -> Self {
        Self::internal(format!("inference failed: {}", err))
    }
}
