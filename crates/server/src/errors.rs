use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

/// Which endpoint produced a `ServiceError`; each one maps failures differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    List,
    Get,
    Update,
    Delete,
}

impl Operation {
    pub fn status_for(self, err: &ServiceError) -> StatusCode {
        use Operation::*;
        use ServiceError::*;
        match (self, err) {
            (Create | Update, InvalidInput(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            (Create | Update, NotFound(_)) => StatusCode::NOT_FOUND,
            (Create | Update, Backend(_)) => StatusCode::CONFLICT,
            (Get, NotFound(_)) => StatusCode::NOT_FOUND,
            (Get, InvalidInput(_)) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            (Get, Backend(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            (Delete, NotFound(_)) => StatusCode::NOT_FOUND,
            (Delete, _) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            (List, _) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        }
    }
}

/// JSON error body: `{"error": <reason phrase>, "message": <detail>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn invalid_payload() -> Self {
        Self::new(StatusCode::UNSUPPORTED_MEDIA_TYPE, "invalid payload")
    }

    pub fn invalid_id(cause: impl std::fmt::Display) -> Self {
        Self::new(StatusCode::BAD_REQUEST, format!("invalid id: {cause}"))
    }

    /// Translate a store failure for `op`, logging backend failures once here.
    pub fn from_service(op: Operation, err: ServiceError) -> Self {
        let status = op.status_for(&err);
        match &err {
            ServiceError::Backend(_) => error!(?op, %status, err = %err, "employee operation failed"),
            _ => warn!(?op, %status, err = %err, "employee request rejected"),
        }
        Self::new(status, err.to_string())
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let reason = self.status.canonical_reason().unwrap_or("Error");
        (self.status, Json(serde_json::json!({"error": reason, "message": self.message}))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("schema migration failed: {0}")]
    Migration(String),
    #[error("cannot bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
