//! Request extractors that reject with the service's own status codes
//! instead of axum's defaults.

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde_json::{Map, Value};

use crate::errors::JsonApiError;

/// `:id` path segment parsed as an integer; anything else is a 400.
#[derive(Debug, Clone, Copy)]
pub struct EmployeeId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for EmployeeId
where
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(JsonApiError::invalid_id)?;
        raw.parse::<i64>().map(EmployeeId).map_err(JsonApiError::invalid_id)
    }
}

/// Request body that must be a JSON object. An empty body, unparseable
/// JSON, `null`, or any other JSON value is a 415 "invalid payload".
/// No Content-Type is required.
#[derive(Debug, Clone)]
pub struct JsonObject(pub Map<String, Value>);

#[async_trait]
impl<S> FromRequest<S> for JsonObject
where
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| JsonApiError::invalid_payload())?;
        parse_object(&bytes).map(JsonObject).ok_or_else(JsonApiError::invalid_payload)
    }
}

fn parse_object(bytes: &[u8]) -> Option<Map<String, Value>> {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}
