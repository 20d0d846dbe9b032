//! Request extractors whose rejections use the [`AppError`] envelope.
//!
//! Axum's stock `Json` and `Path` reject with plain-text bodies and, for JSON,
//! with 415/422 statuses; these wrappers report every malformed input as 400.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::http::StatusCode;
use casting_core::types::DbId;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON request body. An empty body, invalid JSON, or a payload of the wrong
/// shape is a 400; a body over the size limit is a 413. The `Content-Type`
/// header is not inspected.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| match rejection.status() {
                StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge,
                _ => AppError::BadRequest("request body could not be read".to_string()),
            })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(AppError::BadRequest("request body is empty".to_string()));
        }

        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|e| AppError::BadRequest(format!("invalid request body: {e}")))
    }
}

/// The `{id}` path segment of a record route.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub DbId);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::BadRequest("id must be an integer".to_string()))?;
        Ok(IdPath(id))
    }
}
