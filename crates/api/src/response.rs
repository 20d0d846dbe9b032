//! Success envelope shared by every JSON handler.
//!
//! Successful responses always carry `success: true` and the numeric
//! `status`, with the payload's fields flattened alongside them.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// `{ "success": true, "status": <code>, ...payload }` response envelope.
///
/// ```ignore
/// Ok(Envelope::ok(MovieList { total_movies: movies.len(), movies }))
/// ```
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    pub status: u16,
    #[serde(flatten)]
    pub payload: T,
}

impl<T: Serialize> Envelope<T> {
    /// Wrap `payload` in a 200 OK envelope.
    pub fn ok(payload: T) -> Self {
        Self {
            success: true,
            status: StatusCode::OK.as_u16(),
            payload,
        }
    }

    /// Wrap `payload` with an explicit status. `success` follows the status
    /// class.
    pub fn with_status(status: StatusCode, payload: T) -> Self {
        Self {
            success: status.is_success(),
            status: status.as_u16(),
            payload,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}
