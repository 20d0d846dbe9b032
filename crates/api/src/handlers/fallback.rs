//! Public landing page and the JSON fallbacks for unmatched requests.

use axum::http::Uri;

use crate::error::AppError;

/// GET /
pub async fn home() -> &'static str {
    "Welcome to the Casting Agency app"
}

/// Any path without a route.
pub async fn not_found(uri: Uri) -> AppError {
    tracing::debug!(path = %uri.path(), "No route for path");
    AppError::NotFound("resource not found".to_string())
}

/// A known path requested with an unsupported method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
