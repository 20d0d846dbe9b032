use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use casting_core::error::CoreError;
use serde_json::json;

use crate::auth::error::AuthError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`AuthError`] for credential
/// failures, and adds HTTP-specific variants. Every variant renders the same
/// `{ "success": false, "error": <status>, "message": ... }` envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `casting_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A credential verifier rejection. Carries its own status code.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// A database error from sqlx on a read path.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No route matches the request path.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The route exists but not for this HTTP method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The request body exceeds the accepted size.
    #[error("Payload too large")]
    PayloadTooLarge,

    /// The request did not complete within the configured timeout.
    #[error("Request timed out")]
    RequestTimeout,

    /// A create, update or delete could not be carried out by the store.
    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

const INTERNAL_MESSAGE: &str = "internal server error";

impl AppError {
    /// Wrap a persistence failure from a mutating operation.
    ///
    /// The sqlx error is logged and replaced by a generic 422 message.
    pub fn unprocessable(err: sqlx::Error) -> Self {
        tracing::error!(error = %err, "Store rejected mutation");
        AppError::Unprocessable("unprocessable entity".to_string())
    }

    /// The HTTP status this error renders with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Core(CoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
            AppError::Core(CoreError::Validation(_)) => StatusCode::BAD_REQUEST,
            AppError::Auth(auth) => auth.status(),
            AppError::Database(sqlx::Error::RowNotFound) => StatusCode::NOT_FOUND,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The caller-facing message. Internal details are logged here and
    /// replaced with a generic message.
    fn public_message(&self) -> String {
        match self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                format!("{entity} with id {id} not found")
            }
            AppError::Core(CoreError::Validation(msg)) => msg.clone(),
            AppError::Auth(auth) if auth.status().is_server_error() => {
                tracing::error!(error = %auth, "Credential verifier failure");
                INTERNAL_MESSAGE.to_string()
            }
            AppError::Auth(auth) => auth.to_string(),
            AppError::Database(sqlx::Error::RowNotFound) => "resource not found".to_string(),
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                INTERNAL_MESSAGE.to_string()
            }
            AppError::BadRequest(msg) => msg.clone(),
            AppError::NotFound(msg) => msg.clone(),
            AppError::MethodNotAllowed => "method not allowed".to_string(),
            AppError::PayloadTooLarge => "request body too large".to_string(),
            AppError::RequestTimeout => "request timed out".to_string(),
            AppError::Unprocessable(msg) => msg.clone(),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                INTERNAL_MESSAGE.to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.public_message(),
        });

        (status, axum::Json(body)).into_response()
    }
}
