//! `Authorization: Bearer <token>` parsing.

use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;

use super::error::AuthError;

/// Extract the bearer token from request headers.
///
/// The header must be exactly two whitespace-separated parts, the first
/// case-insensitively equal to `bearer`.
pub fn extract_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingHeader)?
        .to_str()
        .map_err(|_| AuthError::MalformedHeader)?;

    let parts: Vec<&str> = value.split_whitespace().collect();
    match parts.as_slice() {
        [] => Err(AuthError::MissingHeader),
        [scheme, ..] if !scheme.eq_ignore_ascii_case("bearer") => Err(AuthError::InvalidScheme),
        [_] => Err(AuthError::MissingToken),
        [_, token] => Ok(*token),
        _ => Err(AuthError::TooManyParts),
    }
}
