//! Permission checks and the composed request gate.

use axum::http::HeaderMap;

use super::error::AuthError;
use super::header::extract_token;
use super::jwt::TokenClaims;
use super::verifier::TokenVerifier;

/// Check that `claims` grant `required`.
///
/// An empty `required` string means "any authenticated caller" and skips the
/// claim inspection entirely.
pub fn check_permission(required: &str, claims: &TokenClaims) -> Result<(), AuthError> {
    if required.is_empty() {
        return Ok(());
    }
    let granted = claims
        .permissions
        .as_ref()
        .ok_or(AuthError::PermissionsMissing)?;
    if !granted.iter().any(|p| p == required) {
        return Err(AuthError::Forbidden);
    }
    Ok(())
}

/// Extract, verify, then authorize. Stops at the first failure.
pub async fn gate(
    required: &str,
    headers: &HeaderMap,
    verifier: &TokenVerifier,
) -> Result<TokenClaims, AuthError> {
    let token = extract_token(headers)?;
    let claims = verifier.verify(token).await?;
    check_permission(required, &claims)?;
    Ok(claims)
}
