use axum::http::StatusCode;

/// A rejection raised while authenticating or authorizing a request.
///
/// The display strings are returned to the caller verbatim (except for
/// [`AuthError::KeySetUnavailable`], which is logged and masked as a 500).
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Authorization header missing")]
    MissingHeader,

    #[error("Invalid header: must be of type \"Bearer\"")]
    InvalidScheme,

    #[error("Invalid header: authorization token missing")]
    MissingToken,

    #[error("Invalid header: authorization header must be bearer token")]
    TooManyParts,

    #[error("Malformed header")]
    MalformedHeader,

    #[error("Token expired")]
    Expired,

    #[error("Incorrect claims. Please check the audience and issuer.")]
    IncorrectClaims,

    #[error("Invalid header: unable to parse authentication token")]
    Unparseable,

    #[error("Invalid header: unable to find the appropriate key")]
    KeyNotFound,

    #[error("Bad request: permissions not included")]
    PermissionsMissing,

    #[error("Forbidden")]
    Forbidden,

    #[error("Signing key set unavailable: {0}")]
    KeySetUnavailable(String),
}

impl AuthError {
    /// HTTP status for this rejection.
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::MissingHeader
            | AuthError::InvalidScheme
            | AuthError::MissingToken
            | AuthError::TooManyParts
            | AuthError::MalformedHeader
            | AuthError::Expired
            | AuthError::IncorrectClaims => StatusCode::UNAUTHORIZED,
            AuthError::Unparseable | AuthError::KeyNotFound | AuthError::PermissionsMissing => {
                StatusCode::BAD_REQUEST
            }
            AuthError::Forbidden => StatusCode::FORBIDDEN,
            AuthError::KeySetUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
