//! Issuer settings, the verified claim set, and token validation.
//!
//! Tokens are asymmetric (RS256 by default) JWTs issued by an external
//! identity provider. Validation follows these steps:
//!
//! 1. Read the unverified header; it must name a `kid`.
//! 2. Select the matching key from the issuer's key set.
//! 3. Check the signature against the allowed algorithms, then `exp`, `aud`
//!    and `iss` (`https://{domain}/`), with no leeway.

use std::str::FromStr;

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::jwk::{Jwk, JwkSet};
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use super::error::AuthError;
use super::jwks::DEFAULT_JWKS_CACHE_TTL;

/// Configuration for the trusted token issuer.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Issuer domain, e.g. `casting.eu.auth0.com`.
    pub domain: String,
    /// Signature algorithms a token may use.
    pub algorithms: Vec<Algorithm>,
    /// Expected `aud` claim.
    pub audience: String,
    /// Lifetime of the cached key set in seconds; `0` fetches on every request.
    pub jwks_cache_ttl_secs: u64,
}

impl AuthConfig {
    /// Load issuer configuration from environment variables.
    ///
    /// | Env Var               | Required | Default  |
    /// |-----------------------|----------|----------|
    /// | `AUTH0_DOMAIN`        | **yes**  | --       |
    /// | `API_AUDIENCE`        | **yes**  | --       |
    /// | `ALGORITHMS`          | no       | `RS256`  |
    /// | `JWKS_CACHE_TTL_SECS` | no       | `300`    |
    ///
    /// # Panics
    ///
    /// Panics if a required variable is missing or empty, or if `ALGORITHMS`
    /// names an unknown algorithm.
    pub fn from_env() -> Self {
        let domain =
            std::env::var("AUTH0_DOMAIN").expect("AUTH0_DOMAIN must be set in the environment");
        assert!(!domain.trim().is_empty(), "AUTH0_DOMAIN must not be empty");

        let audience =
            std::env::var("API_AUDIENCE").expect("API_AUDIENCE must be set in the environment");
        assert!(!audience.trim().is_empty(), "API_AUDIENCE must not be empty");

        let algorithms = parse_algorithms(
            &std::env::var("ALGORITHMS").unwrap_or_else(|_| "RS256".into()),
        )
        .unwrap_or_else(|e| panic!("ALGORITHMS is invalid: {e}"));

        let jwks_cache_ttl_secs: u64 = std::env::var("JWKS_CACHE_TTL_SECS")
            .unwrap_or_else(|_| DEFAULT_JWKS_CACHE_TTL.as_secs().to_string())
            .parse()
            .expect("JWKS_CACHE_TTL_SECS must be a valid u64");

        Self {
            domain: domain.trim().to_string(),
            algorithms,
            audience,
            jwks_cache_ttl_secs,
        }
    }

    /// The exact `iss` value tokens must carry.
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.domain)
    }

    /// Validation settings derived from this configuration.
    pub fn verify_settings(&self) -> VerifySettings {
        VerifySettings {
            algorithms: self.algorithms.clone(),
            audience: self.audience.clone(),
            issuer: self.issuer(),
        }
    }
}

/// Parse an algorithm list such as `RS256`, `RS256,RS384` or `["RS256"]`.
pub fn parse_algorithms(raw: &str) -> Result<Vec<Algorithm>, String> {
    let algorithms = raw
        .split(|c: char| c == ',' || c.is_whitespace())
        .map(|s| s.trim_matches(|c| matches!(c, '[' | ']' | '"' | '\'')))
        .filter(|s| !s.is_empty())
        .map(|s| Algorithm::from_str(s).map_err(|_| format!("unknown algorithm '{s}'")))
        .collect::<Result<Vec<_>, _>>()?;

    if algorithms.is_empty() {
        return Err("at least one algorithm is required".to_string());
    }
    Ok(algorithms)
}

/// What a token must satisfy besides a valid signature.
#[derive(Debug, Clone)]
pub struct VerifySettings {
    pub algorithms: Vec<Algorithm>,
    pub audience: String,
    pub issuer: String,
}

impl VerifySettings {
    fn validation(&self) -> Validation {
        let mut validation = Validation::default();
        validation.algorithms = self.algorithms.clone();
        validation.leeway = 0;
        validation.set_audience(&[&self.audience]);
        validation.set_issuer(&[&self.issuer]);
        validation.set_required_spec_claims(&["exp", "aud", "iss"]);
        validation
    }
}

/// `aud` may be a single string or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Audience {
    One(String),
    Many(Vec<String>),
}

/// The decoded payload of a verified token. Lives for one request.
///
/// `aud` and `iss` are optional here so that a token missing them reaches
/// claim validation (and is reported as incorrect claims) instead of failing
/// to deserialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject -- the caller's identity at the issuer.
    #[serde(default)]
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<Audience>,
    #[serde(default)]
    pub iss: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Granted permission strings. `None` when the claim is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
}

/// Read the key id from the token's unverified header.
pub fn token_kid(token: &str) -> Result<String, AuthError> {
    let header = decode_header(token).map_err(|_| AuthError::MalformedHeader)?;
    header.kid.ok_or(AuthError::MalformedHeader)
}

/// Validate `token` against a specific key.
pub fn decode_claims(
    token: &str,
    jwk: &Jwk,
    settings: &VerifySettings,
) -> Result<TokenClaims, AuthError> {
    let key = DecodingKey::from_jwk(jwk).map_err(|_| AuthError::Unparseable)?;
    decode::<TokenClaims>(token, &key, &settings.validation())
        .map(|data| data.claims)
        .map_err(classify_jwt_error)
}

/// Full verification against an already-fetched key set.
pub fn verify_token(
    token: &str,
    key_set: &JwkSet,
    settings: &VerifySettings,
) -> Result<TokenClaims, AuthError> {
    let kid = token_kid(token)?;
    let jwk = key_set.find(&kid).ok_or(AuthError::KeyNotFound)?;
    decode_claims(token, jwk, settings)
}

fn classify_jwt_error(err: jsonwebtoken::errors::Error) -> AuthError {
    match err.kind() {
        ErrorKind::ExpiredSignature => AuthError::Expired,
        ErrorKind::InvalidAudience | ErrorKind::InvalidIssuer | ErrorKind::ImmatureSignature => {
            AuthError::IncorrectClaims
        }
        ErrorKind::MissingRequiredClaim(claim) if claim == "aud" || claim == "iss" => {
            AuthError::IncorrectClaims
        }
        _ => AuthError::Unparseable,
    }
}
