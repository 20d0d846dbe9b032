//! Token-minting helpers for unit tests. Keys live in `tests/fixtures`.

use std::sync::Arc;

use jsonwebtoken::jwk::JwkSet;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::{json, Value};

use super::jwks::StaticKeySet;
use super::jwt::AuthConfig;
use super::verifier::TokenVerifier;

pub const ISSUER_KEY_PEM: &str = include_str!("../../tests/fixtures/issuer_key.pem");
pub const ROGUE_KEY_PEM: &str = include_str!("../../tests/fixtures/rogue_key.pem");
const JWKS_JSON: &str = include_str!("../../tests/fixtures/jwks.json");

pub const KID: &str = "casting-test-key";
pub const DOMAIN: &str = "casting-test.example.com";
pub const AUDIENCE: &str = "casting-api";
pub const SUBJECT: &str = "auth0|executive-producer";

pub fn config() -> AuthConfig {
    AuthConfig {
        domain: DOMAIN.to_string(),
        algorithms: vec![Algorithm::RS256],
        audience: AUDIENCE.to_string(),
        jwks_cache_ttl_secs: 300,
    }
}

pub fn key_set() -> JwkSet {
    serde_json::from_str(JWKS_JSON).expect("fixture key set should parse")
}

pub fn verifier() -> TokenVerifier {
    TokenVerifier::with_source(&config(), Arc::new(StaticKeySet(key_set())))
}

/// Claims that pass validation, valid for one hour.
pub fn claims(permissions: &[&str]) -> Value {
    let now = chrono::Utc::now().timestamp();
    json!({
        "sub": SUBJECT,
        "aud": AUDIENCE,
        "iss": config().issuer(),
        "iat": now,
        "exp": now + 3600,
        "permissions": permissions,
    })
}

pub fn sign_with(claims: &Value, kid: Option<&str>, pem: &str) -> String {
    let mut header = Header::new(Algorithm::RS256);
    header.kid = kid.map(str::to_string);
    let key = EncodingKey::from_rsa_pem(pem.as_bytes()).expect("fixture key should parse");
    encode(&header, claims, &key).expect("signing should succeed")
}

pub fn sign(claims: &Value) -> String {
    sign_with(claims, Some(KID), ISSUER_KEY_PEM)
}

pub fn token_with_permissions(permissions: &[&str]) -> String {
    sign(&claims(permissions))
}
