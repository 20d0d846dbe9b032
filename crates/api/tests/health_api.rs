//! `/health` readiness reporting.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use casting_api::auth::error::AuthError;
use casting_api::auth::jwks::KeySetSource;
use casting_api::auth::verifier::TokenVerifier;
use common::{auth_config, body_json, build_test_app, build_test_app_with_verifier, get, DOMAIN};
use jsonwebtoken::jwk::JwkSet;
use sqlx::PgPool;

struct UnreachableIssuer;

#[async_trait]
impl KeySetSource for UnreachableIssuer {
    async fn fetch(&self) -> Result<JwkSet, AuthError> {
        Err(AuthError::KeySetUnavailable("connection refused".into()))
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn healthy_when_database_and_keys_reachable(pool: PgPool) {
    let response = get(build_test_app(pool), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["status"], 200);
    assert_eq!(json["database"], true);
    assert_eq!(json["signing_keys"], true);
    assert_eq!(json["issuer"], format!("https://{DOMAIN}/"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unreachable_issuer_is_503(pool: PgPool) {
    let verifier = TokenVerifier::with_source(&auth_config(), Arc::new(UnreachableIssuer));
    let response = get(build_test_app_with_verifier(pool, verifier), "/health").await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["status"], 503);
    assert_eq!(json["database"], true);
    assert_eq!(json["signing_keys"], false);
    assert!(!json.to_string().contains("connection refused"));
}
