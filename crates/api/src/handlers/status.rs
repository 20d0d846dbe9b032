//! Public readiness probe.

use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use crate::response::Envelope;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ServiceStatus {
    /// Records can be read and written.
    pub database: bool,
    /// The issuer's signing keys can be obtained, so bearer tokens can be
    /// verified.
    pub signing_keys: bool,
    /// Issuer that tokens must come from.
    pub issuer: String,
}

/// GET /health
///
/// 200 when both the database and the signing-key set are reachable,
/// 503 otherwise. The payload is the same either way.
pub async fn health(State(state): State<AppState>) -> Envelope<ServiceStatus> {
    let (database, signing_keys) = tokio::join!(
        casting_db::health_check(&state.pool),
        state.verifier.keys_available(),
    );
    let status = ServiceStatus {
        database: database.is_ok(),
        signing_keys,
        issuer: state.config.auth.issuer(),
    };

    if status.database && status.signing_keys {
        Envelope::ok(status)
    } else {
        tracing::warn!(?status, "Service degraded");
        Envelope::with_status(StatusCode::SERVICE_UNAVAILABLE, status)
    }
}
