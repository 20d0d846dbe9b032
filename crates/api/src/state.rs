use std::sync::Arc;

use crate::auth::verifier::TokenVerifier;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once in `main` and cloned per request; every field is a pool or an
/// `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: casting_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Bearer-token verifier, including its signing-key cache.
    pub verifier: Arc<TokenVerifier>,
}
