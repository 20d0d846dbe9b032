pub mod actor;
pub mod movie;

use axum::routing::get;
use axum::Router;

use crate::handlers::{fallback, status};
use crate::state::AppState;

/// Build the record route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                      landing page (public)
/// /health                database and signing-key reachability (public)
///
/// /movies                list (get:movies), create (post:movies)
/// /movies/{id}           patch (patch:movies), delete (delete:movies)
///
/// /actors                list (get:actors), create (post:actors)
/// /actors/{id}           patch (patch:actors), delete (delete:actors)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(fallback::home))
        .route("/health", get(status::health))
        .nest("/movies", movie::router())
        .nest("/actors", actor::router())
}
