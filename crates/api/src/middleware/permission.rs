//! Permission-gated extractor.
//!
//! Each protected handler names the permission it needs in its signature:
//!
//! ```ignore
//! async fn list(State(state): State<AppState>, auth: Authorized<GetMovies>) -> AppResult<...> {
//!     tracing::debug!(sub = %auth.claims.sub, "listing movies");
//!     ...
//! }
//! ```
//!
//! Axum runs extractors in argument order, so placing `Authorized<_>` before
//! path and body extractors means credential failures are reported first.

use std::marker::PhantomData;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use casting_core::permissions::{
    PERM_DELETE_ACTORS, PERM_DELETE_MOVIES, PERM_GET_ACTORS, PERM_GET_MOVIES, PERM_PATCH_ACTORS,
    PERM_PATCH_MOVIES, PERM_POST_ACTORS, PERM_POST_MOVIES,
};

use crate::auth::jwt::TokenClaims;
use crate::auth::permission::gate;
use crate::error::AppError;
use crate::state::AppState;

/// A permission string known at compile time.
pub trait Permission: Send + Sync + 'static {
    const NAME: &'static str;
}

macro_rules! permissions {
    ($($(#[$doc:meta])* $ty:ident => $name:expr;)*) => {
        $(
            $(#[$doc])*
            pub struct $ty;

            impl Permission for $ty {
                const NAME: &'static str = $name;
            }
        )*
    };
}

permissions! {
    /// `get:movies`
    GetMovies => PERM_GET_MOVIES;
    /// `post:movies`
    PostMovies => PERM_POST_MOVIES;
    /// `patch:movies`
    PatchMovies => PERM_PATCH_MOVIES;
    /// `delete:movies`
    DeleteMovies => PERM_DELETE_MOVIES;
    /// `get:actors`
    GetActors => PERM_GET_ACTORS;
    /// `post:actors`
    PostActors => PERM_POST_ACTORS;
    /// `patch:actors`
    PatchActors => PERM_PATCH_ACTORS;
    /// `delete:actors`
    DeleteActors => PERM_DELETE_ACTORS;
}

/// Verified claims of a caller holding permission `P`.
pub struct Authorized<P: Permission> {
    pub claims: TokenClaims,
    _permission: PhantomData<P>,
}

impl<P: Permission> FromRequestParts<AppState> for Authorized<P> {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let claims = gate(P::NAME, &parts.headers, &state.verifier)
            .await
            .map_err(|err| {
                tracing::warn!(
                    permission = P::NAME,
                    method = %parts.method,
                    path = %parts.uri.path(),
                    error = %err,
                    "Request rejected by credential gate"
                );
                AppError::Auth(err)
            })?;

        tracing::debug!(sub = %claims.sub, permission = P::NAME, "Request authorized");
        Ok(Self {
            claims,
            _permission: PhantomData,
        })
    }
}
