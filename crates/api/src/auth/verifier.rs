use std::sync::Arc;
use std::time::Duration;

use super::error::AuthError;
use super::jwks::{KeyCache, KeySetSource, RemoteKeySet};
use super::jwt::{token_kid, verify_token, AuthConfig, TokenClaims, VerifySettings};

/// Verifies bearer tokens against the issuer's (cached) signing keys.
pub struct TokenVerifier {
    keys: KeyCache,
    settings: VerifySettings,
}

impl TokenVerifier {
    /// Verifier that fetches keys from `https://{domain}/.well-known/jwks.json`.
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::with_source(config, Arc::new(RemoteKeySet::new(config.domain.clone())))
    }

    /// Verifier backed by an arbitrary key source.
    pub fn with_source(config: &AuthConfig, source: Arc<dyn KeySetSource>) -> Self {
        Self {
            keys: KeyCache::new(source, Duration::from_secs(config.jwks_cache_ttl_secs)),
            settings: config.verify_settings(),
        }
    }

    /// Check the token's header, signature and standard claims.
    ///
    /// The header is read before any key lookup, so a token without a `kid`
    /// never causes a key-set fetch.
    pub async fn verify(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let kid = token_kid(token)?;
        let keys = self.keys.key_set_for(&kid).await?;
        verify_token(token, &keys, &self.settings)
    }

    /// Whether the issuer's key set can currently be obtained.
    pub async fn keys_available(&self) -> bool {
        self.keys.key_set().await.is_ok()
    }
}
