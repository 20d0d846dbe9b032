//! Signing-key set (JWKS) retrieval and caching.
//!
//! ```text
//! token kid → KeyCache::key_set_for
//!           → cached set fresh and contains kid? return it
//!           → cached set younger than the refetch interval? return it anyway
//!           → otherwise fetch from the source once and replace the cache
//! ```
//!
//! Fetch failures are returned as [`AuthError::KeySetUnavailable`] and are
//! never retried here.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use jsonwebtoken::jwk::JwkSet;
use tokio::sync::{Mutex, RwLock};

use super::error::AuthError;

/// Default key-set cache lifetime.
pub const DEFAULT_JWKS_CACHE_TTL: Duration = Duration::from_secs(300);

/// Minimum age of the cached key set before an unknown `kid` may refetch it.
pub const DEFAULT_MIN_REFETCH_INTERVAL: Duration = Duration::from_secs(30);

/// Well-known location of an issuer's key set.
pub fn jwks_url(issuer_domain: &str) -> String {
    format!("https://{issuer_domain}/.well-known/jwks.json")
}

/// Retrieve the key set published at `https://{issuer_domain}/.well-known/jwks.json`.
pub async fn fetch_signing_keys(
    client: &reqwest::Client,
    issuer_domain: &str,
) -> Result<JwkSet, AuthError> {
    let url = jwks_url(issuer_domain);

    let response = client
        .get(&url)
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(|e| AuthError::KeySetUnavailable(format!("GET {url}: {e}")))?;

    response
        .json::<JwkSet>()
        .await
        .map_err(|e| AuthError::KeySetUnavailable(format!("invalid key set from {url}: {e}")))
}

/// Somewhere a key set can be loaded from.
#[async_trait]
pub trait KeySetSource: Send + Sync {
    async fn fetch(&self) -> Result<JwkSet, AuthError>;
}

/// Fetches the key set over HTTPS from the issuer domain.
pub struct RemoteKeySet {
    client: reqwest::Client,
    issuer_domain: String,
}

impl RemoteKeySet {
    pub fn new(issuer_domain: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            issuer_domain: issuer_domain.into(),
        }
    }
}

#[async_trait]
impl KeySetSource for RemoteKeySet {
    async fn fetch(&self) -> Result<JwkSet, AuthError> {
        fetch_signing_keys(&self.client, &self.issuer_domain).await
    }
}

/// A fixed, in-memory key set.
pub struct StaticKeySet(pub JwkSet);

#[async_trait]
impl KeySetSource for StaticKeySet {
    async fn fetch(&self) -> Result<JwkSet, AuthError> {
        Ok(self.0.clone())
    }
}

struct CachedKeySet {
    keys: Arc<JwkSet>,
    fetched_at: Instant,
}

/// Time-bounded cache in front of a [`KeySetSource`].
///
/// A TTL of zero disables caching: every lookup fetches. An unknown `kid`
/// refetches at most once per refetch interval, so tokens carrying made-up
/// key ids cannot drive traffic to the issuer.
pub struct KeyCache {
    source: Arc<dyn KeySetSource>,
    ttl: Duration,
    refetch_interval: Duration,
    cached: RwLock<Option<CachedKeySet>>,
    refetch: Mutex<()>,
}

impl KeyCache {
    pub fn new(source: Arc<dyn KeySetSource>, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            refetch_interval: DEFAULT_MIN_REFETCH_INTERVAL,
            cached: RwLock::new(None),
            refetch: Mutex::new(()),
        }
    }

    /// Override the minimum age of the cached set before a `kid` miss may
    /// refetch it.
    pub fn with_refetch_interval(mut self, interval: Duration) -> Self {
        self.refetch_interval = interval;
        self
    }

    /// The current key set, fetching it if the cache is empty or stale.
    pub async fn key_set(&self) -> Result<Arc<JwkSet>, AuthError> {
        match self.fresh().await {
            Some(keys) => Ok(keys),
            None => self.refresh().await,
        }
    }

    /// The key set to verify a token signed with `kid` against.
    ///
    /// When the cached set lacks `kid` and is older than the refetch
    /// interval, it is fetched again so rotated keys are picked up before the
    /// TTL expires. Otherwise the cached set is returned as is and the caller
    /// reports the key as not found.
    pub async fn key_set_for(&self, kid: &str) -> Result<Arc<JwkSet>, AuthError> {
        let keys = self.key_set().await?;
        if keys.find(kid).is_some() || self.ttl.is_zero() {
            return Ok(keys);
        }

        // Concurrent misses queue here; only the first one refetches.
        let _refetch = self.refetch.lock().await;
        if let Some(current) = self.fresh().await {
            if current.find(kid).is_some() {
                return Ok(current);
            }
        }
        if self.fetched_within(self.refetch_interval).await {
            tracing::debug!(kid, "Key id not in key set, refetch skipped");
            return Ok(self.fresh().await.unwrap_or(keys));
        }

        tracing::info!(kid, "Key id not in cached key set, re-fetching");
        self.refresh().await
    }

    async fn fresh(&self) -> Option<Arc<JwkSet>> {
        let guard = self.cached.read().await;
        guard
            .as_ref()
            .filter(|c| c.fetched_at.elapsed() < self.ttl)
            .map(|c| Arc::clone(&c.keys))
    }

    async fn fetched_within(&self, window: Duration) -> bool {
        let guard = self.cached.read().await;
        guard
            .as_ref()
            .is_some_and(|c| c.fetched_at.elapsed() < window)
    }

    async fn refresh(&self) -> Result<Arc<JwkSet>, AuthError> {
        let keys = Arc::new(self.source.fetch().await?);
        tracing::debug!(key_count = keys.keys.len(), "Fetched signing key set");

        if !self.ttl.is_zero() {
            *self.cached.write().await = Some(CachedKeySet {
                keys: Arc::clone(&keys),
                fetched_at: Instant::now(),
            });
        }
        Ok(keys)
    }
}
