use std::sync::Arc;
use std::time::{Duration, Instant};

use arc_swap::ArcSwapOption;
use jsonwebtoken::{DecodingKey, jwk::JwkSet};
use reqwest::header::{CACHE_CONTROL, HeaderMap};
use thiserror::Error;
use tokio::sync::Mutex;

/// Default floor between refetches triggered by an unknown `kid`.
const MIN_REFETCH_INTERVAL: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum JwksError {
    #[error("Failed to fetch key set: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("No key with id {0}")]
    UnknownKey(String),
    #[error("Unusable key: {0}")]
    Key(#[from] jsonwebtoken::errors::Error),
}

struct CachedKeys {
    keys: JwkSet,
    fetched_at: Instant,
    expires_at: Instant,
}

impl CachedKeys {
    fn is_fresh(&self) -> bool {
        Instant::now() < self.expires_at
    }
}

/// The provider's published JSON Web Key Set, fetched on demand and cached.
///
/// The cache is refreshed when it is stale (per `Cache-Control: max-age`, or
/// the configured TTL) or when a token references a key id the cached set
/// doesn't know, which is how key rotation shows up.
#[derive(Clone)]
pub struct JwksKeySource {
    url: Arc<str>,
    client: reqwest::Client,
    cache: Arc<ArcSwapOption<CachedKeys>>,
    // Held while fetching so concurrent misses share one request.
    refresh_lock: Arc<Mutex<()>>,
    default_ttl: Duration,
    min_refetch_interval: Duration,
}

impl JwksKeySource {
    pub fn new(url: impl Into<String>, client: reqwest::Client, default_ttl: Duration) -> Self {
        Self {
            url: Arc::from(url.into()),
            client,
            cache: Arc::new(ArcSwapOption::empty()),
            refresh_lock: Arc::new(Mutex::new(())),
            default_ttl,
            min_refetch_interval: MIN_REFETCH_INTERVAL,
        }
    }

    /// Don't hit the provider again for an unknown `kid` more often than this.
    pub fn with_min_refetch_interval(mut self, interval: Duration) -> Self {
        self.min_refetch_interval = interval;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn decoding_key(&self, kid: &str) -> Result<DecodingKey, JwksError> {
        let cached = self.cache.load_full();

        if let Some(cached) = &cached {
            if cached.is_fresh() {
                if let Some(jwk) = cached.keys.find(kid) {
                    return Ok(DecodingKey::from_jwk(jwk)?);
                }
                if cached.fetched_at.elapsed() < self.min_refetch_interval {
                    return Err(JwksError::UnknownKey(kid.to_string()));
                }
            }
        }

        let _refreshing = self.refresh_lock.lock().await;

        // Someone else may have refreshed while we waited for the lock.
        let current = self.cache.load_full();
        let fresh = match current {
            Some(current)
                if current.is_fresh()
                    && !cached.as_ref().is_some_and(|seen| Arc::ptr_eq(seen, &current)) =>
            {
                current
            }
            _ => self.refresh().await?,
        };

        let jwk = fresh
            .keys
            .find(kid)
            .ok_or_else(|| JwksError::UnknownKey(kid.to_string()))?;

        Ok(DecodingKey::from_jwk(jwk)?)
    }

    #[tracing::instrument(name = "JwksKeySource::refresh", skip(self), fields(url = %self.url))]
    async fn refresh(&self) -> Result<Arc<CachedKeys>, JwksError> {
        let response = self
            .client
            .get(self.url.as_ref())
            .send()
            .await?
            .error_for_status()?;

        let ttl = max_age(response.headers()).unwrap_or(self.default_ttl);
        let keys: JwkSet = response.json().await?;

        tracing::debug!(keys = keys.keys.len(), ttl_secs = ttl.as_secs(), "Fetched key set");

        let now = Instant::now();
        let cached = Arc::new(CachedKeys {
            keys,
            fetched_at: now,
            expires_at: now + ttl,
        });
        self.cache.store(Some(Arc::clone(&cached)));

        Ok(cached)
    }
}

fn max_age(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(CACHE_CONTROL)?
        .to_str()
        .ok()?
        .split(',')
        .find_map(|directive| directive.trim().strip_prefix("max-age=")?.parse().ok())
        .map(Duration::from_secs)
}
