//! API Handlers
//!
//! HTTP request handlers for each avatar service endpoint.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use tokio::sync::RwLock;
use tracing::debug;

use crate::avatar::{populate_all, AvatarSource, HttpAvatarSource};
use crate::cache::{LruCache, SharedCache};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{AccountsQuery, AvatarsResponse, HealthResponse, StatsResponse};

/// Application state shared across all handlers.
///
/// Holds the one cache instance of the process and the avatar source used
/// to fill it.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe avatar cache
    pub cache: SharedCache,
    /// Upstream avatar lookup
    pub source: Arc<dyn AvatarSource>,
    /// Served for accounts whose lookup failed
    pub placeholder: String,
}

impl AppState {
    /// Creates a new AppState around an existing cache and source.
    pub fn new(
        cache: LruCache,
        source: Arc<dyn AvatarSource>,
        placeholder: impl Into<String>,
    ) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            source,
            placeholder: placeholder.into(),
        }
    }

    /// Creates a new AppState from configuration, talking to the
    /// configured avatar service over HTTP.
    pub fn from_config(config: &Config) -> Result<Self> {
        let source = HttpAvatarSource::from_config(config)?;
        Ok(Self::new(
            LruCache::new(config.max_entries),
            Arc::new(source),
            config.avatar_placeholder.clone(),
        ))
    }
}

/// Handler for GET /api/avatars
///
/// Makes sure every requested account is cached, then answers with the
/// avatar of each one. Accounts evicted by a concurrent request before the
/// read-back are answered with the value this request populated.
pub async fn avatars_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<AvatarsResponse>> {
    let query = AccountsQuery::from_pairs(pairs);

    let capacity = state.cache.read().await.capacity();
    if query.len() > capacity {
        return Err(CacheError::InvalidRequest(format!(
            "at most {} accounts can be requested at once, got {}",
            capacity,
            query.len()
        )));
    }

    let accounts = query.into_accounts();
    debug!("Resolving avatars for {} accounts", accounts.len());

    let populated = populate_all(
        &accounts,
        &state.cache,
        state.source.as_ref(),
        &state.placeholder,
    )
    .await;

    let mut avatars = {
        let mut cache = state.cache.write().await;
        let still_cached: Vec<&str> = accounts
            .iter()
            .map(String::as_str)
            .filter(|account| cache.has(account))
            .collect();
        cache.get_values(still_cached)?
    };
    for (account, avatar) in populated {
        avatars.entry(account).or_insert(avatar);
    }

    Ok(Json(AvatarsResponse::success(avatars)))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.read().await.stats();
    Json(stats.into())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct EchoSource;

    #[async_trait]
    impl AvatarSource for EchoSource {
        async fn fetch_avatar(&self, account: &str) -> Result<String> {
            Ok(format!("img-{}", account))
        }
    }

    fn test_state(capacity: usize) -> AppState {
        AppState::new(
            LruCache::new(capacity),
            Arc::new(EchoSource),
            "/placeholder.png",
        )
    }

    fn query(raw: &[(&str, &str)]) -> Query<Vec<(String, String)>> {
        Query(
            raw.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[tokio::test]
    async fn test_avatars_handler_populates_cache() {
        let state = test_state(10);

        let response = avatars_handler(
            State(state.clone()),
            query(&[("accounts", "alice.wam"), ("accounts", "bob.wam")]),
        )
        .await
        .unwrap();

        assert!(response.success);
        assert_eq!(response.message.len(), 2);
        assert_eq!(response.message["alice.wam"], "img-alice.wam");
        assert_eq!(state.cache.read().await.len(), 2);
    }

    #[tokio::test]
    async fn test_avatars_handler_without_accounts() {
        let state = test_state(10);

        let response = avatars_handler(State(state), query(&[])).await.unwrap();

        assert!(response.success);
        assert!(response.message.is_empty());
    }

    #[tokio::test]
    async fn test_avatars_handler_rejects_batches_over_capacity() {
        let state = test_state(1);

        let result = avatars_handler(
            State(state),
            query(&[("accounts", "a.wam"), ("accounts", "b.wam")]),
        )
        .await;

        assert!(matches!(result, Err(CacheError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = test_state(10);

        let response = stats_handler(State(state)).await;
        assert_eq!(response.hits, 0);
        assert_eq!(response.capacity, 10);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
