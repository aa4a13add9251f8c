//! API Handlers
//!
//! HTTP request handlers for each transaction cache endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};

use crate::access::Principal;
use crate::cache::{CacheConfig, TxCacheManager, TxHash};
use crate::clock::{Clock, SystemClock};
use crate::error::{CacheError, Result};
use crate::models::{
    CacheTransactionRequest, CacheTransactionResponse, CachedTransactionResponse, HealthResponse,
    SetMaxEntriesRequest, SetMaxEntriesResponse, StatsResponse,
};

/// Header carrying the caller's identity.
pub const CALLER_HEADER: &str = "x-caller-principal";

/// Application state shared across all handlers.
///
/// Every handler holds the write lock for the whole operation, so each
/// cache operation is atomic with respect to all others.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cache manager
    pub cache: Arc<RwLock<TxCacheManager>>,
    /// Source of `now` for insertion and lookup
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(cache: TxCacheManager, clock: Arc<dyn Clock>) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            clock,
        }
    }

    /// Creates a new AppState from configuration, timed by the system clock.
    pub fn from_config(config: &crate::config::Config) -> Self {
        let cache = TxCacheManager::new(
            Principal::new(config.admin_principal.clone()),
            config.max_entries,
        );
        Self::new(cache, Arc::new(SystemClock))
    }
}

fn caller_principal(headers: &HeaderMap) -> Result<Principal> {
    headers
        .get(CALLER_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(Principal::new)
        .ok_or_else(|| {
            CacheError::Unauthorized(format!("missing or invalid {} header", CALLER_HEADER))
        })
}

/// Handler for PUT /config/max-entries
///
/// Admin-only capacity change.
pub async fn set_max_entries_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<SetMaxEntriesRequest>,
) -> Result<Json<SetMaxEntriesResponse>> {
    let caller = caller_principal(&headers)?;

    let mut cache = state.cache.write().await;
    let evicted = cache.set_max_cache_entries(&caller, req.max_entries)?;

    Ok(Json(SetMaxEntriesResponse::new(
        req.max_entries,
        evicted.len(),
    )))
}

/// Handler for GET /config
pub async fn config_handler(State(state): State<AppState>) -> Json<CacheConfig> {
    let cache = state.cache.read().await;
    Json(cache.config())
}

/// Handler for PUT /transactions
///
/// Caches gas metadata for a transaction. Open to any caller.
pub async fn cache_transaction_handler(
    State(state): State<AppState>,
    Json(req): Json<CacheTransactionRequest>,
) -> Result<Json<CacheTransactionResponse>> {
    let tx_hash = req.parse_tx_hash()?;

    let mut cache = state.cache.write().await;
    let now = state.clock.now();
    cache.cache_transaction(
        tx_hash,
        req.chain_id,
        req.estimated_gas,
        req.expiry_duration,
        now,
    )?;

    Ok(Json(CacheTransactionResponse::new(
        tx_hash,
        req.chain_id,
        now,
    )))
}

/// Handler for GET /transactions/:chain_id/:tx_hash
///
/// Missing and expired records both answer 404.
pub async fn get_transaction_handler(
    State(state): State<AppState>,
    Path((chain_id, tx_hash)): Path<(u64, String)>,
) -> Result<Json<CachedTransactionResponse>> {
    let tx_hash: TxHash = tx_hash.parse()?;

    // Write lock: lookups update stats and may drop an expired record
    let mut cache = state.cache.write().await;
    let now = state.clock.now();

    cache
        .get_cached_transaction(tx_hash, chain_id, now)
        .map(|record| Json(CachedTransactionResponse::from(record)))
        .ok_or_else(|| CacheError::NotFound(format!("{}@{}", tx_hash, chain_id)))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    Json(cache.stats().into())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::TX_HASH_LEN;
    use crate::clock::ManualClock;
    use axum::http::HeaderValue;

    fn test_state(clock: Arc<ManualClock>) -> AppState {
        AppState::new(TxCacheManager::new(Principal::from("deployer"), 100), clock)
    }

    fn hex_hash(byte: u8) -> String {
        format!("{:02x}", byte).repeat(TX_HASH_LEN)
    }

    fn caller(id: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CALLER_HEADER, HeaderValue::from_static(id));
        headers
    }

    fn cache_request(byte: u8, expiry_duration: u64) -> CacheTransactionRequest {
        CacheTransactionRequest {
            tx_hash: hex_hash(byte),
            chain_id: 1,
            estimated_gas: 100,
            expiry_duration,
        }
    }

    #[tokio::test]
    async fn test_cache_and_get_handler() {
        let clock = Arc::new(ManualClock::new(12));
        let state = test_state(clock.clone());

        let response =
            cache_transaction_handler(State(state.clone()), Json(cache_request(0x56, 50)))
                .await
                .unwrap();
        assert_eq!(response.cached_at, 12);

        let response = get_transaction_handler(State(state), Path((1, hex_hash(0x56))))
            .await
            .unwrap();
        assert_eq!(response.estimated_gas, 100);
        assert_eq!(response.expires_at, 62);
    }

    #[tokio::test]
    async fn test_get_expired_is_not_found() {
        let clock = Arc::new(ManualClock::new(0));
        let state = test_state(clock.clone());
        let cached = cache_transaction_handler(State(state.clone()), Json(cache_request(1, 50)))
            .await
            .unwrap();
        assert_eq!(cached.cached_at, 0);

        clock.set(51);

        let result = get_transaction_handler(State(state), Path((1, hex_hash(1)))).await;
        assert!(matches!(result, Err(CacheError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_cache_invalid_hash() {
        let state = test_state(Arc::new(ManualClock::new(0)));
        let mut req = cache_request(1, 50);
        req.tx_hash = "1234".to_string();

        let result = cache_transaction_handler(State(state), Json(req)).await;
        assert!(matches!(result, Err(CacheError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_set_max_entries_admin() {
        let state = test_state(Arc::new(ManualClock::new(0)));

        let response = set_max_entries_handler(
            State(state.clone()),
            caller("deployer"),
            Json(SetMaxEntriesRequest { max_entries: 500 }),
        )
        .await
        .unwrap();

        assert!(response.ok);
        assert_eq!(config_handler(State(state)).await.max_entries, 500);
    }

    #[tokio::test]
    async fn test_set_max_entries_non_admin() {
        let state = test_state(Arc::new(ManualClock::new(0)));

        let result = set_max_entries_handler(
            State(state.clone()),
            caller("wallet_1"),
            Json(SetMaxEntriesRequest { max_entries: 500 }),
        )
        .await;

        assert!(matches!(result, Err(CacheError::Unauthorized(_))));
        assert_eq!(config_handler(State(state)).await.max_entries, 100);
    }

    #[tokio::test]
    async fn test_set_max_entries_missing_caller() {
        let state = test_state(Arc::new(ManualClock::new(0)));

        let result = set_max_entries_handler(
            State(state),
            HeaderMap::new(),
            Json(SetMaxEntriesRequest { max_entries: 500 }),
        )
        .await;

        assert!(matches!(result, Err(CacheError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = test_state(Arc::new(ManualClock::new(0)));

        let _ = get_transaction_handler(State(state.clone()), Path((1, hex_hash(9)))).await;

        let response = stats_handler(State(state)).await;
        assert_eq!(response.hits, 0);
        assert_eq!(response.misses, 1);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
