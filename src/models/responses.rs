//! Response DTOs for the transaction cache API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::{CacheRecord, CacheStats, ChainId, TxHash};

/// Response body for GET /transactions/:chain_id/:tx_hash
#[derive(Debug, Clone, Serialize)]
pub struct CachedTransactionResponse {
    pub tx_hash: TxHash,
    pub chain_id: ChainId,
    pub estimated_gas: u64,
    pub cached_at: u64,
    pub expiry_duration: u64,
    pub expires_at: u64,
}

impl From<CacheRecord> for CachedTransactionResponse {
    fn from(record: CacheRecord) -> Self {
        Self {
            tx_hash: record.key.tx_hash,
            chain_id: record.key.chain_id,
            estimated_gas: record.estimated_gas,
            cached_at: record.cached_at,
            expiry_duration: record.expiry_duration,
            expires_at: record.expires_at(),
        }
    }
}

/// Response body for PUT /transactions
#[derive(Debug, Clone, Serialize)]
pub struct CacheTransactionResponse {
    pub ok: bool,
    pub tx_hash: TxHash,
    pub chain_id: ChainId,
    pub cached_at: u64,
}

impl CacheTransactionResponse {
    pub fn new(tx_hash: TxHash, chain_id: ChainId, cached_at: u64) -> Self {
        Self {
            ok: true,
            tx_hash,
            chain_id,
            cached_at,
        }
    }
}

/// Response body for PUT /config/max-entries
#[derive(Debug, Clone, Serialize)]
pub struct SetMaxEntriesResponse {
    pub ok: bool,
    pub max_entries: usize,
    /// Records evicted to fit the new capacity
    pub evicted: usize,
}

impl SetMaxEntriesResponse {
    pub fn new(max_entries: usize, evicted: usize) -> Self {
        Self {
            ok: true,
            max_entries,
            evicted,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub expirations: u64,
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            expirations: stats.expirations,
            total_entries: stats.total_entries,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
    /// Stable numeric error code
    pub code: u32,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: u32) -> Self {
        Self {
            error: error.into(),
            code,
        }
    }
}
