//! Request DTOs for the transaction cache API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::cache::{ChainId, TxHash};
use crate::error::Result;

/// Request body for PUT /transactions
///
/// # Fields
/// - `tx_hash`: 32-byte transaction hash as hex, `0x` prefix optional
/// - `chain_id`: Chain the transaction targets
/// - `estimated_gas`: Gas estimate supplied by the caller
/// - `expiry_duration`: How long the record stays live
#[derive(Debug, Clone, Deserialize)]
pub struct CacheTransactionRequest {
    pub tx_hash: String,
    pub chain_id: ChainId,
    pub estimated_gas: u64,
    pub expiry_duration: u64,
}

impl CacheTransactionRequest {
    /// Parses the hex hash, failing with `InvalidRequest`.
    pub fn parse_tx_hash(&self) -> Result<TxHash> {
        self.tx_hash.parse()
    }
}

/// Request body for PUT /config/max-entries
#[derive(Debug, Clone, Deserialize)]
pub struct SetMaxEntriesRequest {
    pub max_entries: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::TX_HASH_LEN;

    #[test]
    fn test_cache_request_deserialize() {
        let json = format!(
            r#"{{"tx_hash": "0x{}", "chain_id": 1, "estimated_gas": 100, "expiry_duration": 50}}"#,
            "12".repeat(TX_HASH_LEN)
        );
        let req: CacheTransactionRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(req.chain_id, 1);
        assert_eq!(req.estimated_gas, 100);
        assert_eq!(req.expiry_duration, 50);
        assert_eq!(
            req.parse_tx_hash().unwrap(),
            TxHash::new([0x12; TX_HASH_LEN])
        );
    }

    #[test]
    fn test_cache_request_bad_hash() {
        let req = CacheTransactionRequest {
            tx_hash: "0x1234".to_string(),
            chain_id: 1,
            estimated_gas: 100,
            expiry_duration: 50,
        };
        assert!(req.parse_tx_hash().is_err());
    }

    #[test]
    fn test_set_max_entries_deserialize() {
        let req: SetMaxEntriesRequest = serde_json::from_str(r#"{"max_entries": 500}"#).unwrap();
        assert_eq!(req.max_entries, 500);
    }
}
