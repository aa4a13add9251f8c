//! Cache Key Module
//!
//! Composite `(tx hash, chain id)` identifier for a cache slot.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CacheError;

/// Length of a transaction hash in bytes.
pub const TX_HASH_LEN: usize = 32;

/// Numeric chain identifier.
pub type ChainId = u64;

// == Tx Hash ==
/// Fixed-length transaction hash.
///
/// Text form is lowercase hex without prefix. Parsing accepts an optional
/// `0x` prefix and either letter case.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TxHash([u8; TX_HASH_LEN]);

impl TxHash {
    pub const fn new(bytes: [u8; TX_HASH_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; TX_HASH_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<[u8; TX_HASH_LEN]> for TxHash {
    fn from(bytes: [u8; TX_HASH_LEN]) -> Self {
        Self(bytes)
    }
}

impl FromStr for TxHash {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let mut bytes = [0u8; TX_HASH_LEN];
        hex::decode_to_slice(digits, &mut bytes).map_err(|e| {
            CacheError::InvalidRequest(format!(
                "tx_hash must be {} bytes of hex: {}",
                TX_HASH_LEN, e
            ))
        })?;
        Ok(Self(bytes))
    }
}

impl TryFrom<String> for TxHash {
    type Error = CacheError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TxHash> for String {
    fn from(hash: TxHash) -> Self {
        hash.to_hex()
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TxHash(0x{})", self.to_hex())
    }
}

// == Cache Key ==
/// Identifies one cache slot.
///
/// Field order matters: the derived `Ord` compares the hash bytes first and
/// the chain id second, which is the eviction tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CacheKey {
    pub tx_hash: TxHash,
    pub chain_id: ChainId,
}

impl CacheKey {
    pub fn new(tx_hash: TxHash, chain_id: ChainId) -> Self {
        Self { tx_hash, chain_id }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.tx_hash, self.chain_id)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn hash(byte: u8) -> TxHash {
        TxHash::new([byte; TX_HASH_LEN])
    }

    #[test]
    fn test_parse_hex_roundtrip() {
        let text = "12".repeat(TX_HASH_LEN);
        let parsed: TxHash = text.parse().unwrap();
        assert_eq!(parsed, hash(0x12));
        assert_eq!(parsed.to_string(), text);
    }

    #[test]
    fn test_parse_accepts_prefix_and_uppercase() {
        let text = format!("0x{}", "AB".repeat(TX_HASH_LEN));
        let parsed: TxHash = text.parse().unwrap();
        assert_eq!(parsed, hash(0xab));
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        let result = "1234".parse::<TxHash>();
        assert!(matches!(result, Err(CacheError::InvalidRequest(_))));
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        let result = "zz".repeat(TX_HASH_LEN).parse::<TxHash>();
        assert!(matches!(result, Err(CacheError::InvalidRequest(_))));
    }

    #[test]
    fn test_key_equality_is_structural() {
        assert_eq!(CacheKey::new(hash(1), 1), CacheKey::new(hash(1), 1));
        assert_ne!(CacheKey::new(hash(1), 1), CacheKey::new(hash(1), 2));
        assert_ne!(CacheKey::new(hash(1), 1), CacheKey::new(hash(2), 1));
    }

    #[test]
    fn test_key_order_hash_then_chain() {
        let a = CacheKey::new(hash(1), 9);
        let b = CacheKey::new(hash(2), 1);
        let c = CacheKey::new(hash(2), 3);
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_tx_hash_serde_as_hex_string() {
        let json = serde_json::to_string(&hash(0xff)).unwrap();
        assert_eq!(json, format!("\"{}\"", "ff".repeat(TX_HASH_LEN)));

        let back: TxHash = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hash(0xff));
        assert!(serde_json::from_str::<TxHash>("\"00\"").is_err());
    }
}
