//! Cache Record Module
//!
//! Defines a cached transaction record and its expiry arithmetic.

use serde::Serialize;

use crate::cache::CacheKey;

// == Cache Record ==
/// Gas metadata cached for one transaction on one chain.
///
/// Records are never updated in place; re-inserting under the same key
/// replaces the whole record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheRecord {
    pub key: CacheKey,
    pub estimated_gas: u64,
    /// Time (block height or timestamp) at insertion
    pub cached_at: u64,
    /// How long after `cached_at` the record stays live
    pub expiry_duration: u64,
}

impl CacheRecord {
    // == Constructor ==
    pub fn new(key: CacheKey, estimated_gas: u64, cached_at: u64, expiry_duration: u64) -> Self {
        Self {
            key,
            estimated_gas,
            cached_at,
            expiry_duration,
        }
    }

    // == Expires At ==
    /// Last instant at which the record is still live.
    ///
    /// Saturates at `u64::MAX`, so an overflowing duration never expires.
    pub fn expires_at(&self) -> u64 {
        self.cached_at.saturating_add(self.expiry_duration)
    }

    // == Deadline ==
    /// Exact `cached_at + expiry_duration`, without saturation.
    ///
    /// Eviction orders on this so deadlines past `u64::MAX` stay distinct.
    pub fn deadline(&self) -> u128 {
        self.cached_at as u128 + self.expiry_duration as u128
    }

    // == Is Expired ==
    /// A record is expired strictly after `cached_at + expiry_duration`.
    pub fn is_expired(&self, now: u64) -> bool {
        now > self.expires_at()
    }

    /// Time left before expiry, `0` once expired.
    pub fn remaining(&self, now: u64) -> u64 {
        self.expires_at().saturating_sub(now)
    }
}
