//! Transaction Cache Manager
//!
//! Public operation set: admin-gated capacity changes, open insertion, and
//! expiry-aware lookup over the entry store.

use serde::Serialize;
use tracing::{debug, info};

use crate::access::{AccessController, Principal};
use crate::cache::{CacheKey, CacheRecord, CacheStats, ChainId, EntryStore, TxHash};
use crate::error::Result;

// == Cache Config ==
/// Snapshot of the cache configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheConfig {
    pub admin: Principal,
    pub max_entries: usize,
    pub current_entries: usize,
}

// == Tx Cache Manager ==
/// Owns the access controller and entry store for one cache instance.
///
/// Every operation runs to completion on `&mut self`; hosts sharing a
/// manager across threads must hold one lock around each call.
#[derive(Debug)]
pub struct TxCacheManager {
    access: AccessController,
    store: EntryStore,
}

impl TxCacheManager {
    // == Constructor ==
    /// Creates a manager whose admin is fixed for its lifetime.
    pub fn new(admin: Principal, max_entries: usize) -> Self {
        Self {
            access: AccessController::new(admin),
            store: EntryStore::new(max_entries),
        }
    }

    // == Set Max Cache Entries ==
    /// Admin-only. Shrinking below the current count evicts
    /// soonest-to-expire records until the store fits.
    ///
    /// Returns the evicted keys. A rejected call changes nothing.
    pub fn set_max_cache_entries(
        &mut self,
        caller: &Principal,
        max_entries: usize,
    ) -> Result<Vec<CacheKey>> {
        self.access.authorize(caller)?;

        let previous = self.store.max_entries();
        let evicted = self.store.set_max_entries(max_entries);

        info!(
            previous,
            max_entries,
            evicted = evicted.len(),
            "max cache entries updated"
        );
        for key in &evicted {
            debug!(key = %key, "evicted to fit reduced capacity");
        }

        Ok(evicted)
    }

    // == Cache Transaction ==
    /// Caches gas metadata for `(tx_hash, chain_id)` as of `now`.
    ///
    /// Re-caching an existing key replaces its record and refreshes
    /// `cached_at`. Open to any caller.
    pub fn cache_transaction(
        &mut self,
        tx_hash: TxHash,
        chain_id: ChainId,
        estimated_gas: u64,
        expiry_duration: u64,
        now: u64,
    ) -> Result<()> {
        let key = CacheKey::new(tx_hash, chain_id);
        let record = CacheRecord::new(key, estimated_gas, now, expiry_duration);

        if let Some(evicted) = self.store.insert(record)? {
            debug!(key = %evicted, "evicted to make room");
        }
        debug!(key = %key, estimated_gas, expiry_duration, now, "transaction cached");

        Ok(())
    }

    // == Get Cached Transaction ==
    /// Returns the live record for `(tx_hash, chain_id)` at `now`.
    ///
    /// Expired records read as absent and are removed on the way out.
    pub fn get_cached_transaction(
        &mut self,
        tx_hash: TxHash,
        chain_id: ChainId,
        now: u64,
    ) -> Option<CacheRecord> {
        let key = CacheKey::new(tx_hash, chain_id);

        let found = self.store.get(&key).cloned();

        match found {
            Some(record) if !record.is_expired(now) => {
                self.store.record_lookup(true);
                Some(record)
            }
            Some(_) => {
                self.store.remove(&key);
                self.store.record_lazy_expiration();
                self.store.record_lookup(false);
                debug!(key = %key, now, "dropped expired record on lookup");
                None
            }
            None => {
                self.store.record_lookup(false);
                None
            }
        }
    }

    // == Purge Expired ==
    /// Reclaims space held by expired records. Lookups are unaffected.
    pub fn purge_expired(&mut self, now: u64) -> usize {
        self.store.purge_expired(now)
    }

    pub fn config(&self) -> CacheConfig {
        CacheConfig {
            admin: self.access.admin().clone(),
            max_entries: self.store.max_entries(),
            current_entries: self.store.len(),
        }
    }

    pub fn admin(&self) -> &Principal {
        self.access.admin()
    }

    pub fn max_cache_entries(&self) -> usize {
        self.store.max_entries()
    }

    pub fn stats(&self) -> CacheStats {
        self.store.stats()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
