//! Entry Store Module
//!
//! Keyed record storage with capacity enforcement and soonest-to-expire eviction.
//! Time policy lives in the manager; the store never hides expired records.

use std::collections::HashMap;

use crate::cache::{CacheKey, CacheRecord, CacheStats, ExpiryIndex};
use crate::error::{CacheError, Result};

// == Entry Store ==
/// Record storage bounded by `max_entries`.
#[derive(Debug)]
pub struct EntryStore {
    /// Record storage
    entries: HashMap<CacheKey, CacheRecord>,
    /// Eviction order, one slot per stored record
    index: ExpiryIndex,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
}

impl EntryStore {
    // == Constructor ==
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            index: ExpiryIndex::new(),
            stats: CacheStats::new(),
            max_entries,
        }
    }

    // == Insert ==
    /// Stores a record under its key.
    ///
    /// An existing key is overwritten and keeps its slot. A new key at
    /// capacity first evicts the current victim (see [`select_victim`]).
    /// Fails with `CapacityExceeded` only when `max_entries == 0`; nothing is
    /// modified in that case.
    ///
    /// Returns the evicted key, if any.
    ///
    /// [`select_victim`]: EntryStore::select_victim
    pub fn insert(&mut self, record: CacheRecord) -> Result<Option<CacheKey>> {
        let key = record.key;

        if let Some(previous) = self.entries.get(&key) {
            self.index.untrack(previous);
            self.index.track(&record);
            self.entries.insert(key, record);
            return Ok(None);
        }

        if self.max_entries == 0 {
            return Err(CacheError::CapacityExceeded(format!(
                "cache capacity is zero, cannot store {}",
                key
            )));
        }

        let evicted = if self.entries.len() >= self.max_entries {
            self.evict_one()
        } else {
            None
        };

        self.index.track(&record);
        self.entries.insert(key, record);
        self.stats.set_total_entries(self.entries.len());

        Ok(evicted)
    }

    // == Get ==
    /// Returns the stored record regardless of expiry.
    pub fn get(&self, key: &CacheKey) -> Option<&CacheRecord> {
        self.entries.get(key)
    }

    // == Remove ==
    /// Deletes the record if present. Absent keys are a no-op.
    pub fn remove(&mut self, key: &CacheKey) -> Option<CacheRecord> {
        let removed = self.entries.remove(key)?;
        self.index.untrack(&removed);
        self.stats.set_total_entries(self.entries.len());
        Some(removed)
    }

    // == Select Victim ==
    /// The key the next eviction would remove: smallest
    /// `cached_at + expiry_duration`, then smallest key.
    pub fn select_victim(&self) -> Option<CacheKey> {
        self.index.peek_victim()
    }

    // == Evict One ==
    /// Removes the current victim and records the eviction.
    pub fn evict_one(&mut self) -> Option<CacheKey> {
        let victim = self.index.pop_victim()?;
        self.entries.remove(&victim);
        self.stats.record_eviction();
        self.stats.set_total_entries(self.entries.len());
        Some(victim)
    }

    // == Set Max Entries ==
    /// Changes the capacity, evicting until the store fits.
    ///
    /// Returns evicted keys in eviction order.
    pub fn set_max_entries(&mut self, max_entries: usize) -> Vec<CacheKey> {
        self.max_entries = max_entries;

        let mut evicted = Vec::new();
        while self.entries.len() > self.max_entries {
            match self.evict_one() {
                Some(key) => evicted.push(key),
                None => break,
            }
        }
        evicted
    }

    // == Purge Expired ==
    /// Removes every record expired at `now`.
    ///
    /// Returns the number of records removed.
    pub fn purge_expired(&mut self, now: u64) -> usize {
        let expired = self.index.expired_before(now);
        let count = expired.len();

        for key in expired {
            self.remove(&key);
        }

        self.stats.record_expirations(count);
        count
    }

    // == Record Lookup ==
    /// Counts a lookup outcome; the store itself does not judge hits.
    pub fn record_lookup(&mut self, hit: bool) {
        if hit {
            self.stats.record_hit();
        } else {
            self.stats.record_miss();
        }
    }

    /// Counts an expired record removed on lookup.
    pub fn record_lazy_expiration(&mut self) {
        self.stats.record_expirations(1);
    }

    // == Stats ==
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
