//! Expiry Index Module
//!
//! Orders cached keys for soonest-to-expire eviction.

use std::collections::BTreeSet;

use crate::cache::{CacheKey, CacheRecord};

// == Expiry Index ==
/// Tracks eviction order for the entry store.
///
/// Entries are ordered by `(cached_at + expiry_duration, key)`, summed
/// without saturation:
/// - First = soonest to expire, smallest key among ties (next victim)
/// - Last = latest to expire
///
/// Expired records always sort ahead of live ones, so they are chosen
/// before any live record.
#[derive(Debug, Default)]
pub struct ExpiryIndex {
    order: BTreeSet<(u128, CacheKey)>,
}

impl ExpiryIndex {
    // == Constructor ==
    pub fn new() -> Self {
        Self {
            order: BTreeSet::new(),
        }
    }

    // == Track ==
    /// Adds a record's slot to the index.
    ///
    /// Callers replacing a record must `untrack` the old one first, since
    /// the position depends on the old deadline.
    pub fn track(&mut self, record: &CacheRecord) {
        self.order.insert((record.deadline(), record.key));
    }

    // == Untrack ==
    pub fn untrack(&mut self, record: &CacheRecord) {
        self.order.remove(&(record.deadline(), record.key));
    }

    // == Peek Victim ==
    /// Returns the next eviction victim without removing it.
    pub fn peek_victim(&self) -> Option<CacheKey> {
        self.order.first().map(|(_, key)| *key)
    }

    // == Pop Victim ==
    /// Removes and returns the next eviction victim.
    pub fn pop_victim(&mut self) -> Option<CacheKey> {
        self.order.pop_first().map(|(_, key)| key)
    }

    // == Expired Prefix ==
    /// Keys whose deadline is strictly before `now`, in eviction order.
    pub fn expired_before(&self, now: u64) -> Vec<CacheKey> {
        self.order
            .iter()
            .take_while(|(deadline, _)| *deadline < now as u128)
            .map(|(_, key)| *key)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
