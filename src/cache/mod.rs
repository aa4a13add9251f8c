//! Cache Module
//!
//! Capacity-bounded transaction cache with soonest-to-expire eviction and
//! expiry-aware lookup.

mod eviction;
mod key;
mod manager;
mod record;
mod stats;
mod store;


// Re-export public types
pub use eviction::ExpiryIndex;
pub use key::{CacheKey, ChainId, TxHash, TX_HASH_LEN};
pub use manager::{CacheConfig, TxCacheManager};
pub use record::CacheRecord;
pub use stats::CacheStats;
pub use store::EntryStore;
