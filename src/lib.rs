//! Tx Gas Cache - capacity-bounded cache for transaction gas metadata
//!
//! Records are keyed by (transaction hash, chain id), expire after a
//! per-record duration, and are evicted soonest-to-expire first when the
//! admin-configured capacity is reached.

pub mod access;
pub mod api;
pub mod cache;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use access::{AccessController, Principal};
pub use api::AppState;
pub use cache::{CacheKey, CacheRecord, TxCacheManager, TxHash};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::Config;
pub use error::CacheError;
pub use tasks::spawn_cleanup_task;
