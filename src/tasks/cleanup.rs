//! Expired Record Purge Task
//!
//! Background task that periodically reclaims space held by expired records.
//! Lookups already treat expired records as absent, so this never changes
//! what callers observe and never evicts live records.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::api::AppState;

/// Spawns a background task that periodically purges expired records.
///
/// Each run reads `now` from the state's clock and holds the write lock for
/// the purge only.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let state = AppState::from_config(&config);
/// let cleanup_handle = spawn_cleanup_task(state.clone(), 1);
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task(state: AppState, cleanup_interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting expired-record purge task with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            // Acquire write lock, then read the clock and purge
            let removed = {
                let mut cache = state.cache.write().await;
                let now = state.clock.now();
                cache.purge_expired(now)
            };

            // Log purge statistics
            if removed > 0 {
                info!("Expiry purge: removed {} expired records", removed);
            } else {
                debug!("Expiry purge: no expired records found");
            }
        }
    })
}
