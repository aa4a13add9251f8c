//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Expiry purge: Reclaims expired records at configured intervals

mod cleanup;

pub use cleanup::spawn_cleanup_task;
