//! API Module
//!
//! HTTP handlers and routing for the transaction cache REST API.
//!
//! # Endpoints
//! - `PUT /config/max-entries` - Change capacity (admin only)
//! - `GET /config` - Current configuration
//! - `PUT /transactions` - Cache a transaction's gas metadata
//! - `GET /transactions/:chain_id/:tx_hash` - Look up a cached transaction
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
