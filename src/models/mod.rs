//! Request and Response models for the transaction cache API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{CacheTransactionRequest, SetMaxEntriesRequest};
pub use responses::{
    CacheTransactionResponse, CachedTransactionResponse, ErrorResponse, HealthResponse,
    SetMaxEntriesResponse, StatsResponse,
};
