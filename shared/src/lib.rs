//! Shared types for the records service
//!
//! Wire models for the employee resource, the status envelope returned by
//! write operations, and the error type used at the HTTP boundary.

pub mod error;
pub mod models;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};
