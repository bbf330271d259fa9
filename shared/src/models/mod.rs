//! Data models
//!
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.

pub mod employee;
pub mod status;

// Re-exports
pub use employee::*;
pub use status::*;
