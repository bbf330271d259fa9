//! records-server — employee records REST service
//!
//! Four resources under `/records/employee` mapped onto parameterized SQL
//! against a single PostgreSQL table:
//! - POST   `/employee`       insert
//! - GET    `/employee/{id}`  select by id
//! - PUT    `/employee`       update by id
//! - DELETE `/employee/{id}`  delete by id

pub mod api;
pub mod config;
pub mod db;
pub mod repository;
pub mod state;

pub use config::Config;
pub use state::AppState;
