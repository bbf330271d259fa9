//! Application state for records-server

use std::sync::Arc;

use sqlx::PgPool;

use crate::db::{EmployeeStore, PgEmployeeStore};
use crate::repository::EmployeeRepository;

/// Shared application state
///
/// Holds no request data; the connection pool behind the repository is the
/// only shared resource.
#[derive(Clone)]
pub struct AppState {
    pub employees: EmployeeRepository,
}

impl AppState {
    /// State backed by a PostgreSQL pool
    pub fn new(pool: PgPool) -> Self {
        Self::with_store(Arc::new(PgEmployeeStore::new(pool)))
    }

    /// State backed by an arbitrary store
    pub fn with_store(store: Arc<dyn EmployeeStore>) -> Self {
        Self {
            employees: EmployeeRepository::new(store),
        }
    }
}
