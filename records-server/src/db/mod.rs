//! Database access layer
//!
//! [`EmployeeStore`] is the seam between the repository and SQL. The
//! production implementation is [`PgEmployeeStore`] over a shared `PgPool`.

pub mod employee;

#[cfg(test)]
pub(crate) mod memory;

use async_trait::async_trait;
use shared::models::employee::{Employee, EmployeeRow};
use sqlx::PgPool;

/// Raw employee table operations
///
/// Write operations return the affected-row-count reported by the driver.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn insert(&self, employee: &Employee) -> Result<u64, sqlx::Error>;

    async fn find_by_id(&self, employee_id: i32) -> Result<Vec<EmployeeRow>, sqlx::Error>;

    async fn update(&self, employee: &Employee) -> Result<u64, sqlx::Error>;

    async fn delete(&self, employee_id: i32) -> Result<u64, sqlx::Error>;

    /// Whether a connection to the database can currently be obtained
    async fn ping(&self) -> bool;
}

/// PostgreSQL-backed [`EmployeeStore`]
#[derive(Clone)]
pub struct PgEmployeeStore {
    pool: PgPool,
}

impl PgEmployeeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeStore for PgEmployeeStore {
    async fn insert(&self, employee: &Employee) -> Result<u64, sqlx::Error> {
        employee::insert_employee(&self.pool, employee).await
    }

    async fn find_by_id(&self, employee_id: i32) -> Result<Vec<EmployeeRow>, sqlx::Error> {
        employee::find_employees_by_id(&self.pool, employee_id).await
    }

    async fn update(&self, employee: &Employee) -> Result<u64, sqlx::Error> {
        employee::update_employee(&self.pool, employee).await
    }

    async fn delete(&self, employee_id: i32) -> Result<u64, sqlx::Error> {
        employee::delete_employee(&self.pool, employee_id).await
    }

    async fn ping(&self) -> bool {
        self.pool.acquire().await.is_ok()
    }
}
