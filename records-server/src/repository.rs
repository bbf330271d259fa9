//! Employee repository
//!
//! Runs one [`EmployeeStore`] operation per call and folds the outcome into
//! the value the router sends back. Driver errors never escape: they become
//! a status envelope carrying the driver's message.

use std::sync::Arc;

use serde::Serialize;
use shared::models::employee::{Employee, EmployeeRow};
use shared::models::status::{
    DATA_NOT_DELETED, DATA_NOT_INSERTED, DATA_NOT_RETRIEVED, DATA_NOT_UPDATED, StatusEnvelope,
};

use crate::db::EmployeeStore;

/// Result of a lookup by id
///
/// Serializes as a bare JSON array of rows, or as a status envelope when the
/// query itself failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Retrieved {
    Rows(Vec<EmployeeRow>),
    Failed(StatusEnvelope),
}

#[derive(Clone)]
pub struct EmployeeRepository {
    store: Arc<dyn EmployeeStore>,
}

impl EmployeeRepository {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    /// Any non-error outcome counts as inserted; there is no existence check.
    pub async fn insert(&self, employee: &Employee) -> StatusEnvelope {
        match self.store.insert(employee).await {
            Ok(_) => StatusEnvelope::inserted(),
            Err(e) => {
                tracing::error!(employee_id = employee.employee_id, error = %e, "Insert failed");
                StatusEnvelope::failed(DATA_NOT_INSERTED, e)
            }
        }
    }

    /// No match is an empty array, not an error.
    pub async fn retrieve_by_id(&self, employee_id: i32) -> Retrieved {
        match self.store.find_by_id(employee_id).await {
            Ok(rows) => Retrieved::Rows(rows),
            Err(e) => {
                tracing::error!(employee_id, error = %e, "Lookup failed");
                Retrieved::Failed(StatusEnvelope::failed(DATA_NOT_RETRIEVED, e))
            }
        }
    }

    /// Zero matched rows reports `Data Not Updated` without an error.
    pub async fn update(&self, employee: &Employee) -> StatusEnvelope {
        match self.store.update(employee).await {
            Ok(0) => StatusEnvelope::not_updated(),
            Ok(_) => StatusEnvelope::updated(),
            Err(e) => {
                tracing::error!(employee_id = employee.employee_id, error = %e, "Update failed");
                StatusEnvelope::failed(DATA_NOT_UPDATED, e)
            }
        }
    }

    /// The affected-row-count is ignored: a miss still reports deleted.
    pub async fn delete(&self, employee_id: i32) -> StatusEnvelope {
        match self.store.delete(employee_id).await {
            Ok(_) => StatusEnvelope::deleted(),
            Err(e) => {
                tracing::error!(employee_id, error = %e, "Delete failed");
                StatusEnvelope::failed(DATA_NOT_DELETED, e)
            }
        }
    }

    pub async fn is_healthy(&self) -> bool {
        self.store.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::{MemoryEmployeeStore, UnavailableEmployeeStore};
    use shared::models::status::{DATA_DELETED, DATA_INSERTED, DATA_UPDATED};

    fn alice() -> Employee {
        Employee {
            employee_id: 1,
            name: "Alice".to_string(),
            age: 20,
            ssn: 123456789,
        }
    }

    fn repo() -> (Arc<MemoryEmployeeStore>, EmployeeRepository) {
        let store = Arc::new(MemoryEmployeeStore::default());
        (store.clone(), EmployeeRepository::new(store))
    }

    #[tokio::test]
    async fn test_insert_then_retrieve() {
        let (_, repo) = repo();
        assert_eq!(repo.insert(&alice()).await.status, DATA_INSERTED);

        let rows = repo.retrieve_by_id(1).await;
        assert_eq!(rows, Retrieved::Rows(vec![EmployeeRow::from(&alice())]));
    }

    #[tokio::test]
    async fn test_duplicate_insert_reports_driver_error() {
        let (_, repo) = repo();
        repo.insert(&alice()).await;

        let env = repo.insert(&alice()).await;
        assert_eq!(env.status, DATA_NOT_INSERTED);
        assert!(env.error.unwrap().contains("duplicate key"));
    }

    #[tokio::test]
    async fn test_retrieve_missing_is_empty() {
        let (_, repo) = repo();
        assert_eq!(repo.retrieve_by_id(42).await, Retrieved::Rows(vec![]));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_updated_without_error() {
        let (store, repo) = repo();
        let env = repo.update(&alice()).await;
        assert_eq!(env, StatusEnvelope::not_updated());
        assert_eq!(store.row_count(), 0);
    }

    #[tokio::test]
    async fn test_update_existing() {
        let (store, repo) = repo();
        repo.insert(&alice()).await;

        let mut changed = alice();
        changed.name = "Alice Updated".to_string();
        changed.age = 30;
        assert_eq!(repo.update(&changed).await.status, DATA_UPDATED);
        assert_eq!(store.row(1), Some(EmployeeRow::from(&changed)));
    }

    #[tokio::test]
    async fn test_delete_ignores_match_count() {
        let (_, repo) = repo();
        assert_eq!(repo.delete(7).await, StatusEnvelope::status(DATA_DELETED));

        repo.insert(&alice()).await;
        assert_eq!(repo.delete(1).await, StatusEnvelope::status(DATA_DELETED));
        assert_eq!(repo.retrieve_by_id(1).await, Retrieved::Rows(vec![]));
    }

    #[tokio::test]
    async fn test_driver_errors_fold_into_envelopes() {
        let repo = EmployeeRepository::new(Arc::new(UnavailableEmployeeStore));
        let message = sqlx::Error::PoolTimedOut.to_string();

        assert_eq!(
            repo.insert(&alice()).await,
            StatusEnvelope::failed(DATA_NOT_INSERTED, &message)
        );
        assert_eq!(
            repo.update(&alice()).await,
            StatusEnvelope::failed(DATA_NOT_UPDATED, &message)
        );
        assert_eq!(
            repo.delete(1).await,
            StatusEnvelope::failed(DATA_NOT_DELETED, &message)
        );
        assert_eq!(
            repo.retrieve_by_id(1).await,
            Retrieved::Failed(StatusEnvelope::failed(DATA_NOT_RETRIEVED, &message))
        );
        assert!(!repo.is_healthy().await);
    }
}
