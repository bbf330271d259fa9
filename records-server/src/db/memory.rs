//! In-memory [`EmployeeStore`] doubles for router and repository tests

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use shared::models::employee::{Employee, EmployeeRow};

use super::EmployeeStore;

/// Behaves like the `employees` table with its primary key constraint
#[derive(Default)]
pub struct MemoryEmployeeStore {
    rows: Mutex<BTreeMap<i32, EmployeeRow>>,
}

impl MemoryEmployeeStore {
    pub fn row(&self, employee_id: i32) -> Option<EmployeeRow> {
        self.rows.lock().unwrap().get(&employee_id).cloned()
    }

    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl EmployeeStore for MemoryEmployeeStore {
    async fn insert(&self, employee: &Employee) -> Result<u64, sqlx::Error> {
        let mut rows = self.rows.lock().unwrap();
        if rows.contains_key(&employee.employee_id) {
            return Err(sqlx::Error::Protocol(
                "duplicate key value violates unique constraint \"employees_pkey\"".into(),
            ));
        }
        rows.insert(employee.employee_id, EmployeeRow::from(employee));
        Ok(1)
    }

    async fn find_by_id(&self, employee_id: i32) -> Result<Vec<EmployeeRow>, sqlx::Error> {
        Ok(self.row(employee_id).into_iter().collect())
    }

    async fn update(&self, employee: &Employee) -> Result<u64, sqlx::Error> {
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(&employee.employee_id) {
            Some(row) => {
                *row = EmployeeRow::from(employee);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, employee_id: i32) -> Result<u64, sqlx::Error> {
        let removed = self.rows.lock().unwrap().remove(&employee_id);
        Ok(u64::from(removed.is_some()))
    }

    async fn ping(&self) -> bool {
        true
    }
}

/// Every statement fails the way an unreachable database does
pub struct UnavailableEmployeeStore;

#[async_trait]
impl EmployeeStore for UnavailableEmployeeStore {
    async fn insert(&self, _employee: &Employee) -> Result<u64, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn find_by_id(&self, _employee_id: i32) -> Result<Vec<EmployeeRow>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn update(&self, _employee: &Employee) -> Result<u64, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn delete(&self, _employee_id: i32) -> Result<u64, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn ping(&self) -> bool {
        false
    }
}
