//! Employee Model
//!
//! The table is `EMPLOYEES(EmployeeID INT PRIMARY KEY, Name VARCHAR(50),
//! Age INT, SSN INT)`. PostgreSQL folds the unquoted identifiers to lower
//! case, so rows are read from `employees(employeeid, name, age, ssn)`.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Message returned for any request body that is not a valid employee
pub const EMPLOYEE_SHAPE_MESSAGE: &str = "Invalid employee payload: expected \
     {\"name\": string, \"age\": int, \"ssn\": int, \"employeeId\": int} \
     with a non-empty name and nonzero age, ssn and employeeId";

/// Message returned when the `{employeeId}` path segment is not an integer
pub const INVALID_EMPLOYEE_ID_MESSAGE: &str = "invalid employee ID";

/// Create / update employee payload (POST and PUT bodies)
///
/// Every field is required; a missing field fails deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayload {
    pub name: String,
    pub age: i32,
    pub ssn: i32,
    pub employee_id: i32,
}

impl EmployeePayload {
    /// Check the payload and turn it into an [`Employee`]
    pub fn validate(self) -> Result<Employee, AppError> {
        if self.name.is_empty() || self.age == 0 || self.ssn == 0 || self.employee_id == 0 {
            return Err(AppError::validation(EMPLOYEE_SHAPE_MESSAGE));
        }
        Ok(Employee {
            employee_id: self.employee_id,
            name: self.name,
            age: self.age,
            ssn: self.ssn,
        })
    }
}

/// Validated employee, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub employee_id: i32,
    pub name: String,
    pub age: i32,
    pub ssn: i32,
}

impl TryFrom<EmployeePayload> for Employee {
    type Error = AppError;

    fn try_from(payload: EmployeePayload) -> Result<Self, Self::Error> {
        payload.validate()
    }
}

/// One `employees` row as returned by GET
///
/// `Name`, `Age` and `SSN` carry no NOT NULL constraint in the schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct EmployeeRow {
    #[serde(rename = "EmployeeID")]
    #[cfg_attr(feature = "db", sqlx(rename = "employeeid"))]
    pub employee_id: i32,
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Age")]
    pub age: Option<i32>,
    #[serde(rename = "SSN")]
    pub ssn: Option<i32>,
}

impl From<&Employee> for EmployeeRow {
    fn from(e: &Employee) -> Self {
        Self {
            employee_id: e.employee_id,
            name: Some(e.name.clone()),
            age: Some(e.age),
            ssn: Some(e.ssn),
        }
    }
}
