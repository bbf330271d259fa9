//! Employee database operations
//!
//! One parameterized statement per operation. Each statement auto-commits;
//! nothing here opens a transaction.

use shared::models::employee::{Employee, EmployeeRow};
use sqlx::PgPool;

/// Insert one row. A duplicate `employeeid` surfaces as a driver error.
pub async fn insert_employee(pool: &PgPool, employee: &Employee) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO employees (employeeid, name, age, ssn) VALUES ($1, $2, $3, $4)",
    )
    .bind(employee.employee_id)
    .bind(&employee.name)
    .bind(employee.age)
    .bind(employee.ssn)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

pub async fn find_employees_by_id(
    pool: &PgPool,
    employee_id: i32,
) -> Result<Vec<EmployeeRow>, sqlx::Error> {
    sqlx::query_as::<_, EmployeeRow>(
        "SELECT employeeid, name, age, ssn FROM employees WHERE employeeid = $1",
    )
    .bind(employee_id)
    .fetch_all(pool)
    .await
}

/// Overwrite name, age and ssn. Returns the matched row count.
pub async fn update_employee(pool: &PgPool, employee: &Employee) -> Result<u64, sqlx::Error> {
    let result =
        sqlx::query("UPDATE employees SET name = $1, age = $2, ssn = $3 WHERE employeeid = $4")
            .bind(&employee.name)
            .bind(employee.age)
            .bind(employee.ssn)
            .bind(employee.employee_id)
            .execute(pool)
            .await?;
    Ok(result.rows_affected())
}

pub async fn delete_employee(pool: &PgPool, employee_id: i32) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM employees WHERE employeeid = $1")
        .bind(employee_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
