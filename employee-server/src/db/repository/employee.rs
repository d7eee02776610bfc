//! Employee Repository
//!
//! SQLite implementation of [`EmployeeStore`].

use super::{EmployeeStore, RepoError, RepoResult};
use crate::db::models::{Employee, EmployeeInput};
use async_trait::async_trait;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct EmployeeRepository {
    pool: SqlitePool,
}

impl EmployeeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeStore for EmployeeRepository {
    async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(
            "SELECT id, name, salary, department FROM employee ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(employees)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(
            "SELECT id, name, salary, department FROM employee WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(employee)
    }

    async fn save(&self, input: EmployeeInput) -> RepoResult<Employee> {
        // RETURNING gives back the authoritative row, including an id
        // assigned by the database when the input carried none.
        let employee = match input.id {
            Some(id) => {
                sqlx::query_as::<_, Employee>(
                    "INSERT INTO employee (id, name, salary, department) VALUES (?, ?, ?, ?) \
                     ON CONFLICT(id) DO UPDATE SET \
                         name = excluded.name, \
                         salary = excluded.salary, \
                         department = excluded.department \
                     RETURNING id, name, salary, department",
                )
                .bind(id)
                .bind(&input.name)
                .bind(input.salary)
                .bind(&input.department)
                .fetch_one(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Employee>(
                    "INSERT INTO employee (name, salary, department) VALUES (?, ?, ?) \
                     RETURNING id, name, salary, department",
                )
                .bind(&input.name)
                .bind(input.salary)
                .bind(&input.department)
                .fetch_one(&self.pool)
                .await?
            }
        };
        Ok(employee)
    }

    async fn delete_by_id(&self, id: i64) -> RepoResult<()> {
        let rows = sqlx::query("DELETE FROM employee WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if rows.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("Employee {id} not found")));
        }
        Ok(())
    }
}
