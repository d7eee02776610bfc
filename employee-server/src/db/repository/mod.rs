//! Repository Module
//!
//! The persistent-store side of the access layer: error taxonomy, the
//! [`EmployeeStore`] contract, and its SQLite implementation.

pub mod employee;

pub use employee::EmployeeRepository;

use crate::db::models::{Employee, EmployeeInput};
use async_trait::async_trait;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    /// Requested identifier absent from the store. Recoverable by the caller.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The store could not complete the operation. Propagated as-is.
    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Persistent store contract for employee records.
///
/// Object-safe so the access service can hold `Arc<dyn EmployeeStore>` and
/// tests can inject an in-memory double.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// All records, in store order.
    async fn find_all(&self) -> RepoResult<Vec<Employee>>;

    /// Single record by id; `None` when the id does not exist.
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Employee>>;

    /// Insert-or-replace. Assigns an id when the input carries none and
    /// returns the authoritative persisted record.
    async fn save(&self, input: EmployeeInput) -> RepoResult<Employee>;

    /// Delete by id. Fails with [`RepoError::NotFound`] when the id does not
    /// exist.
    async fn delete_by_id(&self, id: i64) -> RepoResult<()>;
}
