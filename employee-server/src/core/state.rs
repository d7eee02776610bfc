//! Shared Server State

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::cache::EmployeeCache;
use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::{EmployeeRepository, EmployeeStore};
use crate::services::EmployeeService;
use crate::utils::AppError;

/// Server state shared by all request handlers.
///
/// Cloning is cheap: the pool is internally shared and the access service
/// holds its collaborators behind `Arc`. The record cache lives inside the
/// access service for the lifetime of the process, with no teardown beyond
/// exit.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// Cache-synchronized employee access layer
    pub employees: EmployeeService,
}

impl ServerState {
    /// Wire up state from already-constructed parts
    pub fn new(config: Config, pool: SqlitePool, employees: EmployeeService) -> Self {
        Self {
            config,
            pool,
            employees,
        }
    }

    /// Initialize the full state: working directory, database pool and
    /// migrations, then the access service with its store and cache wired in
    /// by constructor injection.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        config.ensure_work_dir_structure()?;

        let db_path = config.database_dir().join("employee.db");
        let db = DbService::new(&db_path.to_string_lossy()).await?;

        let store: Arc<dyn EmployeeStore> = Arc::new(EmployeeRepository::new(db.pool.clone()));
        let cache = Arc::new(EmployeeCache::new());
        let employees = EmployeeService::new(store, cache);

        Ok(Self::new(config.clone(), db.pool, employees))
    }
}
