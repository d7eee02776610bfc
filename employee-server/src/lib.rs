//! Employee Server - record-management service with a cache-synchronized
//! access layer
//!
//! # Architecture
//!
//! Every read and write flows through the employee access service, which
//! keeps a process-local record cache coherent with the SQLite store:
//! reads are cache-aside, writes are write-through, deletes evict after the
//! store confirms, and bulk reads seed the cache without clobbering fresher
//! entries.
//!
//! # Module structure
//!
//! ```text
//! employee-server/src/
//! ├── core/          # configuration, state, HTTP bootstrap
//! ├── api/           # HTTP routes and handlers
//! ├── cache/         # in-memory record cache
//! ├── services/      # employee access service (cache/store orchestration)
//! ├── db/            # SQLite pool, models, repository
//! └── utils/         # errors, logging
//! ```

pub mod api;
pub mod cache;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export common types
pub use cache::EmployeeCache;
pub use core::{Config, Server, ServerState};
pub use db::models::{Employee, EmployeeInput};
pub use db::repository::{EmployeeRepository, EmployeeStore, RepoError, RepoResult};
pub use services::EmployeeService;
pub use utils::{AppError, AppResult};

/// Prepare the process environment: load `.env`, then initialize logging.
///
/// In production the log stream goes to a daily-rotated file under the work
/// directory; everywhere else it goes to stdout. `LOG_LEVEL` overrides the
/// default `info`.
pub fn setup_environment() -> Result<(), AppError> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    let level = std::env::var("LOG_LEVEL").ok();

    if config.is_production() {
        config.ensure_work_dir_structure()?;
        let log_dir = config.log_dir();
        utils::logger::init_logger_with_file(level.as_deref(), log_dir.to_str());
    } else {
        utils::logger::init_logger(level.as_deref());
    }

    Ok(())
}
