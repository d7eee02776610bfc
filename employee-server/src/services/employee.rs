//! Employee Access Service
//!
//! Mediates every read and write between callers and the persistent store
//! while keeping the in-memory record cache coherent with it.
//!
//! Cache discipline:
//! - reads are cache-aside: cache first, store on miss, store hit populated
//!   back into the cache; a store miss ("not found") is never cached
//! - writes are write-through: the record the store returns (not the caller's
//!   input) is what lands in the cache
//! - deletes remove from the store first, then evict
//! - bulk reads seed the cache with put-if-absent only, so they never
//!   clobber an entry a concurrent update just wrote
//!
//! Every operation mutates the cache only after the store call succeeded, so
//! a failed store call leaves the cache exactly as it was.

use crate::cache::EmployeeCache;
use crate::db::models::{Employee, EmployeeInput};
use crate::db::repository::{EmployeeStore, RepoError, RepoResult};
use std::sync::Arc;

/// Cache-synchronized access layer over the employee store.
///
/// Cheap to clone; both collaborators are behind `Arc` and injected by the
/// embedding application (see `ServerState::initialize`).
#[derive(Clone)]
pub struct EmployeeService {
    store: Arc<dyn EmployeeStore>,
    cache: Arc<EmployeeCache>,
}

impl EmployeeService {
    pub fn new(store: Arc<dyn EmployeeStore>, cache: Arc<EmployeeCache>) -> Self {
        Self { store, cache }
    }

    /// All employees, in store order.
    ///
    /// Each returned record seeds the cache with put-if-absent: a bulk read
    /// must never overwrite an entry that a concurrently in-flight update may
    /// have refreshed. The store's result is returned regardless of what the
    /// cache already held.
    pub async fn list_all(&self) -> RepoResult<Vec<Employee>> {
        let employees = self.store.find_all().await?;
        for employee in &employees {
            self.cache.put_if_absent(employee.id, employee.clone());
        }
        tracing::debug!(count = employees.len(), "listed employees");
        Ok(employees)
    }

    /// Employee by id, `None` when the store has no such record.
    ///
    /// Cache hit returns without touching the store. A store hit is written
    /// into the cache before returning; a store miss is NOT cached, so a
    /// later create for the same id stays observable.
    pub async fn get_by_id(&self, id: i64) -> RepoResult<Option<Employee>> {
        if let Some(employee) = self.cache.get(id) {
            tracing::debug!(id, "cache hit");
            return Ok(Some(employee));
        }
        match self.store.find_by_id(id).await? {
            Some(employee) => {
                self.cache.put(id, employee.clone());
                Ok(Some(employee))
            }
            None => Ok(None),
        }
    }

    /// Persist an employee and mirror the result into the cache.
    ///
    /// The store assigns an id when the input carries none; the record the
    /// store returns is the one cached, keyed by its (possibly newly
    /// assigned) id.
    pub async fn save(&self, input: EmployeeInput) -> RepoResult<Employee> {
        let employee = self.store.save(input).await?;
        self.cache.put(employee.id, employee.clone());
        Ok(employee)
    }

    /// Overwrite the record at `id` with the payload, discarding any id the
    /// payload carried, then follow the same store-save-then-cache-write
    /// sequence as [`save`](Self::save).
    ///
    /// This is an upsert; callers that must not silently create are expected
    /// to have checked existence first (the PUT handler does).
    pub async fn update_by_id(&self, mut input: EmployeeInput, id: i64) -> RepoResult<Employee> {
        // Target the existing record even if the payload carried another id
        input.id = Some(id);
        let employee = self.store.save(input).await?;
        self.cache.put(employee.id, employee.clone());
        Ok(employee)
    }

    /// Delete from the store, then evict from the cache.
    ///
    /// Eviction happens only after the store call returns: the cache must
    /// never drop an entry the store still holds. A store-side NotFound
    /// still evicts; any other store failure leaves the cache untouched.
    pub async fn delete_by_id(&self, id: i64) -> RepoResult<()> {
        let result = self.store.delete_by_id(id).await;
        match &result {
            Ok(()) => self.cache.evict(id),
            Err(RepoError::NotFound(_)) => self.cache.evict(id),
            Err(_) => {}
        }
        result
    }

    /// Number of records currently cached (health reporting)
    pub fn cached_records(&self) -> usize {
        self.cache.len()
    }
}
