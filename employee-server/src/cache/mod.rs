//! Record Cache
//!
//! Process-local `id -> Employee` map shared by every request handler for
//! the lifetime of the server. Purely an acceleration structure: losing it
//! can only make reads slower, never incorrect. Unbounded, no TTL, no
//! background eviction; invalidation is explicit and done by the access
//! service.

use crate::db::models::Employee;
use dashmap::DashMap;

/// Concurrent cache of the last-known record per employee id.
///
/// Must tolerate concurrent get/put/evict from multiple tasks without
/// corruption; DashMap provides that without external locking.
#[derive(Debug, Default)]
pub struct EmployeeCache {
    entries: DashMap<i64, Employee>,
}

impl EmployeeCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Cached record for `id`, if any. No side effects, no store access.
    pub fn get(&self, id: i64) -> Option<Employee> {
        self.entries.get(&id).map(|entry| entry.clone())
    }

    /// Unconditional overwrite. Used by the write-through save/update paths
    /// and by single-record read population.
    pub fn put(&self, id: i64, employee: Employee) {
        self.entries.insert(id, employee);
    }

    /// Insert only when no entry exists for `id`. Used to seed the cache
    /// from bulk reads without clobbering a fresher entry written by a
    /// concurrent update.
    pub fn put_if_absent(&self, id: i64, employee: Employee) {
        self.entries.entry(id).or_insert(employee);
    }

    /// Remove the entry for `id`; a no-op when absent.
    pub fn evict(&self, id: i64) {
        self.entries.remove(&id);
    }

    /// Number of cached entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn employee(id: i64, name: &str) -> Employee {
        Employee {
            id,
            name: name.to_string(),
            salary: 1000,
            department: "Engineering".to_string(),
        }
    }

    #[test]
    fn test_put_get_evict() {
        let cache = EmployeeCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.get(1), None);

        cache.put(1, employee(1, "Alice"));
        assert_eq!(cache.get(1).map(|e| e.name), Some("Alice".to_string()));
        assert_eq!(cache.len(), 1);

        // put overwrites unconditionally
        cache.put(1, employee(1, "Bob"));
        assert_eq!(cache.get(1).map(|e| e.name), Some("Bob".to_string()));
        assert_eq!(cache.len(), 1);

        cache.evict(1);
        assert_eq!(cache.get(1), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_put_if_absent_keeps_first_value() {
        let cache = EmployeeCache::new();
        cache.put_if_absent(7, employee(7, "First"));
        cache.put_if_absent(7, employee(7, "Second"));
        assert_eq!(cache.get(7).map(|e| e.name), Some("First".to_string()));
    }

    #[test]
    fn test_evict_absent_is_noop() {
        let cache = EmployeeCache::new();
        cache.evict(42);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_concurrent_access() {
        let cache = Arc::new(EmployeeCache::new());
        let mut handles = Vec::new();

        for t in 0..8i64 {
            let cache = cache.clone();
            handles.push(std::thread::spawn(move || {
                for i in 0..200i64 {
                    let id = i % 20;
                    cache.put(id, employee(id, &format!("worker-{t}")));
                    cache.put_if_absent(id + 100, employee(id + 100, "seeded"));
                    let _ = cache.get(id);
                    if i % 7 == 0 {
                        cache.evict(id);
                    }
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        // Entries written with put_if_absent were never evicted and must all
        // survive with their original value.
        for id in 100..120 {
            assert_eq!(cache.get(id).map(|e| e.name), Some("seeded".to_string()));
        }
        // Every remaining low entry holds a record keyed consistently.
        for id in 0..20 {
            if let Some(e) = cache.get(id) {
                assert_eq!(e.id, id);
            }
        }
    }
}
