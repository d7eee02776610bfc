//! Employee Model

use serde::{Deserialize, Serialize};

/// Employee entity as persisted by the store.
///
/// `id` is assigned by the database on first insert and is the sole
/// addressing key shared by the store and the record cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub salary: i64,
    pub department: String,
}

/// Save/update payload.
///
/// `id` is absent on create (the store assigns one) and caller-supplied only
/// when explicitly overwriting an existing record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub salary: i64,
    pub department: String,
}
