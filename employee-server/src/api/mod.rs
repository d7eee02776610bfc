//! API Route Module
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`employees`] - employee CRUD endpoints

pub mod employees;
pub mod health;

use crate::core::ServerState;
use axum::Router;

/// Assemble the full application router
pub fn router() -> Router<ServerState> {
    Router::new().merge(health::router()).merge(employees::router())
}
