//! Service Layer
//!
//! Domain orchestration between the HTTP handlers and the database.

pub mod employee;

pub use employee::EmployeeService;
