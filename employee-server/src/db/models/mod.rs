//! Data Models

pub mod employee;

pub use employee::{Employee, EmployeeInput};
