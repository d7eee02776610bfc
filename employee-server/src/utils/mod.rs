//! Utility Module
//!
//! - [`AppError`] / [`AppResult`] - application error type and alias
//! - [`AppResponse`] - API error/success envelope
//! - logging setup

pub mod error;
pub mod logger;

pub use error::{AppError, AppResponse};

/// Application-level Result type used by HTTP handlers
pub type AppResult<T> = Result<T, AppError>;
