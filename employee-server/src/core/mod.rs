//! Core Module - server configuration, shared state, and HTTP bootstrap
//!
//! - [`Config`] - server configuration
//! - [`ServerState`] - shared per-request state
//! - [`Server`] - HTTP server

pub mod config;
pub mod server;
pub mod state;

pub use config::Config;
pub use server::Server;
pub use state::ServerState;
