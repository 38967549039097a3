//! freelance-server: HTTP API over freelancers, orders and qualifications
//!
//! Layers, bottom up:
//! - [`db`]: PostgreSQL pool, entity repositories with explicit transactions,
//!   relation repositories that run on a caller-owned connection
//! - [`service`]: DTO mapping and business rules (unique email on register)
//! - [`http`]: axum routes mapping outcomes to status codes

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod service;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{AppConfig, DatabaseConfig};
pub use db::{Database, DbError};
pub use http::{run_server, ServerConfig};
pub use state::AppState;
