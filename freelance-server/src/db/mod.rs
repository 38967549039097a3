//! Database layer - connection pool, transactions and repositories
//!
//! # Design Principles
//!
//! - One explicitly constructed [`Database`] handle, injected everywhere
//! - Relation repositories borrow the caller's connection, never their own
//! - Multi-statement work commits as a unit or rolls back as a unit
//! - List operations return shallow rows (no per-row relation queries)

pub mod error;
pub mod mappers;
pub mod migrations;
pub mod pool;
pub mod relations;
pub mod repos;
pub mod tx;

pub use error::DbError;
pub use pool::Database;
pub use repos::*;
pub use tx::{finish, Tx};
