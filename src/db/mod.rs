//! Database abstraction layer.
//!
//! Handlers talk to storage through the traits in `repository`, so the
//! backend behind them can be swapped without touching request handling.
//!
//! # Architecture
//!
//! - `config`: Connection settings read from the environment
//! - `error`: Storage-agnostic error types
//! - `models`: The `Album` record and its write payload
//! - `repository`: Trait definitions for data access
//! - `sql`: sqlx-backed implementation (MySQL or SQLite via the `Any` driver)

mod config;
mod error;
mod models;
mod repository;
mod sql;

#[cfg(test)]
mod error_test;

pub use config::DbConfig;
pub use error::{DbError, DbResult};
pub use models::*;
pub use repository::*;
pub use sql::{ExecResult, SqlAlbumRepository, SqlDatabase};
