//! sqlx implementation of the database traits.
//!
//! Runs on the `Any` driver so the same statements serve MySQL in
//! production and SQLite for local runs and tests.

mod album;
mod connection;
mod helpers;

#[cfg(test)]
mod album_test;

pub use album::SqlAlbumRepository;
pub use connection::{ExecResult, SqlDatabase};
