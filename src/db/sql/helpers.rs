//! Shared helpers for the sqlx repositories.

use sqlx::Row;
use sqlx::any::AnyRow;

use crate::db::{Album, DbError};

/// Map a driver error raised while opening or pinging the pool.
pub fn connection_error(e: sqlx::Error) -> DbError {
    DbError::Connection {
        message: e.to_string(),
    }
}

/// Map a driver error raised by a statement.
pub fn database_error(e: sqlx::Error) -> DbError {
    DbError::Database {
        message: e.to_string(),
    }
}

/// Decode an album from a row by column name.
///
/// Expects the `id, title, artist, price` column list used by every album
/// query, with `price` already cast to a double.
pub fn album_from_row(row: &AnyRow) -> Result<Album, DbError> {
    let decode = |e: sqlx::Error| DbError::Decode {
        message: e.to_string(),
    };

    Ok(Album {
        id: row.try_get("id").map_err(decode)?,
        title: row.try_get("title").map_err(decode)?,
        artist: row.try_get("artist").map_err(decode)?,
        price: row.try_get("price").map_err(decode)?,
    })
}
