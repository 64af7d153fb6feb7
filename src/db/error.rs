//! Database error types.
//!
//! Uses thiserror for the derives and miette for diagnostic output. The
//! variants do not depend on any particular backend.

use miette::Diagnostic;
use thiserror::Error;

/// Database operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Entity not found: {entity_type} with id '{id}'")]
    #[diagnostic(code(albums::db::not_found))]
    NotFound { entity_type: String, id: String },

    #[error("Connection error: {message}")]
    #[diagnostic(
        code(albums::db::connection_error),
        help("Check that the database is running and that DBUSER/DBPASS are set")
    )]
    Connection { message: String },

    #[error("Database error: {message}")]
    #[diagnostic(code(albums::db::database_error))]
    Database { message: String },

    #[error("Decode error: {message}")]
    #[diagnostic(code(albums::db::decode_error))]
    Decode { message: String },
}

impl DbError {
    /// Not-found error for an album id.
    pub fn album_not_found(id: impl ToString) -> Self {
        DbError::NotFound {
            entity_type: "album".to_string(),
            id: id.to_string(),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
