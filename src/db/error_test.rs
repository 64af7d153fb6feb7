//! Tests for database error types.

use crate::db::{DbError, DbResult};

#[test]
fn not_found_error_displays_correctly() {
    let err = DbError::NotFound {
        entity_type: "album".to_string(),
        id: "42".to_string(),
    };
    assert_eq!(err.to_string(), "Entity not found: album with id '42'");
}

#[test]
fn album_not_found_uses_album_entity_type() {
    let err = DbError::album_not_found(7);
    match &err {
        DbError::NotFound { entity_type, id } => {
            assert_eq!(entity_type, "album");
            assert_eq!(id, "7");
        }
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[test]
fn database_error_displays_correctly() {
    let err = DbError::Database {
        message: "no such table: album".to_string(),
    };
    assert_eq!(err.to_string(), "Database error: no such table: album");
}

#[test]
fn connection_error_displays_correctly() {
    let err = DbError::Connection {
        message: "Access denied for user".to_string(),
    };
    assert_eq!(err.to_string(), "Connection error: Access denied for user");
}

#[test]
fn decode_error_displays_correctly() {
    let err = DbError::Decode {
        message: "column price is not a number".to_string(),
    };
    assert_eq!(err.to_string(), "Decode error: column price is not a number");
}

#[test]
fn db_result_err_returns_error() {
    let result: DbResult<i64> = Err(DbError::album_not_found(1));
    assert!(result.is_err());
}
