//! Repository traits for data access abstraction.
//!
//! Methods return `Send` futures so that axum handlers generic over
//! `Database` stay `Send` themselves.

use std::future::Future;

use crate::db::{
    DbResult,
    models::{Album, NewAlbum},
};

/// Repository for Album operations.
pub trait AlbumRepository: Send + Sync {
    /// Get all albums ordered by id.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Album>>> + Send;

    /// Get an album by id. Returns `DbError::NotFound` if no row matches.
    fn get(&self, id: i64) -> impl Future<Output = DbResult<Album>> + Send;

    /// Insert a new album and return it with its generated id.
    fn create(&self, album: &NewAlbum) -> impl Future<Output = DbResult<Album>> + Send;

    /// Overwrite the fields of the album with the given id.
    ///
    /// Does not check that the row exists. Returns the number of rows affected.
    fn update(&self, id: i64, album: &NewAlbum) -> impl Future<Output = DbResult<u64>> + Send;

    /// Delete an album by id and return the row as it was before deletion.
    ///
    /// Returns `DbError::NotFound` if no row matches.
    fn delete(&self, id: i64) -> impl Future<Output = DbResult<Album>> + Send;
}

/// Combined database interface.
pub trait Database: Send + Sync {
    type Albums<'a>: AlbumRepository
    where
        Self: 'a;

    /// Round-trip to the backend to confirm it is reachable.
    fn ping(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Get the album repository.
    fn albums(&self) -> Self::Albums<'_>;
}
