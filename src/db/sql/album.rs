//! SQL AlbumRepository implementation.

use tracing::debug;

use super::connection::SqlDatabase;
use super::helpers::{album_from_row, database_error};
use crate::db::{Album, AlbumRepository, DbError, DbResult, NewAlbum};

const SELECT_ALL: &str =
    "SELECT id, title, artist, CAST(price AS DOUBLE) AS price FROM album ORDER BY id";
const SELECT_BY_ID: &str =
    "SELECT id, title, artist, CAST(price AS DOUBLE) AS price FROM album WHERE id = ?";
const INSERT: &str = "INSERT INTO album (title, artist, price) VALUES (?, ?, ?)";
const UPDATE: &str = "UPDATE album SET title = ?, artist = ?, price = ? WHERE id = ?";
const DELETE: &str = "DELETE FROM album WHERE id = ?";

/// sqlx-backed album repository.
pub struct SqlAlbumRepository<'a> {
    pub(crate) db: &'a SqlDatabase,
}

impl<'a> AlbumRepository for SqlAlbumRepository<'a> {
    async fn list(&self) -> DbResult<Vec<Album>> {
        let rows = self.db.query(sqlx::query(SELECT_ALL)).await?;
        rows.iter().map(album_from_row).collect()
    }

    async fn get(&self, id: i64) -> DbResult<Album> {
        let row = self
            .db
            .query_one(sqlx::query(SELECT_BY_ID).bind(id))
            .await?
            .ok_or_else(|| DbError::album_not_found(id))?;

        album_from_row(&row)
    }

    async fn create(&self, album: &NewAlbum) -> DbResult<Album> {
        let result = self
            .db
            .exec(
                sqlx::query(INSERT)
                    .bind(album.title.as_str())
                    .bind(album.artist.as_str())
                    .bind(album.price),
            )
            .await?;

        let id = result.last_insert_id.ok_or_else(|| DbError::Database {
            message: "insert did not report a generated id".to_string(),
        })?;
        debug!(id, "Album inserted");

        Ok(album.clone().with_id(id))
    }

    async fn update(&self, id: i64, album: &NewAlbum) -> DbResult<u64> {
        let result = self
            .db
            .exec(
                sqlx::query(UPDATE)
                    .bind(album.title.as_str())
                    .bind(album.artist.as_str())
                    .bind(album.price)
                    .bind(id),
            )
            .await?;

        Ok(result.rows_affected)
    }

    async fn delete(&self, id: i64) -> DbResult<Album> {
        // Existence check and delete run in one transaction.
        let mut tx = self.db.begin().await?;

        let row = sqlx::query(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(database_error)?
            .ok_or_else(|| DbError::album_not_found(id))?;
        let album = album_from_row(&row)?;

        sqlx::query(DELETE)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(database_error)?;

        tx.commit().await.map_err(database_error)?;
        debug!(id, "Album deleted");

        Ok(album)
    }
}
