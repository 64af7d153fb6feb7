//! Album management handlers.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};
use utoipa::ToSchema;

use crate::api::AppState;
use crate::db::{Album, AlbumRepository, Database, DbError, NewAlbum};

use super::ErrorResponse;

// =============================================================================
// DTOs (Data Transfer Objects)
// =============================================================================

/// Album response DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct AlbumResponse {
    /// Server-generated identifier
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Blue Train")]
    pub title: String,
    #[schema(example = "John Coltrane")]
    pub artist: String,
    #[schema(example = 56.99)]
    pub price: f64,
}

impl From<Album> for AlbumResponse {
    fn from(a: Album) -> Self {
        Self {
            id: a.id,
            title: a.title,
            artist: a.artist,
            price: a.price,
        }
    }
}

/// Create/update album request DTO
///
/// Any `id` in the body is ignored; the server assigns ids on create and
/// takes them from the path on update.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AlbumRequest {
    #[schema(example = "Blue Train")]
    pub title: String,
    #[schema(example = "John Coltrane")]
    pub artist: String,
    #[schema(example = 56.99)]
    pub price: f64,
}

impl From<AlbumRequest> for NewAlbum {
    fn from(r: AlbumRequest) -> Self {
        Self {
            title: r.title,
            artist: r.artist,
            price: r.price,
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// List all albums
#[utoipa::path(
    get,
    path = "/albums",
    tag = "albums",
    responses(
        (status = 200, description = "All albums", body = Vec<AlbumResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_albums<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<Vec<AlbumResponse>>, (StatusCode, Json<ErrorResponse>)> {
    let albums = state.db().albums().list().await.map_err(|e| {
        warn!(error = %e, "Failed to list albums");
        error_response(StatusCode::INTERNAL_SERVER_ERROR, e)
    })?;

    Ok(Json(albums.into_iter().map(AlbumResponse::from).collect()))
}

/// Get an album by ID
#[utoipa::path(
    get,
    path = "/albums/{id}",
    tag = "albums",
    params(
        ("id" = i64, Path, description = "Album ID")
    ),
    responses(
        (status = 200, description = "Album found", body = AlbumResponse),
        (status = 404, description = "Album not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_album<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<Json<AlbumResponse>, (StatusCode, Json<ErrorResponse>)> {
    let album_id = parse_id(&id).ok_or_else(|| {
        error_response(StatusCode::NOT_FOUND, DbError::album_not_found(&id))
    })?;

    let album = state.db().albums().get(album_id).await.map_err(|e| match e {
        DbError::NotFound { .. } => error_response(StatusCode::NOT_FOUND, e),
        _ => {
            warn!(error = %e, id = album_id, "Failed to fetch album");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e)
        }
    })?;

    Ok(Json(AlbumResponse::from(album)))
}

/// Create a new album
#[utoipa::path(
    post,
    path = "/albums",
    tag = "albums",
    request_body = AlbumRequest,
    responses(
        (status = 201, description = "Album created", body = AlbumResponse),
        (status = 422, description = "Malformed body or insert failed", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_album<D: Database>(
    State(state): State<AppState<D>>,
    payload: Result<Json<AlbumRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AlbumResponse>), (StatusCode, Json<ErrorResponse>)> {
    let Json(req) = payload.map_err(|rejection| {
        debug!(error = %rejection.body_text(), "Rejected album body");
        error_response(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
    })?;

    let new_album = NewAlbum::from(req);
    let album = state
        .db()
        .albums()
        .create(&new_album)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to create album");
            error_response(StatusCode::UNPROCESSABLE_ENTITY, e)
        })?;

    Ok((StatusCode::CREATED, Json(AlbumResponse::from(album))))
}

/// Update an album
///
/// Overwrites title, artist and price. An id with no matching album is not
/// an error.
#[utoipa::path(
    patch,
    path = "/albums/{id}",
    tag = "albums",
    params(
        ("id" = i64, Path, description = "Album ID")
    ),
    request_body = AlbumRequest,
    responses(
        (status = 204, description = "Album updated"),
        (status = 400, description = "Malformed body or update failed", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_album<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
    payload: Result<Json<AlbumRequest>, JsonRejection>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    let Json(req) = payload.map_err(|rejection| {
        debug!(error = %rejection.body_text(), "Rejected album body");
        error_response(StatusCode::BAD_REQUEST, rejection.body_text())
    })?;

    let album_id = parse_id(&id).ok_or_else(|| {
        error_response(StatusCode::BAD_REQUEST, format!("Invalid album id '{}'", id))
    })?;

    let rows_affected = state
        .db()
        .albums()
        .update(album_id, &NewAlbum::from(req))
        .await
        .map_err(|e| {
            warn!(error = %e, id = album_id, "Failed to update album");
            error_response(StatusCode::BAD_REQUEST, e)
        })?;

    if rows_affected == 0 {
        debug!(id = album_id, "Update matched no album");
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Delete an album
#[utoipa::path(
    delete,
    path = "/albums/{id}",
    tag = "albums",
    params(
        ("id" = i64, Path, description = "Album ID")
    ),
    responses(
        (status = 204, description = "Album deleted"),
        (status = 404, description = "Album not found", body = ErrorResponse),
        (status = 422, description = "Delete failed", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_album<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    let album_id = parse_id(&id).ok_or_else(|| {
        error_response(StatusCode::NOT_FOUND, DbError::album_not_found(&id))
    })?;

    let album = state.db().albums().delete(album_id).await.map_err(|e| match e {
        DbError::NotFound { .. } => error_response(StatusCode::NOT_FOUND, e),
        _ => {
            warn!(error = %e, id = album_id, "Failed to delete album");
            error_response(StatusCode::UNPROCESSABLE_ENTITY, e)
        }
    })?;
    debug!(id = album.id, title = %album.title, "Album removed");

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Helpers
// =============================================================================

/// Path ids that are not integers cannot match any row.
fn parse_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

fn error_response(
    status: StatusCode,
    message: impl ToString,
) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            message: message.to_string(),
        }),
    )
}
