//! Domain models for the album store.
//!
//! These models are storage-agnostic. JSON field names are fixed to
//! `id`, `title`, `artist` and `price`.

use serde::{Deserialize, Serialize};

/// A stored album.
///
/// `id` is assigned by the storage layer on insert and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

/// Field values for inserting or overwriting an album.
///
/// Carries no id: create gets one from the database, update takes it from
/// the request path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAlbum {
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl NewAlbum {
    /// Attach a storage-assigned id.
    pub fn with_id(self, id: i64) -> Album {
        Album {
            id,
            title: self.title,
            artist: self.artist,
            price: self.price,
        }
    }
}
