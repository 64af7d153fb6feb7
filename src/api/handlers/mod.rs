//! Request handlers.

mod albums;


use serde::Serialize;
use utoipa::ToSchema;

pub use albums::*;

/// Error response DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error description
    #[schema(example = "Entity not found: album with id '7'")]
    pub message: String,
}
