//! API route configuration.

use axum::Router;
use axum::routing::{delete, get, patch, post};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{self, AlbumRequest, AlbumResponse, ErrorResponse};
use super::state::AppState;
use crate::db::Database;

/// Build routes with generic database type.
///
/// Registers handlers that are generic over the Database trait, applying
/// the turbofish automatically.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Albums API",
        version = "0.1.0",
        description = "CRUD API for record albums",
        license(name = "GPL-2.0")
    ),
    paths(
        handlers::list_albums,
        handlers::get_album,
        handlers::create_album,
        handlers::update_album,
        handlers::delete_album,
    ),
    components(schemas(AlbumResponse, AlbumRequest, ErrorResponse)),
    tags(
        (name = "albums", description = "Album management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the API router with OpenAPI documentation
pub fn create_router<D: Database + 'static>(state: AppState<D>) -> Router {
    let api = ApiDoc::openapi();

    let album_routes = routes!(D => {
        get "/albums" => handlers::list_albums,
        get "/albums/{id}" => handlers::get_album,
        post "/albums" => handlers::create_album,
        patch "/albums/{id}" => handlers::update_album,
        delete "/albums/{id}" => handlers::delete_album,
    });

    album_routes
        .merge(Scalar::with_url("/docs", api))
        .with_state(state)
}
