//! OpenAPI document for the catalog API, served by Swagger UI at `/docs`

use utoipa::OpenApi;

use crate::{
    error::ErrorResponse,
    models::{
        CreateFavoriteRequest, CreateMediaRequest, CreateUserRequest, Favorite, FavoriteDetails,
        Media, MediaType, UpdateFavoriteRequest, UpdateMediaRequest, UpdateUserRequest,
        UserResponse,
    },
    routes::{self, HealthResponse, MessageResponse},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "Users, media items and per-user favorites"
    ),
    paths(
        routes::health_check,
        routes::create_user,
        routes::get_users,
        routes::get_user,
        routes::update_user,
        routes::delete_user,
        routes::create_media,
        routes::get_media_items,
        routes::get_media_item,
        routes::update_media,
        routes::delete_media,
        routes::create_favorite,
        routes::get_favorites,
        routes::get_favorite,
        routes::update_favorite,
        routes::delete_favorite,
    ),
    components(schemas(
        CreateUserRequest,
        UpdateUserRequest,
        UserResponse,
        MediaType,
        Media,
        CreateMediaRequest,
        UpdateMediaRequest,
        Favorite,
        FavoriteDetails,
        CreateFavoriteRequest,
        UpdateFavoriteRequest,
        ErrorResponse,
        HealthResponse,
        MessageResponse,
    )),
    tags(
        (name = "health", description = "Service health checks"),
        (name = "users", description = "User registration and management"),
        (name = "media", description = "Movie and series catalog"),
        (name = "favorites", description = "Media items favorited by a user"),
    )
)]
pub struct ApiDoc;
