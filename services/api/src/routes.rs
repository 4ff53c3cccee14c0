//! API service routes

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    error::{ApiError, ErrorResponse},
    models::{
        CreateFavoriteRequest, CreateMediaRequest, CreateUserRequest, Favorite, FavoriteDetails,
        Media, UpdateFavoriteRequest, UpdateMediaRequest, UpdateUserRequest, UserResponse,
    },
    openapi::ApiDoc,
    state::AppState,
    validation::ValidatedJson,
};


/// Create the router for the API service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/users", get(get_users).post(create_user))
        .route(
            "/users/:user_id",
            get(get_user).patch(update_user).delete(delete_user),
        )
        .route("/media", get(get_media_items).post(create_media))
        .route(
            "/media/:id",
            get(get_media_item)
                .patch(update_media)
                .delete(delete_media),
        )
        .route(
            "/users/:user_id/favorites",
            get(get_favorites).post(create_favorite),
        )
        .route(
            "/users/:user_id/favorites/:id",
            get(get_favorite)
                .patch(update_favorite)
                .delete(delete_favorite),
        )
        .merge(SwaggerUi::new("/docs").url("/docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    #[schema(example = "catalog-api")]
    pub service: String,
}

/// Confirmation returned by delete operations
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "User deleted successfully")]
    pub message: String,
}

impl MessageResponse {
    fn json(message: &str) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
        })
    }
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: "catalog-api".to_string(),
    })
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 409, description = "Email already in use", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.user_service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Get all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses((status = 200, description = "All users", body = [UserResponse]))
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let users: Vec<UserResponse> = state
        .user_service
        .find_all()
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    Ok(Json(users))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = "users",
    params(("user_id" = String, Path, description = "User UUID")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.user_service.find_one(&id).await?;

    Ok(Json(UserResponse::from(user)))
}

/// Update a user by ID
#[utoipa::path(
    patch,
    path = "/users/{user_id}",
    tag = "users",
    params(("user_id" = String, Path, description = "User UUID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "Email already in use", body = ErrorResponse)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.user_service.update(&id, payload).await?;

    Ok(Json(UserResponse::from(user)))
}

/// Delete a user by ID
#[utoipa::path(
    delete,
    path = "/users/{user_id}",
    tag = "users",
    params(("user_id" = String, Path, description = "User UUID")),
    responses(
        (status = 200, description = "User and its favorites deleted", body = MessageResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.user_service.remove(&id).await?;

    Ok(MessageResponse::json("User deleted successfully"))
}

/// Create a media item
#[utoipa::path(
    post,
    path = "/media",
    tag = "media",
    request_body = CreateMediaRequest,
    responses(
        (status = 201, description = "Media item created", body = Media),
        (status = 400, description = "Invalid input", body = ErrorResponse)
    )
)]
pub async fn create_media(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateMediaRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let media = state.media_service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(media)))
}

/// Get all media items
#[utoipa::path(
    get,
    path = "/media",
    tag = "media",
    responses((status = 200, description = "All media items", body = [Media]))
)]
pub async fn get_media_items(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.media_service.find_all().await?))
}

/// Get a media item by ID
#[utoipa::path(
    get,
    path = "/media/{id}",
    tag = "media",
    params(("id" = String, Path, description = "Media UUID")),
    responses(
        (status = 200, description = "Media item found", body = Media),
        (status = 404, description = "Media item not found", body = ErrorResponse)
    )
)]
pub async fn get_media_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.media_service.find_one(&id).await?))
}

/// Update a media item by ID
#[utoipa::path(
    patch,
    path = "/media/{id}",
    tag = "media",
    params(("id" = String, Path, description = "Media UUID")),
    request_body = UpdateMediaRequest,
    responses(
        (status = 200, description = "Media item updated", body = Media),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "Media item not found", body = ErrorResponse)
    )
)]
pub async fn update_media(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateMediaRequest>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.media_service.update(&id, payload).await?))
}

/// Delete a media item by ID
#[utoipa::path(
    delete,
    path = "/media/{id}",
    tag = "media",
    params(("id" = String, Path, description = "Media UUID")),
    responses(
        (status = 200, description = "Media item deleted", body = MessageResponse),
        (status = 404, description = "Media item not found", body = ErrorResponse)
    )
)]
pub async fn delete_media(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.media_service.remove(&id).await?;

    Ok(MessageResponse::json("Media deleted successfully"))
}

/// Favorite a media item for a user
#[utoipa::path(
    post,
    path = "/users/{user_id}/favorites",
    tag = "favorites",
    params(("user_id" = String, Path, description = "User UUID")),
    request_body = CreateFavoriteRequest,
    responses(
        (status = 201, description = "Favorite created", body = Favorite),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "User or media item not found", body = ErrorResponse)
    )
)]
pub async fn create_favorite(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    ValidatedJson(payload): ValidatedJson<CreateFavoriteRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let favorite = state.favorite_service.create(&user_id, payload).await?;

    Ok((StatusCode::CREATED, Json(favorite)))
}

/// Get all favorites of a user, with user and media attached
#[utoipa::path(
    get,
    path = "/users/{user_id}/favorites",
    tag = "favorites",
    params(("user_id" = String, Path, description = "User UUID")),
    responses(
        (status = 200, description = "Favorites of the user", body = [FavoriteDetails]),
        (status = 404, description = "Malformed user id", body = ErrorResponse)
    )
)]
pub async fn get_favorites(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.favorite_service.find_all(&user_id).await?))
}

/// Get one favorite of a user
#[utoipa::path(
    get,
    path = "/users/{user_id}/favorites/{id}",
    tag = "favorites",
    params(
        ("user_id" = String, Path, description = "User UUID"),
        ("id" = String, Path, description = "Favorite UUID")
    ),
    responses(
        (status = 200, description = "Favorite found", body = FavoriteDetails),
        (status = 404, description = "Favorite not found", body = ErrorResponse)
    )
)]
pub async fn get_favorite(
    State(state): State<AppState>,
    Path((user_id, id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.favorite_service.find_one(&id, &user_id).await?))
}

/// Update one favorite of a user
#[utoipa::path(
    patch,
    path = "/users/{user_id}/favorites/{id}",
    tag = "favorites",
    params(
        ("user_id" = String, Path, description = "User UUID"),
        ("id" = String, Path, description = "Favorite UUID")
    ),
    request_body = UpdateFavoriteRequest,
    responses(
        (status = 200, description = "Favorite updated", body = Favorite),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "Favorite not found", body = ErrorResponse)
    )
)]
pub async fn update_favorite(
    State(state): State<AppState>,
    Path((user_id, id)): Path<(String, String)>,
    ValidatedJson(payload): ValidatedJson<UpdateFavoriteRequest>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(
        state
            .favorite_service
            .update(&id, &user_id, payload)
            .await?,
    ))
}

/// Delete one favorite of a user
#[utoipa::path(
    delete,
    path = "/users/{user_id}/favorites/{id}",
    tag = "favorites",
    params(
        ("user_id" = String, Path, description = "User UUID"),
        ("id" = String, Path, description = "Favorite UUID")
    ),
    responses(
        (status = 200, description = "Favorite deleted", body = MessageResponse),
        (status = 404, description = "Favorite not found", body = ErrorResponse)
    )
)]
pub async fn delete_favorite(
    State(state): State<AppState>,
    Path((user_id, id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    state.favorite_service.remove(&id, &user_id).await?;

    Ok(MessageResponse::json("Favorite deleted successfully"))
}
