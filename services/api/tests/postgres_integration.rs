//! Integration tests against a live PostgreSQL database
//!
//! The embedded migrations are applied to the database named by
//! `DATABASE_URL`, then the repositories and the router are driven against
//! it. Every test uses fresh e-mail addresses so runs can share a database.
//! Ignored by default.

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use catalog_api::{
    MIGRATOR,
    error::ApiError,
    models::{CreateMediaRequest, MediaType, NewUser},
    repositories::{
        FavoriteRepository, FavoriteStore, MediaRepository, MediaStore, UserRepository, UserStore,
    },
    routes::create_router,
    state::AppState,
};
use common::{
    database::{DatabaseConfig, init_pool, run_migrations},
    error::DatabaseError,
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

async fn pool() -> Result<PgPool, Box<dyn std::error::Error>> {
    let config = DatabaseConfig::from_env()?;
    let pool = init_pool(&config).await?;
    run_migrations(&pool, &MIGRATOR).await?;
    Ok(pool)
}

fn unique_email() -> String {
    format!("{}@example.com", Uuid::new_v4().simple())
}

fn new_user(email: &str) -> NewUser {
    NewUser {
        name: "Maria Silva".to_string(),
        email: email.to_string(),
        password_hash: "not-a-real-hash".to_string(),
    }
}

fn series() -> CreateMediaRequest {
    CreateMediaRequest {
        title: "Dark".to_string(),
        description: None,
        media_type: MediaType::Series,
        release_year: 2017,
        genre: "thriller".to_string(),
    }
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

async fn favorite_rows(pool: &PgPool, user_id: Uuid) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM favorites WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_duplicate_email_is_a_unique_violation() -> Result<(), Box<dyn std::error::Error>> {
    let pool = pool().await?;
    let users = UserRepository::new(pool.clone());
    let email = unique_email();

    users.create(&new_user(&email)).await?;
    let err = users.create(&new_user(&email)).await.unwrap_err();

    match &err {
        DatabaseError::UniqueViolation(constraint) => assert_eq!(constraint, "users_email_key"),
        other => panic!("expected a unique violation, got {:?}", other),
    }
    assert!(matches!(ApiError::from(err), ApiError::Conflict(_)));

    // same outcome through the HTTP surface
    let app = create_router(AppState::from_pool(pool));
    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({ "name": "Jane Doe", "email": email, "password": "secret123" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Email already in use");

    Ok(())
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_dangling_favorite_is_a_foreign_key_violation()
-> Result<(), Box<dyn std::error::Error>> {
    let pool = pool().await?;
    let favorites = FavoriteRepository::new(pool);

    let err = favorites
        .create(Uuid::new_v4(), Uuid::new_v4())
        .await
        .unwrap_err();

    assert!(matches!(err, DatabaseError::ForeignKeyViolation(_)));
    assert!(matches!(ApiError::from(err), ApiError::NotFound(_)));

    Ok(())
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_media_type_is_stored_as_enum() -> Result<(), Box<dyn std::error::Error>> {
    let pool = pool().await?;
    let media = MediaRepository::new(pool.clone());

    let mut created = media.create(&series()).await?;
    assert_eq!(created.media_type, MediaType::Series);
    assert_eq!(created.description, None);

    let stored: String = sqlx::query_scalar("SELECT type::text FROM media WHERE id = $1")
        .bind(created.id)
        .fetch_one(&pool)
        .await?;
    assert_eq!(stored, "series");

    created.media_type = MediaType::Movie;
    created.description = Some("Time travel".to_string());
    let updated = media.update(&created).await?.unwrap();
    assert_eq!(updated.media_type, MediaType::Movie);
    assert_eq!(updated.description.as_deref(), Some("Time travel"));
    assert!(updated.updated_at >= updated.created_at);

    assert!(media.delete(created.id).await?);
    assert!(media.get_by_id(created.id).await?.is_none());

    Ok(())
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_favorite_listing_joins_user_and_media() -> Result<(), Box<dyn std::error::Error>> {
    let pool = pool().await?;
    let users = UserRepository::new(pool.clone());
    let media = MediaRepository::new(pool.clone());
    let favorites = FavoriteRepository::new(pool.clone());

    let email = unique_email();
    let user = users.create(&new_user(&email)).await?;
    let older = media.create(&series()).await?;
    let newer = media.create(&series()).await?;
    let first = favorites.create(user.id, older.id).await?;
    let second = favorites.create(user.id, newer.id).await?;

    let listed = favorites.get_all_by_user(user.id).await?;
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, second.id);
    assert_eq!(listed[1].id, first.id);
    assert_eq!(listed[0].user.email, email);
    assert_eq!(listed[0].media.media_type, MediaType::Series);
    assert_eq!(listed[0].media.id, newer.id);

    // scoped by owner
    assert!(favorites.find(first.id, Uuid::new_v4()).await?.is_none());
    let found = favorites.find(first.id, user.id).await?.unwrap();
    assert_eq!(found.media.title, "Dark");

    let app = create_router(AppState::from_pool(pool));
    let uri = format!("/users/{}/favorites", user.id);
    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["media"]["type"], "series");
    assert_eq!(body[0]["user"]["email"], email.as_str());
    assert!(body[0]["user"].get("passwordHash").is_none());

    Ok(())
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_deletes_cascade_to_favorites() -> Result<(), Box<dyn std::error::Error>> {
    let pool = pool().await?;
    let users = UserRepository::new(pool.clone());
    let media = MediaRepository::new(pool.clone());
    let favorites = FavoriteRepository::new(pool.clone());

    let user = users.create(&new_user(&unique_email())).await?;
    let kept = media.create(&series()).await?;
    let removed = media.create(&series()).await?;
    favorites.create(user.id, kept.id).await?;
    favorites.create(user.id, removed.id).await?;
    assert_eq!(favorite_rows(&pool, user.id).await, 2);

    let app = create_router(AppState::from_pool(pool.clone()));

    let uri = format!("/media/{}", removed.id);
    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(favorite_rows(&pool, user.id).await, 1);

    let uri = format!("/users/{}", user.id);
    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User deleted successfully");
    assert_eq!(favorite_rows(&pool, user.id).await, 0);

    // the media item outlives the user
    assert!(media.get_by_id(kept.id).await?.is_some());

    Ok(())
}
