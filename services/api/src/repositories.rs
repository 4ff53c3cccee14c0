//! Repositories for database operations
//!
//! Each resource is reached through a store trait so the services only ever
//! hold an injected handle. The PostgreSQL implementations live in the
//! submodules; the test build adds an in-memory one.

use async_trait::async_trait;
use common::error::DatabaseResult;
use uuid::Uuid;

use crate::models::{CreateMediaRequest, Favorite, FavoriteDetails, Media, NewUser, User};

pub mod favorite;
pub mod media;
pub mod user;

#[cfg(test)]
pub mod memory;

pub use favorite::FavoriteRepository;
pub use media::MediaRepository;
pub use user::UserRepository;

/// Persistence for users
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create(&self, new_user: &NewUser) -> DatabaseResult<User>;
    async fn get_all(&self) -> DatabaseResult<Vec<User>>;
    async fn find_by_id(&self, id: Uuid) -> DatabaseResult<Option<User>>;
    async fn find_by_email(&self, email: &str) -> DatabaseResult<Option<User>>;
    /// Persist every mutable column of `user`; `None` if the row vanished
    async fn update(&self, user: &User) -> DatabaseResult<Option<User>>;
    /// Returns whether a row was deleted
    async fn delete(&self, id: Uuid) -> DatabaseResult<bool>;
}

/// Persistence for media items
#[async_trait]
pub trait MediaStore: Send + Sync {
    async fn create(&self, media: &CreateMediaRequest) -> DatabaseResult<Media>;
    async fn get_all(&self) -> DatabaseResult<Vec<Media>>;
    async fn get_by_id(&self, id: Uuid) -> DatabaseResult<Option<Media>>;
    async fn update(&self, media: &Media) -> DatabaseResult<Option<Media>>;
    async fn delete(&self, id: Uuid) -> DatabaseResult<bool>;
}

/// Persistence for favorites
#[async_trait]
pub trait FavoriteStore: Send + Sync {
    async fn create(&self, user_id: Uuid, media_id: Uuid) -> DatabaseResult<Favorite>;
    async fn get_all_by_user(&self, user_id: Uuid) -> DatabaseResult<Vec<FavoriteDetails>>;
    async fn find(&self, id: Uuid, user_id: Uuid) -> DatabaseResult<Option<FavoriteDetails>>;
    async fn update(&self, favorite: &Favorite) -> DatabaseResult<Option<Favorite>>;
    async fn delete(&self, id: Uuid) -> DatabaseResult<bool>;
}
