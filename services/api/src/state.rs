//! Application state shared across handlers

use sqlx::PgPool;
use std::sync::Arc;

use crate::{
    repositories::{
        FavoriteRepository, FavoriteStore, MediaRepository, MediaStore, UserRepository, UserStore,
    },
    services::{FavoriteService, MediaService, UserService},
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
    pub media_service: MediaService,
    pub favorite_service: FavoriteService,
}

impl AppState {
    /// Wire the services on top of the given stores
    pub fn new(
        users: Arc<dyn UserStore>,
        media: Arc<dyn MediaStore>,
        favorites: Arc<dyn FavoriteStore>,
    ) -> Self {
        Self {
            user_service: UserService::new(users.clone()),
            media_service: MediaService::new(media.clone()),
            favorite_service: FavoriteService::new(favorites, users, media),
        }
    }

    /// Wire the PostgreSQL repositories, each holding a handle to the same pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(
            Arc::new(UserRepository::new(pool.clone())),
            Arc::new(MediaRepository::new(pool.clone())),
            Arc::new(FavoriteRepository::new(pool)),
        )
    }
}
