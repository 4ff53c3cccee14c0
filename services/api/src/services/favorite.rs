//! Favorite operations, always scoped by the owning user

use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult},
    models::{CreateFavoriteRequest, Favorite, FavoriteDetails, UpdateFavoriteRequest},
    repositories::{FavoriteStore, MediaStore, UserStore},
    validation::parse_id,
};

/// Favorite operations; checks that referenced users and media exist
#[derive(Clone)]
pub struct FavoriteService {
    favorites: Arc<dyn FavoriteStore>,
    users: Arc<dyn UserStore>,
    media: Arc<dyn MediaStore>,
}

impl FavoriteService {
    /// Create a new favorite service
    pub fn new(
        favorites: Arc<dyn FavoriteStore>,
        users: Arc<dyn UserStore>,
        media: Arc<dyn MediaStore>,
    ) -> Self {
        Self {
            favorites,
            users,
            media,
        }
    }

    /// Favorite a media item for the user named in the path
    pub async fn create(
        &self,
        user_id: &str,
        request: CreateFavoriteRequest,
    ) -> ApiResult<Favorite> {
        let user_id = parse_id(user_id, "User")?;
        self.ensure_references(user_id, request.media_id).await?;

        let favorite = self.favorites.create(user_id, request.media_id).await?;
        info!("Favorite {} created for user {}", favorite.id, user_id);
        Ok(favorite)
    }

    /// Get all favorites of a user with user and media attached
    pub async fn find_all(&self, user_id: &str) -> ApiResult<Vec<FavoriteDetails>> {
        let user_id = parse_id(user_id, "User")?;
        Ok(self.favorites.get_all_by_user(user_id).await?)
    }

    /// Get one favorite of a user
    pub async fn find_one(&self, id: &str, user_id: &str) -> ApiResult<FavoriteDetails> {
        let favorite_id = parse_id(id, "Favorite")?;
        let owner_id = parse_id(user_id, "User")?;

        self.favorites
            .find(favorite_id, owner_id)
            .await?
            .ok_or_else(|| not_found(id, user_id))
    }

    /// Reassign the media item or the owner of a favorite
    pub async fn update(
        &self,
        id: &str,
        user_id: &str,
        request: UpdateFavoriteRequest,
    ) -> ApiResult<Favorite> {
        let details = self.find_one(id, user_id).await?;
        let mut favorite = Favorite {
            id: details.id,
            user_id: details.user_id,
            media_id: details.media_id,
            created_at: details.created_at,
        };
        favorite.apply(request);
        self.ensure_references(favorite.user_id, favorite.media_id)
            .await?;

        self.favorites
            .update(&favorite)
            .await?
            .ok_or_else(|| not_found(id, user_id))
    }

    /// Delete one favorite of a user
    pub async fn remove(&self, id: &str, user_id: &str) -> ApiResult<()> {
        let favorite = self.find_one(id, user_id).await?;

        if !self.favorites.delete(favorite.id).await? {
            return Err(not_found(id, user_id));
        }

        info!("Favorite {} removed", favorite.id);
        Ok(())
    }

    async fn ensure_references(&self, user_id: Uuid, media_id: Uuid) -> ApiResult<()> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(ApiError::NotFound(format!(
                "User with id {} not found",
                user_id
            )));
        }
        if self.media.get_by_id(media_id).await?.is_none() {
            return Err(ApiError::NotFound(format!(
                "Media with id {} not found",
                media_id
            )));
        }
        Ok(())
    }
}

fn not_found(id: &str, user_id: &str) -> ApiError {
    ApiError::NotFound(format!(
        "Favorite with id {} for user {} not found",
        id, user_id
    ))
}
