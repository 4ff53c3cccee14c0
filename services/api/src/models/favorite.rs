//! Favorite models: the join between a user and a media item

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::{media::Media, user::UserResponse};

/// Favorite entity
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: Uuid,
    pub user_id: Uuid,
    pub media_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    /// Merge an update into the entity, leaving absent fields untouched
    pub fn apply(&mut self, update: UpdateFavoriteRequest) {
        if let Some(user_id) = update.user_id {
            self.user_id = user_id;
        }
        if let Some(media_id) = update.media_id {
            self.media_id = media_id;
        }
    }
}

/// Favorite with the owning user and the media item attached
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteDetails {
    pub id: Uuid,
    pub user_id: Uuid,
    pub media_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub user: UserResponse,
    pub media: Media,
}

/// Request for favorite creation; the user comes from the path
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateFavoriteRequest {
    pub media_id: Uuid,
}

/// Request for a partial favorite update
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateFavoriteRequest {
    pub user_id: Option<Uuid>,
    pub media_id: Option<Uuid>,
}
