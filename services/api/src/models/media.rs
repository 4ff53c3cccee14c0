//! Media models for the API service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Kind of media title
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "media_type", rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Movie,
    Series,
}

/// Media item model
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub media_type: MediaType,
    pub release_year: i32,
    pub genre: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Media {
    /// Merge an update into the entity, leaving absent fields untouched
    pub fn apply(&mut self, update: UpdateMediaRequest) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(media_type) = update.media_type {
            self.media_type = media_type;
        }
        if let Some(release_year) = update.release_year {
            self.release_year = release_year;
        }
        if let Some(genre) = update.genre {
            self.genre = genre;
        }
    }
}

/// Request for media creation
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateMediaRequest {
    #[schema(example = "The Matrix")]
    pub title: String,
    #[schema(example = "A hacker learns the truth about his reality")]
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub media_type: MediaType,
    #[schema(example = 1999, minimum = 1800)]
    pub release_year: i32,
    #[schema(example = "sci-fi")]
    pub genre: String,
}

/// Request for a partial media update
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateMediaRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub media_type: Option<MediaType>,
    pub release_year: Option<i32>,
    pub genre: Option<String>,
}
