//! Media repository for database operations

use async_trait::async_trait;
use common::error::DatabaseResult;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use super::MediaStore;
use crate::models::{CreateMediaRequest, Media};

/// Media repository for database operations
#[derive(Clone)]
pub struct MediaRepository {
    pool: PgPool,
}

impl MediaRepository {
    /// Create a new media repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MediaStore for MediaRepository {
    async fn create(&self, media: &CreateMediaRequest) -> DatabaseResult<Media> {
        info!("Creating media item: {}", media.title);

        let media = sqlx::query_as::<_, Media>(
            r#"
            INSERT INTO media (title, description, type, release_year, genre)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, description, type, release_year, genre, created_at, updated_at
            "#,
        )
        .bind(&media.title)
        .bind(&media.description)
        .bind(media.media_type)
        .bind(media.release_year)
        .bind(&media.genre)
        .fetch_one(&self.pool)
        .await?;

        Ok(media)
    }

    async fn get_all(&self) -> DatabaseResult<Vec<Media>> {
        let items = sqlx::query_as::<_, Media>(
            r#"
            SELECT id, title, description, type, release_year, genre, created_at, updated_at
            FROM media
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    async fn get_by_id(&self, id: Uuid) -> DatabaseResult<Option<Media>> {
        let media = sqlx::query_as::<_, Media>(
            r#"
            SELECT id, title, description, type, release_year, genre, created_at, updated_at
            FROM media
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(media)
    }

    async fn update(&self, media: &Media) -> DatabaseResult<Option<Media>> {
        info!("Updating media item: {}", media.id);

        let media = sqlx::query_as::<_, Media>(
            r#"
            UPDATE media
            SET title = $2, description = $3, type = $4, release_year = $5, genre = $6,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, description, type, release_year, genre, created_at, updated_at
            "#,
        )
        .bind(media.id)
        .bind(&media.title)
        .bind(&media.description)
        .bind(media.media_type)
        .bind(media.release_year)
        .bind(&media.genre)
        .fetch_optional(&self.pool)
        .await?;

        Ok(media)
    }

    async fn delete(&self, id: Uuid) -> DatabaseResult<bool> {
        info!("Deleting media item: {}", id);

        let result = sqlx::query("DELETE FROM media WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
