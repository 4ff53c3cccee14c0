//! Favorite repository for database operations

use async_trait::async_trait;
use common::error::DatabaseResult;
use sqlx::{PgPool, Row, postgres::PgRow};
use tracing::info;
use uuid::Uuid;

use super::FavoriteStore;
use crate::models::{Favorite, FavoriteDetails, Media, UserResponse};

const DETAILS_SELECT: &str = r#"
    SELECT f.id, f.user_id, f.media_id, f.created_at,
           u.name AS user_name, u.email AS user_email,
           u.created_at AS user_created_at, u.updated_at AS user_updated_at,
           m.title AS media_title, m.description AS media_description, m.type AS media_type,
           m.release_year AS media_release_year, m.genre AS media_genre,
           m.created_at AS media_created_at, m.updated_at AS media_updated_at
    FROM favorites f
    JOIN users u ON u.id = f.user_id
    JOIN media m ON m.id = f.media_id
"#;

/// Favorite repository
#[derive(Clone)]
pub struct FavoriteRepository {
    pool: PgPool,
}

impl FavoriteRepository {
    /// Create a new favorite repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn details_from_row(row: PgRow) -> Result<FavoriteDetails, sqlx::Error> {
    let user_id: Uuid = row.try_get("user_id")?;
    let media_id: Uuid = row.try_get("media_id")?;

    Ok(FavoriteDetails {
        id: row.try_get("id")?,
        user_id,
        media_id,
        created_at: row.try_get("created_at")?,
        user: UserResponse {
            id: user_id,
            name: row.try_get("user_name")?,
            email: row.try_get("user_email")?,
            created_at: row.try_get("user_created_at")?,
            updated_at: row.try_get("user_updated_at")?,
        },
        media: Media {
            id: media_id,
            title: row.try_get("media_title")?,
            description: row.try_get("media_description")?,
            media_type: row.try_get("media_type")?,
            release_year: row.try_get("media_release_year")?,
            genre: row.try_get("media_genre")?,
            created_at: row.try_get("media_created_at")?,
            updated_at: row.try_get("media_updated_at")?,
        },
    })
}

#[async_trait]
impl FavoriteStore for FavoriteRepository {
    async fn create(&self, user_id: Uuid, media_id: Uuid) -> DatabaseResult<Favorite> {
        info!("Creating favorite of media {} for user {}", media_id, user_id);

        let favorite = sqlx::query_as::<_, Favorite>(
            r#"
            INSERT INTO favorites (user_id, media_id)
            VALUES ($1, $2)
            RETURNING id, user_id, media_id, created_at
            "#,
        )
        .bind(user_id)
        .bind(media_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(favorite)
    }

    async fn get_all_by_user(&self, user_id: Uuid) -> DatabaseResult<Vec<FavoriteDetails>> {
        let query = format!("{} WHERE f.user_id = $1 ORDER BY f.created_at DESC", DETAILS_SELECT);
        let rows = sqlx::query(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        let favorites = rows
            .into_iter()
            .map(details_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(favorites)
    }

    async fn find(&self, id: Uuid, user_id: Uuid) -> DatabaseResult<Option<FavoriteDetails>> {
        let query = format!("{} WHERE f.id = $1 AND f.user_id = $2", DETAILS_SELECT);
        let row = sqlx::query(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(details_from_row).transpose()?)
    }

    async fn update(&self, favorite: &Favorite) -> DatabaseResult<Option<Favorite>> {
        info!("Updating favorite: {}", favorite.id);

        let favorite = sqlx::query_as::<_, Favorite>(
            r#"
            UPDATE favorites
            SET user_id = $2, media_id = $3
            WHERE id = $1
            RETURNING id, user_id, media_id, created_at
            "#,
        )
        .bind(favorite.id)
        .bind(favorite.user_id)
        .bind(favorite.media_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(favorite)
    }

    async fn delete(&self, id: Uuid) -> DatabaseResult<bool> {
        info!("Deleting favorite: {}", id);

        let result = sqlx::query("DELETE FROM favorites WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
