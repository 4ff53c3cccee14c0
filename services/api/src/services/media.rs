//! Media operations

use std::sync::Arc;
use tracing::info;

use crate::{
    error::{ApiError, ApiResult},
    models::{CreateMediaRequest, Media, UpdateMediaRequest},
    repositories::MediaStore,
    validation::parse_id,
};

const RESOURCE: &str = "Media";

/// Media item operations over an injected store
#[derive(Clone)]
pub struct MediaService {
    media: Arc<dyn MediaStore>,
}

impl MediaService {
    /// Create a new media service
    pub fn new(media: Arc<dyn MediaStore>) -> Self {
        Self { media }
    }

    /// Create a media item
    pub async fn create(&self, request: CreateMediaRequest) -> ApiResult<Media> {
        let media = self.media.create(&request).await?;
        info!("Media {} created", media.id);
        Ok(media)
    }

    /// Get all media items
    pub async fn find_all(&self) -> ApiResult<Vec<Media>> {
        Ok(self.media.get_all().await?)
    }

    /// Get a media item by ID
    pub async fn find_one(&self, id: &str) -> ApiResult<Media> {
        let uuid = parse_id(id, RESOURCE)?;
        self.media
            .get_by_id(uuid)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Update the fields present in the request
    pub async fn update(&self, id: &str, request: UpdateMediaRequest) -> ApiResult<Media> {
        let mut media = self.find_one(id).await?;
        media.apply(request);

        self.media
            .update(&media)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Delete a media item; the store cascades to favorites pointing at it
    pub async fn remove(&self, id: &str) -> ApiResult<()> {
        let media = self.find_one(id).await?;

        if !self.media.delete(media.id).await? {
            return Err(not_found(id));
        }

        info!("Media {} removed", media.id);
        Ok(())
    }
}

fn not_found(id: &str) -> ApiError {
    ApiError::NotFound(format!("{} with id {} not found", RESOURCE, id))
}
