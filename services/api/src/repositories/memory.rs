//! In-memory store used by the service and router tests
//!
//! Mirrors the constraints of the PostgreSQL schema: unique emails, foreign
//! keys from favorites to users and media, and cascading deletes.

use async_trait::async_trait;
use chrono::Utc;
use common::error::{DatabaseError, DatabaseResult};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::{FavoriteStore, MediaStore, UserStore};
use crate::models::{CreateMediaRequest, Favorite, FavoriteDetails, Media, NewUser, User};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    media: Vec<Media>,
    favorites: Vec<Favorite>,
}

impl Tables {
    fn email_taken(&self, email: &str, except: Option<Uuid>) -> bool {
        self.users
            .iter()
            .any(|u| u.email == email && Some(u.id) != except)
    }

    fn check_references(&self, user_id: Uuid, media_id: Uuid) -> DatabaseResult<()> {
        if !self.users.iter().any(|u| u.id == user_id) {
            return Err(DatabaseError::ForeignKeyViolation(
                "favorites_user_id_fkey".to_string(),
            ));
        }
        if !self.media.iter().any(|m| m.id == media_id) {
            return Err(DatabaseError::ForeignKeyViolation(
                "favorites_media_id_fkey".to_string(),
            ));
        }
        Ok(())
    }

    fn details(&self, favorite: &Favorite) -> Option<FavoriteDetails> {
        let user = self.users.iter().find(|u| u.id == favorite.user_id)?;
        let media = self.media.iter().find(|m| m.id == favorite.media_id)?;
        Some(FavoriteDetails {
            id: favorite.id,
            user_id: favorite.user_id,
            media_id: favorite.media_id,
            created_at: favorite.created_at,
            user: user.clone().into(),
            media: media.clone(),
        })
    }
}

/// Shared in-memory tables implementing every store trait
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn user_count(&self) -> usize {
        self.tables.lock().await.users.len()
    }

    pub async fn favorite_count(&self) -> usize {
        self.tables.lock().await.favorites.len()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create(&self, new_user: &NewUser) -> DatabaseResult<User> {
        let mut tables = self.tables.lock().await;
        if tables.email_taken(&new_user.email, None) {
            return Err(DatabaseError::UniqueViolation("users_email_key".to_string()));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: new_user.name.clone(),
            email: new_user.email.clone(),
            password_hash: new_user.password_hash.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn get_all(&self) -> DatabaseResult<Vec<User>> {
        let tables = self.tables.lock().await;
        let mut users = tables.users.clone();
        users.reverse();
        Ok(users)
    }

    async fn find_by_id(&self, id: Uuid) -> DatabaseResult<Option<User>> {
        let tables = self.tables.lock().await;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> DatabaseResult<Option<User>> {
        let tables = self.tables.lock().await;
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }

    async fn update(&self, user: &User) -> DatabaseResult<Option<User>> {
        let mut tables = self.tables.lock().await;
        if tables.email_taken(&user.email, Some(user.id)) {
            return Err(DatabaseError::UniqueViolation("users_email_key".to_string()));
        }

        let Some(row) = tables.users.iter_mut().find(|u| u.id == user.id) else {
            return Ok(None);
        };
        row.name = user.name.clone();
        row.email = user.email.clone();
        row.password_hash = user.password_hash.clone();
        row.updated_at = Utc::now();
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: Uuid) -> DatabaseResult<bool> {
        let mut tables = self.tables.lock().await;
        let before = tables.users.len();
        tables.users.retain(|u| u.id != id);
        tables.favorites.retain(|f| f.user_id != id);
        Ok(tables.users.len() < before)
    }
}

#[async_trait]
impl MediaStore for MemoryStore {
    async fn create(&self, media: &CreateMediaRequest) -> DatabaseResult<Media> {
        let mut tables = self.tables.lock().await;
        let now = Utc::now();
        let media = Media {
            id: Uuid::new_v4(),
            title: media.title.clone(),
            description: media.description.clone(),
            media_type: media.media_type,
            release_year: media.release_year,
            genre: media.genre.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.media.push(media.clone());
        Ok(media)
    }

    async fn get_all(&self) -> DatabaseResult<Vec<Media>> {
        let tables = self.tables.lock().await;
        let mut items = tables.media.clone();
        items.reverse();
        Ok(items)
    }

    async fn get_by_id(&self, id: Uuid) -> DatabaseResult<Option<Media>> {
        let tables = self.tables.lock().await;
        Ok(tables.media.iter().find(|m| m.id == id).cloned())
    }

    async fn update(&self, media: &Media) -> DatabaseResult<Option<Media>> {
        let mut tables = self.tables.lock().await;
        let Some(row) = tables.media.iter_mut().find(|m| m.id == media.id) else {
            return Ok(None);
        };
        *row = Media {
            created_at: row.created_at,
            updated_at: Utc::now(),
            ..media.clone()
        };
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: Uuid) -> DatabaseResult<bool> {
        let mut tables = self.tables.lock().await;
        let before = tables.media.len();
        tables.media.retain(|m| m.id != id);
        tables.favorites.retain(|f| f.media_id != id);
        Ok(tables.media.len() < before)
    }
}

#[async_trait]
impl FavoriteStore for MemoryStore {
    async fn create(&self, user_id: Uuid, media_id: Uuid) -> DatabaseResult<Favorite> {
        let mut tables = self.tables.lock().await;
        tables.check_references(user_id, media_id)?;

        let favorite = Favorite {
            id: Uuid::new_v4(),
            user_id,
            media_id,
            created_at: Utc::now(),
        };
        tables.favorites.push(favorite.clone());
        Ok(favorite)
    }

    async fn get_all_by_user(&self, user_id: Uuid) -> DatabaseResult<Vec<FavoriteDetails>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .favorites
            .iter()
            .rev()
            .filter(|f| f.user_id == user_id)
            .filter_map(|f| tables.details(f))
            .collect())
    }

    async fn find(&self, id: Uuid, user_id: Uuid) -> DatabaseResult<Option<FavoriteDetails>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .favorites
            .iter()
            .find(|f| f.id == id && f.user_id == user_id)
            .and_then(|f| tables.details(f)))
    }

    async fn update(&self, favorite: &Favorite) -> DatabaseResult<Option<Favorite>> {
        let mut tables = self.tables.lock().await;
        tables.check_references(favorite.user_id, favorite.media_id)?;

        let Some(row) = tables.favorites.iter_mut().find(|f| f.id == favorite.id) else {
            return Ok(None);
        };
        row.user_id = favorite.user_id;
        row.media_id = favorite.media_id;
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: Uuid) -> DatabaseResult<bool> {
        let mut tables = self.tables.lock().await;
        let before = tables.favorites.len();
        tables.favorites.retain(|f| f.id != id);
        Ok(tables.favorites.len() < before)
    }
}
