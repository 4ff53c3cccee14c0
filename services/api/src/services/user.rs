//! User operations

use common::error::DatabaseError;
use std::sync::Arc;
use tracing::info;

use crate::{
    error::{ApiError, ApiResult},
    models::{CreateUserRequest, NewUser, UpdateUserRequest, User, UserPatch},
    password::hash_password,
    repositories::UserStore,
    validation::parse_id,
};

const RESOURCE: &str = "User";

/// User operations over an injected store
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
}

impl UserService {
    /// Create a new user service
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Register a user; the email must not be in use
    pub async fn create(&self, request: CreateUserRequest) -> ApiResult<User> {
        if self.users.find_by_email(&request.email).await?.is_some() {
            return Err(email_in_use());
        }

        let new_user = NewUser {
            password_hash: hash_password(&request.password)?,
            name: request.name,
            email: request.email,
        };

        let user = self.users.create(&new_user).await.map_err(email_conflict)?;

        info!("User {} created", user.id);
        Ok(user)
    }

    /// Get all users
    pub async fn find_all(&self) -> ApiResult<Vec<User>> {
        Ok(self.users.get_all().await?)
    }

    /// Get a user by ID
    pub async fn find_one(&self, id: &str) -> ApiResult<User> {
        let uuid = parse_id(id, RESOURCE)?;
        self.users
            .find_by_id(uuid)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Update a user; a new password is hashed before it is stored
    pub async fn update(&self, id: &str, request: UpdateUserRequest) -> ApiResult<User> {
        let mut user = self.find_one(id).await?;

        if let Some(email) = &request.email {
            if let Some(owner) = self.users.find_by_email(email).await? {
                if owner.id != user.id {
                    return Err(email_in_use());
                }
            }
        }

        let password_hash = request.password.as_deref().map(hash_password).transpose()?;
        user.apply(UserPatch {
            name: request.name,
            email: request.email,
            password_hash,
        });

        self.users
            .update(&user)
            .await
            .map_err(email_conflict)?
            .ok_or_else(|| not_found(id))
    }

    /// Delete a user; the store cascades to its favorites
    pub async fn remove(&self, id: &str) -> ApiResult<()> {
        let user = self.find_one(id).await?;

        if !self.users.delete(user.id).await? {
            return Err(not_found(id));
        }

        info!("User {} removed", user.id);
        Ok(())
    }
}

fn not_found(id: &str) -> ApiError {
    ApiError::NotFound(format!("{} with id {} not found", RESOURCE, id))
}

fn email_in_use() -> ApiError {
    ApiError::Conflict("Email already in use".to_string())
}

/// A unique violation that slipped past the email lookup
fn email_conflict(err: DatabaseError) -> ApiError {
    match ApiError::from(err) {
        ApiError::Conflict(_) => email_in_use(),
        other => other,
    }
}
