//! Input validation utilities
//!
//! Bodies go through [`ValidatedJson`]: a deserialization failure or a rule
//! violation becomes a 400. Path identifiers go through [`parse_id`], which
//! reports a malformed identifier as a missing record.

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use chrono::{Datelike, Utc};
use regex::Regex;
use serde::de::DeserializeOwned;
use std::sync::OnceLock;
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult},
    models::{
        CreateFavoriteRequest, CreateMediaRequest, CreateUserRequest, UpdateFavoriteRequest,
        UpdateMediaRequest, UpdateUserRequest,
    },
};

/// Earliest accepted release year
pub const MIN_RELEASE_YEAR: i32 = 1800;

/// Field-level rules checked after deserialization
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// JSON body extractor that rejects malformed or invalid payloads with 400
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value.validate().map_err(ApiError::BadRequest)?;

        Ok(ValidatedJson(value))
    }
}

/// Parse a path identifier; anything but a hyphenated UUID is reported as not found
pub fn parse_id(raw: &str, resource: &str) -> ApiResult<Uuid> {
    if raw.len() != 36 {
        return Err(not_found(resource, raw));
    }
    Uuid::parse_str(raw).map_err(|_| not_found(resource, raw))
}

fn not_found(resource: &str, raw: &str) -> ApiError {
    ApiError::NotFound(format!("{} with id {} not found", resource, raw))
}

/// Validate name
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name is required".to_string());
    }

    if name.chars().count() < 3 {
        return Err("Name must be at least 3 characters long".to_string());
    }

    Ok(())
}

/// Validate email
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email is required".to_string());
    }

    if email.len() > 254 {
        return Err("Email must be at most 254 characters long".to_string());
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }

    Ok(())
}

/// Validate password
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.chars().count() < 6 {
        return Err("Password must be at least 6 characters long".to_string());
    }

    if password.len() > 128 {
        return Err("Password must be at most 128 bytes long".to_string());
    }

    Ok(())
}

/// Validate media title
pub fn validate_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Title is required".to_string());
    }

    Ok(())
}

/// Validate release year against [1800, current year]
pub fn validate_release_year(year: i32) -> Result<(), String> {
    let current_year = Utc::now().year();
    if !(MIN_RELEASE_YEAR..=current_year).contains(&year) {
        return Err(format!(
            "releaseYear must be between {} and {}",
            MIN_RELEASE_YEAR, current_year
        ));
    }

    Ok(())
}

impl Validate for CreateUserRequest {
    fn validate(&self) -> Result<(), String> {
        validate_name(&self.name)?;
        validate_email(&self.email)?;
        validate_password(&self.password)
    }
}

impl Validate for UpdateUserRequest {
    fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        if let Some(password) = &self.password {
            validate_password(password)?;
        }
        Ok(())
    }
}

impl Validate for CreateMediaRequest {
    fn validate(&self) -> Result<(), String> {
        validate_title(&self.title)?;
        validate_release_year(self.release_year)
    }
}

impl Validate for UpdateMediaRequest {
    fn validate(&self) -> Result<(), String> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        if let Some(year) = self.release_year {
            validate_release_year(year)?;
        }
        Ok(())
    }
}

// Shape checks are done by serde; a body UUID that fails to parse never gets here.
impl Validate for CreateFavoriteRequest {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl Validate for UpdateFavoriteRequest {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}
