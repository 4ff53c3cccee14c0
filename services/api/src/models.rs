//! API models for request and response payloads

pub mod favorite;
pub mod media;
pub mod user;

pub use favorite::{CreateFavoriteRequest, Favorite, FavoriteDetails, UpdateFavoriteRequest};
pub use media::{CreateMediaRequest, Media, MediaType, UpdateMediaRequest};
pub use user::{CreateUserRequest, NewUser, UpdateUserRequest, User, UserPatch, UserResponse};
