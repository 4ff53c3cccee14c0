//! Resource services: identifier checks, existence and uniqueness rules
//!
//! Services hold injected store handles and translate store results into
//! [`ApiResult`](crate::error::ApiResult) outcomes.

pub mod favorite;
pub mod media;
pub mod user;

pub use favorite::FavoriteService;
pub use media::MediaService;
pub use user::UserService;
