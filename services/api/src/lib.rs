//! Catalog API service
//!
//! Users, media items and per-user favorites exposed over HTTP and stored in
//! PostgreSQL. The binary in `main.rs` wires configuration, the pool and the
//! router built by [`routes::create_router`].

use sqlx::migrate::Migrator;

pub mod config;
pub mod error;
pub mod models;
pub mod openapi;
pub mod password;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod validation;

/// Embedded schema migrations
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");
