//! HTTP server configuration

use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use std::path::PathBuf;

/// Load a `.env` file from the working directory or its parents
///
/// Variables already present in the process environment are left untouched.
/// Returns the path of the loaded file, or `None` when there is no file.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl ServerConfig {
    /// Load the server configuration
    ///
    /// # Environment Variables
    /// - `API_HOST`: interface to bind (default: "0.0.0.0")
    /// - `API_PORT`: port to listen on (default: 3001)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 3001)?
            .add_source(Environment::with_prefix("API").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Address to bind the listener to
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
