//! Gateway configuration.

use std::env;

use common::{CorsConfig, DatabaseConfig, ServerConfig};
use domain::DEFAULT_OWNER_ID;

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
    /// User stamped on records created without an explicit owner
    pub default_owner_id: String,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            cors: CorsConfig::from_env(),
            default_owner_id: env::var("DEFAULT_OWNER_ID")
                .unwrap_or_else(|_| DEFAULT_OWNER_ID.to_string()),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            cors: CorsConfig::default(),
            default_owner_id: DEFAULT_OWNER_ID.to_string(),
        }
    }
}
