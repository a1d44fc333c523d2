//! Application state for dependency injection.

use std::sync::Arc;

use catalog_service_lib::infra::Database;
use catalog_service_lib::service::{ServiceContainer, Services};

use crate::config::GatewayConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<dyn ServiceContainer>,
    pub database: Arc<Database>,
    pub config: Arc<GatewayConfig>,
}

impl AppState {
    /// Create app state with services backed by the given database.
    pub fn from_database(database: Arc<Database>, config: GatewayConfig) -> Self {
        let services = Arc::new(Services::from_connection(database.get_connection()));
        Self::new(services, database, config)
    }

    /// Create app state with manually injected services.
    pub fn new(
        services: Arc<dyn ServiceContainer>,
        database: Arc<Database>,
        config: GatewayConfig,
    ) -> Self {
        Self {
            services,
            database,
            config: Arc::new(config),
        }
    }
}
