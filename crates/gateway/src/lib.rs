//! API Gateway Library
//!
//! HTTP REST API over the catalog services: projects, components,
//! dependencies and users.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use catalog_service_lib::infra::Database;
use tracing::info;

use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize database
    let database = Arc::new(Database::connect(&config.database).await?);

    // Create app state
    let state = AppState::from_database(database, config);

    // Records created without an owner point at this user
    state
        .services
        .users()
        .ensure_default_owner(&state.config.default_owner_id)
        .await?;

    // Build address
    let addr: SocketAddr = state.config.server.addr().parse()?;

    // Build router
    let app = create_router(state);

    info!("Gateway listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
