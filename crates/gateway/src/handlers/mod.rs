//! HTTP request handlers.

pub mod component_handler;
pub mod dependency_handler;
pub mod health_handler;
pub mod project_handler;
pub mod user_handler;

pub use component_handler::component_routes;
pub use dependency_handler::dependency_routes;
pub use health_handler::health_routes;
pub use project_handler::project_routes;
pub use user_handler::user_routes;
