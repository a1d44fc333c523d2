//! Service layer - Use cases over the repositories.
//!
//! Services own the "does it exist" checks and id handling; repositories
//! own persistence, id generation and audit stamps.

mod component_service;
mod dependency_service;
mod project_service;
mod user_service;

pub use component_service::{ComponentManager, ComponentService};
pub use dependency_service::{DependencyManager, DependencyService};
pub use project_service::{ProjectManager, ProjectService};
pub use user_service::{UserManager, UserService};

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::repository::{ComponentStore, DependencyStore, ProjectStore, UserStore};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    fn users(&self) -> Arc<dyn UserService>;

    fn projects(&self) -> Arc<dyn ProjectService>;

    fn components(&self) -> Arc<dyn ComponentService>;

    fn dependencies(&self) -> Arc<dyn DependencyService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    user_service: Arc<dyn UserService>,
    project_service: Arc<dyn ProjectService>,
    component_service: Arc<dyn ComponentService>,
    dependency_service: Arc<dyn DependencyService>,
}

impl Services {
    /// Create service container backed by the given connection pool
    pub fn from_connection(db: DatabaseConnection) -> Self {
        let users = Arc::new(UserStore::new(db.clone()));
        let projects = Arc::new(ProjectStore::new(db.clone()));
        let components = Arc::new(ComponentStore::new(db.clone()));
        let dependencies = Arc::new(DependencyStore::new(db));

        Self {
            user_service: Arc::new(UserManager::new(users)),
            project_service: Arc::new(ProjectManager::new(projects)),
            component_service: Arc::new(ComponentManager::new(components)),
            dependency_service: Arc::new(DependencyManager::new(dependencies)),
        }
    }
}

impl ServiceContainer for Services {
    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn projects(&self) -> Arc<dyn ProjectService> {
        self.project_service.clone()
    }

    fn components(&self) -> Arc<dyn ComponentService> {
        self.component_service.clone()
    }

    fn dependencies(&self) -> Arc<dyn DependencyService> {
        self.dependency_service.clone()
    }
}
