//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::health_handler::{HealthResponse, ServiceHealth, ServiceStatus};
use domain::{
    Component, ComponentDraft, Dependency, DependencyDraft, Project, ProjectDraft, User, UserRole,
};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health_handler::health_check,
        crate::handlers::project_handler::list_projects,
        crate::handlers::project_handler::get_project,
        crate::handlers::project_handler::create_project,
        crate::handlers::project_handler::update_project,
        crate::handlers::project_handler::delete_project,
        crate::handlers::project_handler::search_projects,
        crate::handlers::project_handler::list_project_components,
        crate::handlers::component_handler::list_components,
        crate::handlers::component_handler::get_component,
        crate::handlers::component_handler::create_component,
        crate::handlers::component_handler::update_component,
        crate::handlers::component_handler::delete_component,
        crate::handlers::component_handler::list_component_dependencies,
        crate::handlers::dependency_handler::list_dependencies,
        crate::handlers::dependency_handler::get_dependency,
        crate::handlers::dependency_handler::create_dependency,
        crate::handlers::dependency_handler::update_dependency,
        crate::handlers::dependency_handler::delete_dependency,
        crate::handlers::user_handler::get_user,
        crate::handlers::user_handler::list_user_projects,
    ),
    components(
        schemas(
            Project,
            ProjectDraft,
            Component,
            ComponentDraft,
            Dependency,
            DependencyDraft,
            User,
            UserRole,
            HealthResponse,
            ServiceStatus,
            ServiceHealth,
        )
    ),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Projects", description = "Tracked software projects"),
        (name = "Components", description = "Modules within a project"),
        (name = "Dependencies", description = "Gradle dependencies declared by components"),
        (name = "Users", description = "Record owners"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_project_routes() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/projects"));
        assert!(doc.paths.paths.contains_key("/projects/{id}"));
        assert!(doc.paths.paths.contains_key("/projects/search"));
    }
}
