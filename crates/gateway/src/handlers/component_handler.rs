//! Component handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

use common::AppResult;
use domain::{Component, ComponentDraft, Dependency};

use crate::extractors::AppJson;
use crate::state::AppState;

/// Create component routes
pub fn component_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_components).post(create_component))
        .route(
            "/:id",
            get(get_component)
                .put(update_component)
                .delete(delete_component),
        )
        .route("/:id/dependencies", get(list_component_dependencies))
}

/// List all components
#[utoipa::path(
    get,
    path = "/components",
    tag = "Components",
    responses(
        (status = 200, description = "All components, newest first", body = Vec<Component>)
    )
)]
pub async fn list_components(State(state): State<AppState>) -> AppResult<Json<Vec<Component>>> {
    let components = state.services.components().list_components().await?;
    Ok(Json(components))
}

/// Get component by ID
#[utoipa::path(
    get,
    path = "/components/{id}",
    tag = "Components",
    params(
        ("id" = String, Path, description = "Component ID")
    ),
    responses(
        (status = 200, description = "Component", body = Component),
        (status = 404, description = "Component not found")
    )
)]
pub async fn get_component(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Component>> {
    let component = state.services.components().get_component(&id).await?;
    Ok(Json(component))
}

/// Create a component
#[utoipa::path(
    post,
    path = "/components",
    tag = "Components",
    request_body = ComponentDraft,
    responses(
        (status = 200, description = "Component created", body = Component),
        (status = 400, description = "Malformed body or missing field"),
        (status = 409, description = "Project does not exist")
    )
)]
pub async fn create_component(
    State(state): State<AppState>,
    AppJson(draft): AppJson<ComponentDraft>,
) -> AppResult<Json<Component>> {
    let component = state.services.components().create_component(draft).await?;
    Ok(Json(component))
}

/// Replace a component
#[utoipa::path(
    put,
    path = "/components/{id}",
    tag = "Components",
    params(
        ("id" = String, Path, description = "Component ID")
    ),
    request_body = ComponentDraft,
    responses(
        (status = 200, description = "Component updated", body = Component),
        (status = 404, description = "Component not found")
    )
)]
pub async fn update_component(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(draft): AppJson<ComponentDraft>,
) -> AppResult<Json<Component>> {
    let component = state
        .services
        .components()
        .update_component(&id, draft)
        .await?;
    Ok(Json(component))
}

/// Delete a component with its dependencies
#[utoipa::path(
    delete,
    path = "/components/{id}",
    tag = "Components",
    params(
        ("id" = String, Path, description = "Component ID")
    ),
    responses(
        (status = 200, description = "Component deleted"),
        (status = 404, description = "Component not found")
    )
)]
pub async fn delete_component(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.services.components().delete_component(&id).await?;
    Ok(StatusCode::OK)
}

/// List dependencies declared by a component
#[utoipa::path(
    get,
    path = "/components/{id}/dependencies",
    tag = "Components",
    params(
        ("id" = String, Path, description = "Component ID")
    ),
    responses(
        (status = 200, description = "Dependencies of the component", body = Vec<Dependency>)
    )
)]
pub async fn list_component_dependencies(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Dependency>>> {
    let dependencies = state
        .services
        .dependencies()
        .list_dependencies_by_component(&id)
        .await?;
    Ok(Json(dependencies))
}
