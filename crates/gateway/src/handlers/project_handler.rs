//! Project handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use common::AppResult;
use domain::{Component, Project, ProjectDraft};

use crate::extractors::AppJson;
use crate::state::AppState;

/// Name search query
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Case-insensitive substring of the project name
    pub name: String,
}

/// Create project routes
pub fn project_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_projects).post(create_project))
        .route("/search", get(search_projects))
        .route(
            "/:id",
            get(get_project).put(update_project).delete(delete_project),
        )
        .route("/:id/components", get(list_project_components))
}

/// List all projects
#[utoipa::path(
    get,
    path = "/projects",
    tag = "Projects",
    responses(
        (status = 200, description = "All projects, newest first", body = Vec<Project>)
    )
)]
pub async fn list_projects(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = state.services.projects().list_projects().await?;
    Ok(Json(projects))
}

/// Get project by ID
#[utoipa::path(
    get,
    path = "/projects/{id}",
    tag = "Projects",
    params(
        ("id" = String, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Project", body = Project),
        (status = 404, description = "Project not found")
    )
)]
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Project>> {
    let project = state.services.projects().get_project(&id).await?;
    Ok(Json(project))
}

/// Create a project
///
/// A missing `createdById` is attributed to the configured default owner.
#[utoipa::path(
    post,
    path = "/projects",
    tag = "Projects",
    request_body = ProjectDraft,
    responses(
        (status = 200, description = "Project created", body = Project),
        (status = 400, description = "Malformed body or missing name"),
        (status = 409, description = "Creator does not exist")
    )
)]
pub async fn create_project(
    State(state): State<AppState>,
    AppJson(mut draft): AppJson<ProjectDraft>,
) -> AppResult<Json<Project>> {
    if draft.created_by_id.is_none() {
        draft.created_by_id = Some(state.config.default_owner_id.clone());
    }

    let project = state.services.projects().create_project(draft).await?;
    Ok(Json(project))
}

/// Replace a project
#[utoipa::path(
    put,
    path = "/projects/{id}",
    tag = "Projects",
    params(
        ("id" = String, Path, description = "Project ID")
    ),
    request_body = ProjectDraft,
    responses(
        (status = 200, description = "Project updated", body = Project),
        (status = 400, description = "Malformed body or missing name"),
        (status = 404, description = "Project not found")
    )
)]
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(draft): AppJson<ProjectDraft>,
) -> AppResult<Json<Project>> {
    let project = state.services.projects().update_project(&id, draft).await?;
    Ok(Json(project))
}

/// Delete a project with its components and their dependencies
#[utoipa::path(
    delete,
    path = "/projects/{id}",
    tag = "Projects",
    params(
        ("id" = String, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Project deleted"),
        (status = 404, description = "Project not found")
    )
)]
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.services.projects().delete_project(&id).await?;
    Ok(StatusCode::OK)
}

/// Search projects by name
#[utoipa::path(
    get,
    path = "/projects/search",
    tag = "Projects",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching projects", body = Vec<Project>)
    )
)]
pub async fn search_projects(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Project>>> {
    let projects = state.services.projects().search_projects(&params.name).await?;
    Ok(Json(projects))
}

/// List components of a project
#[utoipa::path(
    get,
    path = "/projects/{id}/components",
    tag = "Projects",
    params(
        ("id" = String, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Components of the project", body = Vec<Component>)
    )
)]
pub async fn list_project_components(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Component>>> {
    let components = state
        .services
        .components()
        .list_components_by_project(&id)
        .await?;
    Ok(Json(components))
}
