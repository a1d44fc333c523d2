//! Dependency handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

use common::AppResult;
use domain::{Dependency, DependencyDraft};

use crate::extractors::AppJson;
use crate::state::AppState;

/// Create dependency routes
pub fn dependency_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_dependencies).post(create_dependency))
        .route(
            "/:id",
            get(get_dependency)
                .put(update_dependency)
                .delete(delete_dependency),
        )
}

/// List all dependencies
#[utoipa::path(
    get,
    path = "/dependencies",
    tag = "Dependencies",
    responses(
        (status = 200, description = "All dependencies, newest first", body = Vec<Dependency>)
    )
)]
pub async fn list_dependencies(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Dependency>>> {
    let dependencies = state.services.dependencies().list_dependencies().await?;
    Ok(Json(dependencies))
}

/// Get dependency by ID
#[utoipa::path(
    get,
    path = "/dependencies/{id}",
    tag = "Dependencies",
    params(
        ("id" = String, Path, description = "Dependency ID")
    ),
    responses(
        (status = 200, description = "Dependency", body = Dependency),
        (status = 404, description = "Dependency not found")
    )
)]
pub async fn get_dependency(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Dependency>> {
    let dependency = state.services.dependencies().get_dependency(&id).await?;
    Ok(Json(dependency))
}

/// Add a dependency to a component
///
/// A missing `addedById` is attributed to the configured default owner.
#[utoipa::path(
    post,
    path = "/dependencies",
    tag = "Dependencies",
    request_body = DependencyDraft,
    responses(
        (status = 200, description = "Dependency created", body = Dependency),
        (status = 400, description = "Malformed body or missing field"),
        (status = 409, description = "Component or user does not exist")
    )
)]
pub async fn create_dependency(
    State(state): State<AppState>,
    AppJson(mut draft): AppJson<DependencyDraft>,
) -> AppResult<Json<Dependency>> {
    if draft.added_by_id.is_none() {
        draft.added_by_id = Some(state.config.default_owner_id.clone());
    }

    let dependency = state.services.dependencies().create_dependency(draft).await?;
    Ok(Json(dependency))
}

/// Replace a dependency
#[utoipa::path(
    put,
    path = "/dependencies/{id}",
    tag = "Dependencies",
    params(
        ("id" = String, Path, description = "Dependency ID")
    ),
    request_body = DependencyDraft,
    responses(
        (status = 200, description = "Dependency updated", body = Dependency),
        (status = 404, description = "Dependency not found")
    )
)]
pub async fn update_dependency(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(draft): AppJson<DependencyDraft>,
) -> AppResult<Json<Dependency>> {
    let dependency = state
        .services
        .dependencies()
        .update_dependency(&id, draft)
        .await?;
    Ok(Json(dependency))
}

/// Delete a dependency
#[utoipa::path(
    delete,
    path = "/dependencies/{id}",
    tag = "Dependencies",
    params(
        ("id" = String, Path, description = "Dependency ID")
    ),
    responses(
        (status = 200, description = "Dependency deleted"),
        (status = 404, description = "Dependency not found")
    )
)]
pub async fn delete_dependency(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.services.dependencies().delete_dependency(&id).await?;
    Ok(StatusCode::OK)
}
