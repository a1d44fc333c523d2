//! User handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use common::AppResult;
use domain::{Project, User};

use crate::state::AppState;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/:id", get(get_user))
        .route("/:id/projects", get(list_user_projects))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User profile", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<User>> {
    let user = state.services.users().get_user(&id).await?;
    Ok(Json(user))
}

/// List projects created by a user
#[utoipa::path(
    get,
    path = "/users/{id}/projects",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Projects created by the user", body = Vec<Project>)
    )
)]
pub async fn list_user_projects(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Project>>> {
    let projects = state
        .services
        .projects()
        .list_projects_by_creator(&id)
        .await?;
    Ok(Json(projects))
}
