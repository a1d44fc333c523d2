//! End-to-end tests: real router, real services, in-memory SQLite.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;

use catalog_service_lib::infra::Database;
use common::DatabaseConfig;
use gateway_lib::config::GatewayConfig;
use gateway_lib::routes::create_router;
use gateway_lib::state::AppState;

// =============================================================================
// Test Helpers
// =============================================================================

async fn state() -> AppState {
    let config = GatewayConfig {
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
        },
        ..Default::default()
    };

    let database = Arc::new(Database::connect(&config.database).await.unwrap());
    let state = AppState::from_database(database, config);
    state
        .services
        .users()
        .ensure_default_owner(&state.config.default_owner_id)
        .await
        .unwrap();

    state
}

async fn app() -> Router {
    create_router(state().await)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

async fn create_project(app: &Router, body: Value) -> Value {
    let (status, project) = send(app, Method::POST, "/projects", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    project
}

fn timestamp(value: &Value) -> DateTime<Utc> {
    value.as_str().unwrap().parse().unwrap()
}

fn id_of(value: &Value) -> String {
    value["id"].as_str().unwrap().to_string()
}

// =============================================================================
// Project resource
// =============================================================================

#[tokio::test]
async fn list_projects_starts_empty() {
    let app = app().await;

    let (status, body) = send(&app, Method::GET, "/projects", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn create_without_creator_uses_placeholder_user() {
    let app = app().await;

    let project = create_project(&app, json!({ "name": "Alpha" })).await;

    assert_eq!(project["createdById"], "demo-user-id");
    assert!(!id_of(&project).is_empty());
}

#[tokio::test]
async fn create_then_get_echoes_fields() {
    let app = app().await;
    let created = create_project(
        &app,
        json!({
            "name": "Alpha",
            "description": "Build tooling",
            "repositoryUrl": "https://github.com/acme/alpha"
        }),
    )
    .await;

    let uri = format!("/projects/{}", id_of(&created));
    let (status, fetched) = send(&app, Method::GET, &uri, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], created["id"]);
    assert_eq!(fetched["name"], "Alpha");
    assert_eq!(fetched["description"], "Build tooling");
    assert_eq!(fetched["repositoryUrl"], "https://github.com/acme/alpha");
    assert_eq!(
        timestamp(&fetched["createdAt"]),
        timestamp(&fetched["updatedAt"])
    );
    assert!(fetched.get("components").is_none());
}

#[tokio::test]
async fn get_unknown_project_is_empty_404() {
    let app = app().await;

    let (status, body) = send(&app, Method::GET, "/projects/missing", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn update_unknown_project_is_404_and_writes_nothing() {
    let app = app().await;

    let (status, _) = send(
        &app,
        Method::PUT,
        "/projects/missing",
        Some(json!({ "name": "Ghost" })),
    )
    .await;
    let (_, list) = send(&app, Method::GET, "/projects", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn update_forces_path_id() {
    let app = app().await;
    let created = create_project(&app, json!({ "name": "Alpha" })).await;
    let id = id_of(&created);

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/projects/{}", id),
        Some(json!({ "id": "someone-else", "name": "Alpha" })),
    )
    .await;
    let (other, _) = send(&app, Method::GET, "/projects/someone-else", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id.as_str());
    assert_eq!(other, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_changes_only_the_sent_field_and_advances_updated_at() {
    let app = app().await;
    let created = create_project(
        &app,
        json!({ "name": "Alpha", "description": "before", "repositoryUrl": "https://x/alpha" }),
    )
    .await;
    let uri = format!("/projects/{}", id_of(&created));

    tokio::time::sleep(Duration::from_millis(10)).await;

    let mut body = created.clone();
    body["description"] = json!("after");
    let (status, _) = send(&app, Method::PUT, &uri, Some(body)).await;
    let (_, fetched) = send(&app, Method::GET, &uri, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["description"], "after");
    assert_eq!(fetched["name"], created["name"]);
    assert_eq!(fetched["repositoryUrl"], created["repositoryUrl"]);
    assert_eq!(fetched["createdById"], created["createdById"]);
    assert_eq!(
        timestamp(&fetched["createdAt"]),
        timestamp(&created["createdAt"])
    );
    assert!(timestamp(&fetched["updatedAt"]) > timestamp(&fetched["createdAt"]));
}

#[tokio::test]
async fn update_ignores_client_created_at() {
    let app = app().await;
    let created = create_project(&app, json!({ "name": "Alpha" })).await;
    let uri = format!("/projects/{}", id_of(&created));

    let (_, updated) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({ "name": "Alpha", "createdAt": "2000-01-01T00:00:00Z" })),
    )
    .await;

    assert_eq!(
        timestamp(&updated["createdAt"]),
        timestamp(&created["createdAt"])
    );
}

#[tokio::test]
async fn create_then_delete_then_get_is_404() {
    let app = app().await;
    let created = create_project(&app, json!({ "name": "Alpha" })).await;
    let uri = format!("/projects/{}", id_of(&created));

    let (found, _) = send(&app, Method::GET, &uri, None).await;
    let (deleted, body) = send(&app, Method::DELETE, &uri, None).await;
    let (gone, _) = send(&app, Method::GET, &uri, None).await;

    assert_eq!(found, StatusCode::OK);
    assert_eq!(deleted, StatusCode::OK);
    assert_eq!(body, Value::Null);
    assert_eq!(gone, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_unknown_project_is_404() {
    let app = app().await;

    let (status, _) = send(&app, Method::DELETE, "/projects/missing", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_project_cascades_to_components_and_dependencies() {
    let app = app().await;
    let project = create_project(&app, json!({ "name": "Alpha" })).await;
    let project_id = id_of(&project);

    let (_, component) = send(
        &app,
        Method::POST,
        "/components",
        Some(json!({ "projectId": project_id, "name": "core" })),
    )
    .await;
    let component_id = id_of(&component);

    let (status, dependency) = send(
        &app,
        Method::POST,
        "/dependencies",
        Some(json!({
            "componentId": component_id,
            "groupId": "com.squareup.okhttp3",
            "artifactId": "okhttp",
            "version": "4.12.0",
            "scope": "implementation"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dependency["addedById"], "demo-user-id");

    send(&app, Method::DELETE, &format!("/projects/{}", project_id), None).await;

    let (component_status, _) =
        send(&app, Method::GET, &format!("/components/{}", component_id), None).await;
    let (dependency_status, _) = send(
        &app,
        Method::GET,
        &format!("/dependencies/{}", id_of(&dependency)),
        None,
    )
    .await;

    assert_eq!(component_status, StatusCode::NOT_FOUND);
    assert_eq!(dependency_status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn search_matches_name_ignoring_case() {
    let app = app().await;
    create_project(&app, json!({ "name": "Gradle Alpha" })).await;
    create_project(&app, json!({ "name": "Beta" })).await;

    let (status, found) = send(&app, Method::GET, "/projects/search?name=alpha", None).await;

    assert_eq!(status, StatusCode::OK);
    let found = found.as_array().unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["name"], "Gradle Alpha");
}

#[tokio::test]
async fn user_projects_lists_creator_projects() {
    let app = app().await;
    create_project(&app, json!({ "name": "Alpha" })).await;

    let (status, projects) =
        send(&app, Method::GET, "/users/demo-user-id/projects", None).await;
    let (user_status, user) = send(&app, Method::GET, "/users/demo-user-id", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(projects.as_array().unwrap().len(), 1);
    assert_eq!(user_status, StatusCode::OK);
    assert_eq!(user["role"], "member");
}

// =============================================================================
// Error responses
// =============================================================================

#[tokio::test]
async fn missing_name_is_constraint_violation() {
    let app = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/projects",
        Some(json!({ "description": "nameless" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "CONSTRAINT_VIOLATION");
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let app = app().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/projects")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn unknown_project_reference_is_conflict() {
    let app = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/components",
        Some(json!({ "projectId": "missing", "name": "core" })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "INVALID_REFERENCE");
}

// =============================================================================
// Infrastructure
// =============================================================================

#[tokio::test]
async fn health_reports_database() {
    let app = app().await;

    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["database"]["status"], "healthy");
}

#[tokio::test]
async fn health_hides_database_error_details() {
    let state = state().await;
    state.database.get_connection().close().await.unwrap();
    let app = create_router(state);

    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["services"]["database"]["status"], "unhealthy");
    assert_eq!(body["services"]["database"]["error"], "database unreachable");
}

#[tokio::test]
async fn cors_allows_configured_origin() {
    let app = app().await;
    let request = Request::builder()
        .method(Method::GET)
        .uri("/projects")
        .header(header::ORIGIN, "http://localhost:5000")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:5000"
    );
}
