//! # REST API HTTP Server
//!
//! Axum router for the catalog endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::errors::RestError;
use super::request::{FrameworkPayload, SearchParams};
use super::response::FrameworkBody;
use crate::catalog::{CatalogService, FrameworkId};

/// REST API server state
pub struct RestServer {
    service: Arc<CatalogService>,
}

impl RestServer {
    pub fn new(service: CatalogService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Build the Axum router
    pub fn router(self) -> Router {
        Router::new()
            .route(
                "/api/v1/frameworks",
                get(list_frameworks).post(create_framework),
            )
            .route("/api/v1/frameworks/search", get(search_frameworks))
            .route(
                "/api/v1/frameworks/:framework",
                get(get_framework)
                    .put(update_framework)
                    .delete(delete_framework),
            )
            .route(
                "/api/v1/frameworks/:framework/versions/:version",
                post(add_version),
            )
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(self.service)
    }
}

/// Shared state type
type ServerState = Arc<CatalogService>;

/// List all frameworks
async fn list_frameworks(
    State(service): State<ServerState>,
) -> Result<Json<Vec<FrameworkBody>>, RestError> {
    let frameworks = service.find_all()?;
    Ok(Json(frameworks.into_iter().map(FrameworkBody::from).collect()))
}

/// Create a framework
async fn create_framework(
    State(service): State<ServerState>,
    Json(payload): Json<FrameworkPayload>,
) -> Result<(StatusCode, Json<FrameworkBody>), RestError> {
    payload.validate()?;

    let created = service.create(payload.into_draft())?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Get a single framework by id
async fn get_framework(
    State(service): State<ServerState>,
    Path(id): Path<FrameworkId>,
) -> Result<Json<FrameworkBody>, RestError> {
    let framework = service
        .find_by_id(id)?
        .ok_or_else(|| RestError::NotFound(format!("framework does not exist: id {}", id)))?;

    Ok(Json(framework.into()))
}

/// Replace a framework's fields wholesale
async fn update_framework(
    State(service): State<ServerState>,
    Path(id): Path<FrameworkId>,
    Json(payload): Json<FrameworkPayload>,
) -> Result<StatusCode, RestError> {
    service.update(id, payload.into_draft())?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a framework
async fn delete_framework(
    State(service): State<ServerState>,
    Path(id): Path<FrameworkId>,
) -> Result<StatusCode, RestError> {
    service.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Search frameworks by optional criteria
async fn search_frameworks(
    State(service): State<ServerState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<FrameworkBody>>, RestError> {
    let matches = service.search(&params.into_filter())?;
    Ok(Json(matches.into_iter().map(FrameworkBody::from).collect()))
}

/// Append a version to the named framework
async fn add_version(
    State(service): State<ServerState>,
    Path((name, version)): Path<(String, String)>,
) -> Result<StatusCode, RestError> {
    service.add_version(&name, &version)?;
    Ok(StatusCode::CREATED)
}
