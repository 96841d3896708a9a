//! Handlers for the `/projects` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use bson::oid::ObjectId;
use starter_core::error::CoreError;
use starter_core::project::is_known_status;
use starter_db::ident;
use starter_db::models::project::{ProjectCreate, ProjectOut, ProjectUpdate};
use starter_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::query::ListParams;
use crate::response::OkResponse;
use crate::state::AppState;

fn parse_project_id(raw: &str) -> AppResult<ObjectId> {
    ident::parse(raw).ok_or_else(|| AppError::BadRequest("Invalid project id".into()))
}

fn not_found(id: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        id: id.to_string(),
    })
}

fn warn_unknown_status(status: &str) {
    if !is_known_status(status) {
        tracing::warn!(status, "Project status outside active/paused/completed");
    }
}

/// GET /api/projects
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<ProjectOut>>> {
    let limit = params.limit();
    if limit < 0 {
        return Err(AppError::BadRequest("limit must not be negative".into()));
    }
    let projects = ProjectRepo::list(state.store()?, limit).await?;
    tracing::debug!(count = projects.len(), limit, "Listed projects");
    Ok(Json(projects))
}

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ProjectCreate>,
) -> AppResult<Json<ProjectOut>> {
    input.validate().map_err(AppError::unprocessable)?;
    warn_unknown_status(&input.status);

    let project = ProjectRepo::create(state.store()?, &input).await?;
    tracing::info!(id = %project.id, name = %project.name, "Project created");
    Ok(Json(project))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ProjectOut>> {
    let oid = parse_project_id(&id)?;
    let project = ProjectRepo::find_by_id(state.store()?, oid)
        .await?
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(project))
}

/// PUT /api/projects/{id}
///
/// Merge-patch: only fields present in the body change. An empty body is
/// rejected before the store is touched.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<ProjectUpdate>,
) -> AppResult<Json<ProjectOut>> {
    input.validate().map_err(AppError::unprocessable)?;
    let oid = parse_project_id(&id)?;
    if input.is_empty() {
        return Err(AppError::BadRequest("No changes provided".into()));
    }
    if let Some(status) = &input.status {
        warn_unknown_status(status);
    }

    let project = ProjectRepo::update(state.store()?, oid, &input)
        .await?
        .ok_or_else(|| not_found(&id))?;
    tracing::info!(id = %project.id, "Project updated");
    Ok(Json(project))
}

/// DELETE /api/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<OkResponse>> {
    let oid = parse_project_id(&id)?;
    if ProjectRepo::delete(state.store()?, oid).await? {
        tracing::info!(%id, "Project deleted");
        Ok(Json(OkResponse::ok()))
    } else {
        Err(not_found(&id))
    }
}
