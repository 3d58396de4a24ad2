use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use uuid::Uuid;

use crate::{
    dto::job_dto::{DraftResponse, JobListQuery, JobListResponse, UpdateDraftPayload},
    error::Result,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/jobs",
    params(
        ("search" = Option<String>, Query, description = "Title substring, case-insensitive"),
        ("status" = Option<String>, Query, description = "Filter by job status")
    ),
    responses(
        (status = 200, description = "Filtered job postings with the visible count")
    )
)]
#[axum::debug_handler]
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobListQuery>,
) -> Result<impl IntoResponse> {
    let items = state.job_service.list(query);
    let total = items.len();
    Ok(Json(JobListResponse { items, total }))
}

#[utoipa::path(
    get,
    path = "/api/jobs/stats",
    responses(
        (status = 200, description = "Counts by status plus total applicants")
    )
)]
#[axum::debug_handler]
pub async fn job_stats(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(state.job_service.stats()))
}

#[utoipa::path(
    get,
    path = "/api/jobs/{id}",
    params(
        ("id" = Uuid, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job found"),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    Ok(Json(state.job_service.get(id)?))
}

#[utoipa::path(
    post,
    path = "/api/jobs/drafts",
    responses(
        (status = 201, description = "Draft created at the details step")
    )
)]
#[axum::debug_handler]
pub async fn create_draft(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let draft = state.job_service.create_draft();
    Ok((StatusCode::CREATED, Json(DraftResponse::from(draft))))
}

#[utoipa::path(
    get,
    path = "/api/jobs/drafts/{id}",
    params(
        ("id" = Uuid, Path, description = "Draft ID")
    ),
    responses(
        (status = 200, description = "Draft state"),
        (status = 404, description = "Draft not found")
    )
)]
#[axum::debug_handler]
pub async fn get_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    Ok(Json(DraftResponse::from(state.job_service.draft(id)?)))
}

#[utoipa::path(
    patch,
    path = "/api/jobs/drafts/{id}",
    params(
        ("id" = Uuid, Path, description = "Draft ID")
    ),
    responses(
        (status = 200, description = "Form fields merged into the draft"),
        (status = 404, description = "Draft not found")
    )
)]
#[axum::debug_handler]
pub async fn update_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateDraftPayload>,
) -> Result<impl IntoResponse> {
    let draft = state.job_service.update_draft(id, payload)?;
    Ok(Json(DraftResponse::from(draft)))
}

#[utoipa::path(
    post,
    path = "/api/jobs/drafts/{id}/next",
    params(
        ("id" = Uuid, Path, description = "Draft ID")
    ),
    responses(
        (status = 200, description = "Moved one step forward"),
        (status = 400, description = "Required fields missing or already at the last step"),
        (status = 404, description = "Draft not found")
    )
)]
#[axum::debug_handler]
pub async fn advance_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    Ok(Json(DraftResponse::from(state.job_service.advance_draft(id)?)))
}

#[utoipa::path(
    post,
    path = "/api/jobs/drafts/{id}/back",
    params(
        ("id" = Uuid, Path, description = "Draft ID")
    ),
    responses(
        (status = 200, description = "Moved one step back"),
        (status = 400, description = "Already at the first step"),
        (status = 404, description = "Draft not found")
    )
)]
#[axum::debug_handler]
pub async fn back_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    Ok(Json(DraftResponse::from(state.job_service.back_draft(id)?)))
}

#[utoipa::path(
    post,
    path = "/api/jobs/drafts/{id}/channels/{name}",
    params(
        ("id" = Uuid, Path, description = "Draft ID"),
        ("name" = String, Path, description = "Distribution channel name")
    ),
    responses(
        (status = 200, description = "Channel selection toggled"),
        (status = 404, description = "Draft or channel not found")
    )
)]
#[axum::debug_handler]
pub async fn toggle_channel(
    State(state): State<AppState>,
    Path((id, name)): Path<(Uuid, String)>,
) -> Result<impl IntoResponse> {
    Ok(Json(DraftResponse::from(
        state.job_service.toggle_channel(id, &name)?,
    )))
}

#[utoipa::path(
    post,
    path = "/api/jobs/drafts/{id}/publish",
    params(
        ("id" = Uuid, Path, description = "Draft ID")
    ),
    responses(
        (status = 201, description = "Job created from the draft"),
        (status = 400, description = "Draft has not reached the distribution step"),
        (status = 404, description = "Draft not found")
    )
)]
#[axum::debug_handler]
pub async fn publish_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let job = state.job_service.publish_draft(id)?;
    Ok((StatusCode::CREATED, Json(job)))
}
