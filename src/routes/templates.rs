use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::template_dto::{
        CreateTemplatePayload, PlaceholdersResponse, SplicePayload, TemplateListResponse,
        UpdateTemplatePayload,
    },
    error::Result,
    AppState,
};

#[axum::debug_handler]
pub async fn list_templates(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let items = state.template_service.list();
    let total = items.len();
    Ok(Json(TemplateListResponse { items, total }))
}

#[utoipa::path(
    post,
    path = "/api/templates",
    responses(
        (status = 201, description = "Template created with usage 0"),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_template(
    State(state): State<AppState>,
    Json(payload): Json<CreateTemplatePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let template = state.template_service.create(payload);
    Ok((StatusCode::CREATED, Json(template)))
}

#[utoipa::path(
    patch,
    path = "/api/templates/{id}",
    params(
        ("id" = Uuid, Path, description = "Template ID")
    ),
    responses(
        (status = 200, description = "Template updated"),
        (status = 404, description = "Template not found")
    )
)]
#[axum::debug_handler]
pub async fn update_template(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTemplatePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    Ok(Json(state.template_service.update(id, payload)?))
}

#[utoipa::path(
    delete,
    path = "/api/templates/{id}",
    params(
        ("id" = Uuid, Path, description = "Template ID")
    ),
    responses(
        (status = 204, description = "Template deleted"),
        (status = 404, description = "Template not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_template(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.template_service.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/templates/{id}/duplicate",
    params(
        ("id" = Uuid, Path, description = "Template ID")
    ),
    responses(
        (status = 201, description = "Copy created with usage reset"),
        (status = 404, description = "Template not found")
    )
)]
#[axum::debug_handler]
pub async fn duplicate_template(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let copy = state.template_service.duplicate(id)?;
    Ok((StatusCode::CREATED, Json(copy)))
}

#[axum::debug_handler]
pub async fn splice_template(
    State(state): State<AppState>,
    Json(payload): Json<SplicePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    Ok(Json(state.template_service.splice(payload)))
}

#[axum::debug_handler]
pub async fn list_placeholders(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(PlaceholdersResponse {
        placeholders: state.template_service.placeholders(),
    }))
}
