use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};
use uuid::Uuid;

use crate::{
    dto::integration_dto::{IntegrationListResponse, UpdateSettingsPayload},
    error::Result,
    AppState,
};

#[axum::debug_handler]
pub async fn list_integrations(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(IntegrationListResponse {
        categories: state.integration_service.list_grouped(),
    }))
}

#[axum::debug_handler]
pub async fn connect_integration(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    Ok(Json(state.integration_service.connect(id)?))
}

#[axum::debug_handler]
pub async fn disconnect_integration(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    Ok(Json(state.integration_service.disconnect(id)?))
}

#[axum::debug_handler]
pub async fn update_integration_settings(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateSettingsPayload>,
) -> Result<impl IntoResponse> {
    Ok(Json(state.integration_service.update_settings(id, payload)?))
}
