use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};

use crate::{error::Result, AppState};

#[axum::debug_handler]
pub async fn list_features(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(state.content_service.features()))
}

#[axum::debug_handler]
pub async fn get_feature(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse> {
    Ok(Json(state.content_service.feature(&slug)?))
}

#[axum::debug_handler]
pub async fn list_help_categories(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(state.content_service.help_categories()))
}

#[axum::debug_handler]
pub async fn get_help_category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse> {
    Ok(Json(state.content_service.help_category(&slug)?))
}

#[axum::debug_handler]
pub async fn get_help_article(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse> {
    Ok(Json(state.content_service.help_article(&slug)?))
}
