use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};
use uuid::Uuid;

use crate::{
    dto::analytics_dto::{
        DiversityResponse, FunnelResponse, KpiListResponse, SourceListResponse,
        VideoInterviewListResponse,
    },
    error::Result,
    AppState,
};

#[axum::debug_handler]
pub async fn list_kpis(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(KpiListResponse {
        items: state.analytics_service.kpis(),
    }))
}

#[axum::debug_handler]
pub async fn list_sources(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(SourceListResponse {
        items: state.analytics_service.sources(),
    }))
}

#[axum::debug_handler]
pub async fn funnel(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(FunnelResponse {
        stages: state.analytics_service.funnel(),
    }))
}

#[axum::debug_handler]
pub async fn diversity(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(DiversityResponse {
        items: state.analytics_service.diversity(),
    }))
}

#[axum::debug_handler]
pub async fn list_video_interviews(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(VideoInterviewListResponse {
        items: state.analytics_service.video_interviews(),
    }))
}

#[axum::debug_handler]
pub async fn video_insights(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    Ok(Json(state.analytics_service.video_insights(id)?))
}
