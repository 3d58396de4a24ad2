use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::assessment_dto::{
        AssessmentListQuery, AssessmentListResponse, AssessmentResultsResponse,
    },
    error::Result,
    AppState,
};

#[axum::debug_handler]
pub async fn list_assessments(
    State(state): State<AppState>,
    Query(query): Query<AssessmentListQuery>,
) -> Result<impl IntoResponse> {
    let items = state.assessment_service.list(query);
    let total = items.len();
    Ok(Json(AssessmentListResponse { items, total }))
}

#[axum::debug_handler]
pub async fn list_recent_results(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(AssessmentResultsResponse {
        items: state.assessment_service.recent_results(),
    }))
}
