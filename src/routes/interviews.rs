use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::interview_dto::{
        InterviewListQuery, InterviewListResponse, PreviewPayload, PreviewResponse,
        RosterResponse, SchedulePayload, TimeSlotsResponse,
    },
    error::Result,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/interviews",
    params(
        ("search" = Option<String>, Query, description = "Candidate or position substring"),
        ("status" = Option<String>, Query, description = "Filter by interview status")
    ),
    responses(
        (status = 200, description = "Filtered interviews with the visible count")
    )
)]
#[axum::debug_handler]
pub async fn list_interviews(
    State(state): State<AppState>,
    Query(query): Query<InterviewListQuery>,
) -> Result<impl IntoResponse> {
    let items = state.interview_service.list(query);
    let total = items.len();
    Ok(Json(InterviewListResponse { items, total }))
}

#[axum::debug_handler]
pub async fn interview_stats(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(state.interview_service.stats()))
}

#[axum::debug_handler]
pub async fn list_interviewers(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(RosterResponse {
        interviewers: state.interview_service.roster(),
    }))
}

#[axum::debug_handler]
pub async fn list_time_slots(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(TimeSlotsResponse {
        slots: state.interview_service.time_slots(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/interviews/preview",
    responses(
        (status = 200, description = "Summary when the form is complete, null otherwise")
    )
)]
#[axum::debug_handler]
pub async fn preview_schedule(
    State(state): State<AppState>,
    Json(payload): Json<PreviewPayload>,
) -> Result<impl IntoResponse> {
    Ok(Json(PreviewResponse {
        summary: state.interview_service.preview(payload),
    }))
}

#[utoipa::path(
    post,
    path = "/api/interviews/schedule",
    responses(
        (status = 201, description = "Interview booked"),
        (status = 400, description = "A required field is missing or invalid"),
        (status = 409, description = "An interviewer is already booked in that slot")
    )
)]
#[axum::debug_handler]
pub async fn schedule_interview(
    State(state): State<AppState>,
    Json(payload): Json<SchedulePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let interview = state.interview_service.schedule(payload)?;
    Ok((StatusCode::CREATED, Json(interview)))
}
