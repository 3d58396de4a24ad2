use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::offer_dto::{OfferListQuery, OfferListResponse, OnboardingResponse},
    error::Result,
    AppState,
};

#[axum::debug_handler]
pub async fn list_offers(
    State(state): State<AppState>,
    Query(query): Query<OfferListQuery>,
) -> Result<impl IntoResponse> {
    let items = state.offer_service.list(query);
    let total = items.len();
    Ok(Json(OfferListResponse { items, total }))
}

#[axum::debug_handler]
pub async fn offer_stats(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(state.offer_service.stats()))
}

#[axum::debug_handler]
pub async fn list_onboarding(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(OnboardingResponse {
        items: state.offer_service.onboarding(),
    }))
}
