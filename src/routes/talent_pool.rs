use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::talent_dto::{TalentListQuery, TalentListResponse},
    error::Result,
    AppState,
};

#[axum::debug_handler]
pub async fn list_talent_pool(
    State(state): State<AppState>,
    Query(query): Query<TalentListQuery>,
) -> Result<impl IntoResponse> {
    let items = state.talent_service.list(query);
    let total = items.len();
    Ok(Json(TalentListResponse { items, total }))
}
