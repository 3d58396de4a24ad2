pub mod analytics;
pub mod assessments;
pub mod candidates;
pub mod content;
pub mod health;
pub mod integrations;
pub mod interviews;
pub mod jobs;
pub mod offers;
pub mod talent_pool;
pub mod templates;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Catch-all for unmatched paths. Always a JSON 404, never an empty
/// response or a dropped connection.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Route not found" })),
    )
}
