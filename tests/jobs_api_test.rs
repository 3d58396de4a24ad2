use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value as JsonValue};
use talentflow_backend::{routes, store::Store, AppState};
use tower::ServiceExt;

fn app() -> Router {
    let app_state = AppState::new(Store::seeded());
    Router::new()
        .route("/api/jobs", get(routes::jobs::list_jobs))
        .route("/api/jobs/stats", get(routes::jobs::job_stats))
        .route("/api/jobs/drafts", post(routes::jobs::create_draft))
        .route(
            "/api/jobs/drafts/:id",
            get(routes::jobs::get_draft).patch(routes::jobs::update_draft),
        )
        .route("/api/jobs/drafts/:id/next", post(routes::jobs::advance_draft))
        .route("/api/jobs/drafts/:id/back", post(routes::jobs::back_draft))
        .route(
            "/api/jobs/drafts/:id/channels/:name",
            post(routes::jobs::toggle_channel),
        )
        .route(
            "/api/jobs/drafts/:id/publish",
            post(routes::jobs::publish_draft),
        )
        .layer(axum::middleware::from_fn_with_state(
            talentflow_backend::middleware::rate_limit::new_rps_state(100),
            talentflow_backend::middleware::rate_limit::rps_middleware,
        ))
        .fallback(routes::not_found)
        .with_state(app_state)
}

async fn body_json(resp: axum::response::Response) -> JsonValue {
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn wizard_flow_end_to_end() {
    let app = app();

    let req = Request::builder()
        .method("POST")
        .uri("/api/jobs/drafts")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let draft = body_json(resp).await;
    let id = draft["id"].as_str().unwrap().to_string();
    assert_eq!(draft["step"], "details");
    assert_eq!(draft["can_advance"], false);
    assert_eq!(draft["can_go_back"], false);

    // Next is refused while title/location are empty.
    let req = Request::builder()
        .method("POST")
        .uri(format!("/api/jobs/drafts/{}/next", id))
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Title alone is not enough.
    let patch_body = json!({ "title": "Platform Engineer" });
    let req = Request::builder()
        .method("PATCH")
        .uri(format!("/api/jobs/drafts/{}", id))
        .header("content-type", "application/json")
        .body(Body::from(patch_body.to_string()))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["can_advance"], false);

    let patch_body = json!({ "location": "Remote", "job_type": "full-time" });
    let req = Request::builder()
        .method("PATCH")
        .uri(format!("/api/jobs/drafts/{}", id))
        .header("content-type", "application/json")
        .body(Body::from(patch_body.to_string()))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let draft = body_json(resp).await;
    assert_eq!(draft["can_advance"], true);
    assert_eq!(draft["form"]["title"], "Platform Engineer");

    for expected_step in ["description", "distribution"] {
        let req = Request::builder()
            .method("POST")
            .uri(format!("/api/jobs/drafts/{}/next", id))
            .body(Body::empty())
            .unwrap();
        let resp = app.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["step"], expected_step);
    }

    // Select an extra channel, then publish.
    let req = Request::builder()
        .method("POST")
        .uri(format!("/api/jobs/drafts/{}/channels/Stack%20Overflow", id))
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let req = Request::builder()
        .method("POST")
        .uri(format!("/api/jobs/drafts/{}/publish", id))
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let job = body_json(resp).await;
    assert_eq!(job["status"], "active");
    let channels: Vec<&str> = job["channels"]
        .as_array()
        .unwrap()
        .iter()
        .map(|value| value.as_str().unwrap())
        .collect();
    assert_eq!(channels, vec!["LinkedIn", "Indeed", "Stack Overflow"]);

    // The draft is consumed and the posting shows up in the list.
    let req = Request::builder()
        .method("GET")
        .uri(format!("/api/jobs/drafts/{}", id))
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = Request::builder()
        .method("GET")
        .uri("/api/jobs?search=platform")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let list = body_json(resp).await;
    assert_eq!(list["total"], 1);
}

#[tokio::test]
async fn back_is_rejected_on_the_first_step() {
    let app = app();
    let req = Request::builder()
        .method("POST")
        .uri("/api/jobs/drafts")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let id = body_json(resp).await["id"].as_str().unwrap().to_string();

    let req = Request::builder()
        .method("POST")
        .uri(format!("/api/jobs/drafts/{}/back", id))
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn job_list_filters_by_status_and_reports_the_count() {
    let app = app();

    let req = Request::builder()
        .method("GET")
        .uri("/api/jobs?status=active")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let list = body_json(resp).await;
    let items = list["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(list["total"], 2);
    assert!(items.iter().all(|job| job["status"] == "active"));

    // Empty search returns the full seeded list.
    let req = Request::builder()
        .method("GET")
        .uri("/api/jobs")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(body_json(resp).await["total"], 4);

    let req = Request::builder()
        .method("GET")
        .uri("/api/jobs/stats")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let stats = body_json(resp).await;
    assert_eq!(stats["active"], 2);
    assert_eq!(stats["total_applicants"], 87);
}

#[tokio::test]
async fn unknown_routes_fall_back_to_a_json_404() {
    let app = app();
    let req = Request::builder()
        .method("GET")
        .uri("/api/does-not-exist")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert!(body["error"].is_string());
}
