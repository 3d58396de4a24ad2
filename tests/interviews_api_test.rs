use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    routing::{get, post},
    Router,
};
use chrono::{Days, Utc};
use serde_json::{json, Value as JsonValue};
use talentflow_backend::{routes, store::Store, AppState};
use tower::ServiceExt;

fn app() -> Router {
    let app_state = AppState::new(Store::seeded());
    Router::new()
        .route("/api/interviews", get(routes::interviews::list_interviews))
        .route(
            "/api/interviews/stats",
            get(routes::interviews::interview_stats),
        )
        .route(
            "/api/interviews/interviewers",
            get(routes::interviews::list_interviewers),
        )
        .route(
            "/api/interviews/slots",
            get(routes::interviews::list_time_slots),
        )
        .route(
            "/api/interviews/preview",
            post(routes::interviews::preview_schedule),
        )
        .route(
            "/api/interviews/schedule",
            post(routes::interviews::schedule_interview),
        )
        .with_state(app_state)
}

async fn body_json(resp: axum::response::Response) -> JsonValue {
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get_json(app: &Router, uri: &str) -> JsonValue {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    body_json(resp).await
}

async fn post_json(app: &Router, uri: &str, body: JsonValue) -> axum::response::Response {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(req).await.unwrap()
}

fn future_date() -> String {
    (Utc::now().date_naive() + Days::new(30)).to_string()
}

#[tokio::test]
async fn schedule_flow_end_to_end() {
    let app = app();

    let roster = get_json(&app, "/api/interviews/interviewers").await;
    let interviewer_id = roster["interviewers"][0]["id"].as_str().unwrap().to_string();
    let slots = get_json(&app, "/api/interviews/slots").await;
    assert_eq!(slots["slots"][0], "09:00");

    // Summary stays hidden while the time is missing.
    let resp = post_json(
        &app,
        "/api/interviews/preview",
        json!({
            "date": future_date(),
            "kind": "video",
            "interviewer_ids": [interviewer_id],
        }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_json(resp).await["summary"].is_null());

    // All five fields populated: the summary appears.
    let resp = post_json(
        &app,
        "/api/interviews/preview",
        json!({
            "date": future_date(),
            "time": "10:00",
            "kind": "video",
            "duration_minutes": 45,
            "interviewer_ids": [interviewer_id],
        }),
    )
    .await;
    let preview = body_json(resp).await;
    assert_eq!(preview["summary"]["time"], "10:00");
    assert_eq!(preview["summary"]["duration_minutes"], 45);

    let resp = post_json(
        &app,
        "/api/interviews/schedule",
        json!({
            "candidate_name": "Emily Rodriguez",
            "position": "UX Designer",
            "date": future_date(),
            "time": "10:00",
            "duration_minutes": 45,
            "kind": "video",
            "interviewer_ids": [interviewer_id],
        }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let interview = body_json(resp).await;
    assert_eq!(interview["status"], "scheduled");
    assert_eq!(interview["location"], "Zoom Meeting");

    let list = get_json(&app, "/api/interviews?search=emily").await;
    assert_eq!(list["total"], 2);
}

#[tokio::test]
async fn scheduling_without_interviewers_is_a_validation_error() {
    let app = app();
    let resp = post_json(
        &app,
        "/api/interviews/schedule",
        json!({
            "candidate_name": "Emily Rodriguez",
            "position": "UX Designer",
            "date": future_date(),
            "time": "10:00",
            "kind": "video",
            "interviewer_ids": [],
        }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .to_lowercase()
        .contains("interviewer"));
}

#[tokio::test]
async fn double_booking_an_interviewer_returns_conflict() {
    let app = app();
    let roster = get_json(&app, "/api/interviews/interviewers").await;
    let interviewer_id = roster["interviewers"][0]["id"].as_str().unwrap().to_string();
    let booking = json!({
        "candidate_name": "Sarah Johnson",
        "position": "Senior Frontend Developer",
        "date": future_date(),
        "time": "13:30",
        "kind": "phone",
        "interviewer_ids": [interviewer_id],
    });

    let resp = post_json(&app, "/api/interviews/schedule", booking.clone()).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = post_json(&app, "/api/interviews/schedule", booking).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn status_filter_and_stats_agree() {
    let app = app();
    let completed = get_json(&app, "/api/interviews?status=completed").await;
    assert_eq!(completed["total"], 1);

    let stats = get_json(&app, "/api/interviews/stats").await;
    assert_eq!(stats["completed"], 1);
    assert_eq!(stats["scheduled"], 2);
    assert_eq!(stats["total"], 3);
}
