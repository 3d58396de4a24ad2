use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    routing::{get, patch, post},
    Router,
};
use serde_json::{json, Value as JsonValue};
use talentflow_backend::{routes, store::Store, AppState};
use tower::ServiceExt;

fn app() -> Router {
    let app_state = AppState::new(Store::seeded());
    Router::new()
        .route(
            "/api/templates",
            get(routes::templates::list_templates).post(routes::templates::create_template),
        )
        .route(
            "/api/templates/placeholders",
            get(routes::templates::list_placeholders),
        )
        .route(
            "/api/templates/splice",
            post(routes::templates::splice_template),
        )
        .route(
            "/api/templates/:id",
            patch(routes::templates::update_template).delete(routes::templates::delete_template),
        )
        .route(
            "/api/templates/:id/duplicate",
            post(routes::templates::duplicate_template),
        )
        .with_state(app_state)
}

async fn body_json(resp: axum::response::Response) -> JsonValue {
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn list(app: &Router) -> JsonValue {
    let req = Request::builder()
        .method("GET")
        .uri("/api/templates")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    body_json(resp).await
}

#[tokio::test]
async fn template_crud_round() {
    let app = app();
    let seeded = list(&app).await;
    assert_eq!(seeded["total"], 3);

    let create_body = json!({
        "name": "Rejection Notice",
        "channel": "email",
        "subject": "Update on your application - {{job.title}}",
        "content": "Hi {{candidate.name}}, thank you for your time.",
        "category": "rejection"
    });
    let req = Request::builder()
        .method("POST")
        .uri("/api/templates")
        .header("content-type", "application/json")
        .body(Body::from(create_body.to_string()))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = body_json(resp).await;
    assert_eq!(created["usage"], 0);
    let id = created["id"].as_str().unwrap().to_string();

    let update_body = json!({ "name": "Rejection Notice v2" });
    let req = Request::builder()
        .method("PATCH")
        .uri(format!("/api/templates/{}", id))
        .header("content-type", "application/json")
        .body(Body::from(update_body.to_string()))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated = body_json(resp).await;
    assert_eq!(updated["name"], "Rejection Notice v2");
    assert_eq!(updated["content"], "Hi {{candidate.name}}, thank you for your time.");

    let req = Request::builder()
        .method("DELETE")
        .uri(format!("/api/templates/{}", id))
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(list(&app).await["total"], 3);
}

#[tokio::test]
async fn creating_with_an_empty_name_is_rejected() {
    let app = app();
    let create_body = json!({
        "name": "",
        "channel": "sms",
        "content": "hello",
        "category": "general"
    });
    let req = Request::builder()
        .method("POST")
        .uri("/api/templates")
        .header("content-type", "application/json")
        .body(Body::from(create_body.to_string()))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn duplicate_clones_with_copy_suffix_and_fresh_usage() {
    let app = app();
    let seeded = list(&app).await;
    let original = seeded["items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|template| template["name"] == "Interview Invitation")
        .expect("seeded template")
        .clone();
    let original_id = original["id"].as_str().unwrap();
    assert_eq!(original["usage"], 45);

    let req = Request::builder()
        .method("POST")
        .uri(format!("/api/templates/{}/duplicate", original_id))
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let copy = body_json(resp).await;
    assert_eq!(copy["name"], "Interview Invitation (Copy)");
    assert_eq!(copy["usage"], 0);
    assert_ne!(copy["id"], original["id"]);

    let after = list(&app).await;
    assert_eq!(after["total"], 4);
    let kept = after["items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|template| template["id"] == original["id"])
        .expect("original remains");
    assert_eq!(kept["usage"], 45);
}

#[tokio::test]
async fn splice_inserts_placeholder_at_cursor() {
    let app = app();
    let splice_body = json!({
        "text": "Dear ,",
        "selection_start": 5,
        "selection_end": 5,
        "insertion": "{{candidate.name}}"
    });
    let req = Request::builder()
        .method("POST")
        .uri("/api/templates/splice")
        .header("content-type", "application/json")
        .body(Body::from(splice_body.to_string()))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let result = body_json(resp).await;
    assert_eq!(result["text"], "Dear {{candidate.name}},");
    assert_eq!(result["cursor"], 23);

    let req = Request::builder()
        .method("GET")
        .uri("/api/templates/placeholders")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let placeholders = body_json(resp).await;
    assert!(placeholders["placeholders"]
        .as_array()
        .unwrap()
        .iter()
        .any(|token| token == "{{candidate.name}}"));
}
